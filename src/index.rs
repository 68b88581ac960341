//! # Index — Odd-Only Position Mapping
//!
//! The sieve stores only odd candidates starting at 3, so position `i` holds
//! the value `2i + 3`. The even prime 2 is never stored and is special-cased
//! by every query.
//!
//! | index | 0 | 1 | 2 | 3 | 4  | 5  |
//! |-------|---|---|---|---|----|----|
//! | value | 3 | 5 | 7 | 9 | 11 | 13 |

/// Position of the odd value `value` (must be odd and >= 3).
#[inline]
pub fn index_of_value(value: u64) -> usize {
    debug_assert!(value >= 3 && value % 2 == 1, "not an odd value >= 3: {}", value);
    ((value - 3) / 2) as usize
}

/// Largest index whose value still fits in a `u64`.
pub const MAX_INDEX: u64 = (u64::MAX - 3) / 2;

/// Odd value stored at `index`.
///
/// Defined for `index <= MAX_INDEX`, which no allocatable storage exceeds.
/// Use [`checked_value_at_index`] when the index is not bounded by a slice.
#[inline]
pub fn value_at_index(index: usize) -> u64 {
    debug_assert!(index as u64 <= MAX_INDEX, "index {} overflows u64", index);
    2 * index as u64 + 3
}

/// Odd value stored at `index`, or `None` past [`MAX_INDEX`].
#[inline]
pub fn checked_value_at_index(index: usize) -> Option<u64> {
    (index as u64).checked_mul(2)?.checked_add(3)
}

/// Largest value a sieve of `len` cells represents. An empty sieve covers
/// only the constant 2.
#[inline]
pub fn max_covered(len: usize) -> u64 {
    if len > 0 {
        value_at_index(len - 1)
    } else {
        2
    }
}
