//! # Sieve — Odd-Only Sieve of Eratosthenes
//!
//! Builds a primality table over the odd integers `3..=max_covered` in
//! caller-owned storage. The value 2 is never stored (see [`crate::index`]),
//! which halves memory compared to one cell per integer: a table covering
//! 80,000,001 needs 40M one-byte cells.
//!
//! ## Algorithm
//!
//! Walk the odd candidates `p = 3, 5, 7, ...` while the index of `p²` is
//! still inside the storage. For each candidate whose cell is still set,
//! clear every odd multiple from `p²` upward. In index space consecutive odd
//! multiples of `p` are exactly `p` cells apart (their values differ by `2p`),
//! so marking is a plain strided walk.
//!
//! The index of `p²` is carried incrementally instead of being recomputed:
//! moving from `p` to `p + 2` adds `p`, then `p + 2`, to the previous index.
//! Since `index_of_value((p+2)²) - index_of_value(p²) = 2p + 2`, the two
//! additions must straddle the factor increment in exactly that order.
//!
//! Complexity: O(n log log n) time, O(n) space for `n` cells.
//!
//! ## Storage
//!
//! Builder and queries are generic over any slice of [`SieveCell`]: `bool`
//! and `u8` are supported out of the box. [`PrimeTable`] bundles an owned
//! `Vec<bool>` with its coverage bound for callers that do not need to manage
//! the storage themselves.

use std::time::Instant;

use tracing::debug;

use crate::error::SieveError;
use crate::index::{index_of_value, max_covered, value_at_index};
use crate::query::{self, Primes};

/// A one-byte, boolean-like cell of sieve storage.
///
/// After [`sift`] a cell reads as prime iff `value_at_index(i)` is prime.
pub trait SieveCell: Copy {
    const PRIME: Self;
    const COMPOSITE: Self;

    fn is_prime_cell(self) -> bool;
}

impl SieveCell for bool {
    const PRIME: Self = true;
    const COMPOSITE: Self = false;

    #[inline]
    fn is_prime_cell(self) -> bool {
        self
    }
}

impl SieveCell for u8 {
    const PRIME: Self = 1;
    const COMPOSITE: Self = 0;

    #[inline]
    fn is_prime_cell(self) -> bool {
        self != 0
    }
}

/// Position of the sieve's current candidate prime.
///
/// Holds the candidate's index, its value (`factor`) and the index of
/// `factor²`, where marking for that candidate starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub index: usize,
    pub factor: usize,
    pub index_square: usize,
}

impl Candidate {
    /// The first candidate: value 3 at index 0, whose square 9 sits at index 3.
    pub fn first() -> Self {
        Candidate {
            index: 0,
            factor: 3,
            index_square: 3,
        }
    }

    /// Step to the next odd candidate.
    #[inline]
    pub fn advance(&mut self) {
        self.index += 1;
        self.index_square += self.factor;
        self.factor += 2;
        self.index_square += self.factor;
    }
}

/// Clear `cells[0]`, `cells[stride]`, `cells[2 * stride]`, ... up to the end
/// of the slice. Marking stops once fewer than `stride + 1` cells remain past
/// the current position.
#[inline]
pub fn mark_multiples<C: SieveCell>(cells: &mut [C], stride: usize) {
    debug_assert!(stride > 0);
    for cell in cells.iter_mut().step_by(stride) {
        *cell = C::COMPOSITE;
    }
}

/// Sieve `storage` in place and return the largest value it now covers.
///
/// Every cell is reset first, so storage contents on entry do not matter.
/// Lengths 0 and 1 are accepted: nothing gets marked and the bound is 2 or 3.
pub fn sift<C: SieveCell>(storage: &mut [C]) -> u64 {
    let start = Instant::now();
    storage.fill(C::PRIME);

    let n = storage.len();
    let mut candidate = Candidate::first();
    while candidate.index_square < n {
        if storage[candidate.index].is_prime_cell() {
            mark_multiples(&mut storage[candidate.index_square..], candidate.factor);
        }
        candidate.advance();
    }

    let max = max_covered(n);
    debug!(
        len = n,
        max_covered = max,
        last_factor = candidate.factor,
        elapsed_us = start.elapsed().as_micros() as u64,
        "sieve built"
    );
    max
}

/// Number of cells needed so that the table covers `bound`.
pub fn len_for_bound(bound: u64) -> usize {
    if bound < 3 {
        0
    } else {
        index_of_value(bound | 1) + 1
    }
}

/// An owned, built sieve.
///
/// Construction sifts once; afterwards the table is read-only and can be
/// shared between threads for concurrent queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeTable {
    cells: Vec<bool>,
    max_covered: u64,
}

impl PrimeTable {
    /// Build a table with `len` cells, covering up to `2 * len + 1`.
    pub fn with_len(len: usize) -> Self {
        let mut cells = vec![false; len];
        let max_covered = sift(&mut cells);
        PrimeTable { cells, max_covered }
    }

    /// Build the smallest table whose coverage includes `bound`.
    pub fn covering(bound: u64) -> Self {
        Self::with_len(len_for_bound(bound))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Largest value this table represents.
    #[inline]
    pub fn max_covered(&self) -> u64 {
        self.max_covered
    }

    /// Raw cells; cell `i` is the primality of `2i + 3`.
    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    /// Value stored at `index`, if the table has that many cells.
    pub fn value_at(&self, index: usize) -> Option<u64> {
        (index < self.cells.len()).then(|| value_at_index(index))
    }

    pub fn is_prime(&self, x: u64) -> Result<bool, SieveError> {
        query::is_prime(x, &self.cells)
    }

    pub fn nth_prime(&self, n: usize) -> Option<u64> {
        query::find_nth_prime(n, &self.cells)
    }

    pub fn next_prime(&self, prime: u64) -> Result<Option<u64>, SieveError> {
        query::find_next_prime(prime, &self.cells)
    }

    pub fn primes(&self) -> Primes<'_, bool> {
        query::enumerate_primes(&self.cells)
    }

    pub fn prime_count(&self) -> usize {
        query::prime_count(&self.cells)
    }
}

impl<'a> IntoIterator for &'a PrimeTable {
    type Item = u64;
    type IntoIter = Primes<'a, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.primes()
    }
}
