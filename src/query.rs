//! # Query — Read-Only Lookups on a Built Sieve
//!
//! All functions take storage previously filled by [`crate::sieve::sift`] and
//! never mutate it, so any number of threads may query the same table.
//!
//! | Operation           | Cost         | Not found / invalid              |
//! |---------------------|--------------|----------------------------------|
//! | [`is_prime`]        | O(1)         | `Err` when value is not covered  |
//! | [`find_nth_prime`]  | O(n)         | `None`                           |
//! | [`find_next_prime`] | O(gap)       | `Err` on bad input, `None` at end|
//! | [`enumerate_primes`]| O(n) lazily  | never fails                      |

use std::iter::{Enumerate, FusedIterator};
use std::slice;

use crate::error::SieveError;
use crate::index::{index_of_value, max_covered, value_at_index};
use crate::sieve::SieveCell;

/// Primality of `x` according to the table.
///
/// Fails for empty storage and for values above the coverage bound rather
/// than guessing.
pub fn is_prime<C: SieveCell>(x: u64, storage: &[C]) -> Result<bool, SieveError> {
    if storage.is_empty() {
        return Err(SieveError::EmptySieve);
    }
    let max = max_covered(storage.len());
    if x > max {
        return Err(SieveError::OutOfRange {
            value: x,
            max_covered: max,
        });
    }

    if x < 2 {
        return Ok(false);
    }
    if x == 2 {
        return Ok(true);
    }
    if x % 2 == 0 {
        return Ok(false);
    }
    Ok(storage[index_of_value(x)].is_prime_cell())
}

/// The `n`-th prime (1-based: the 1st prime is 2), or `None` when the table
/// holds fewer than `n` primes. `n == 0` has no answer.
pub fn find_nth_prime<C: SieveCell>(n: usize, storage: &[C]) -> Option<u64> {
    match n {
        0 => None,
        1 => Some(2),
        // 2 is already counted, so the n-th prime is the (n-1)-th set cell
        _ => storage
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_prime_cell())
            .nth(n - 2)
            .map(|(i, _)| value_at_index(i)),
    }
}

/// The smallest prime greater than `prime`.
///
/// `prime` must be covered and marked prime in the table, otherwise this
/// returns an error; an empty table is always [`SieveError::EmptySieve`].
/// `Ok(None)` means the successor lies beyond coverage.
pub fn find_next_prime<C: SieveCell>(
    prime: u64,
    storage: &[C],
) -> Result<Option<u64>, SieveError> {
    if storage.is_empty() {
        return Err(SieveError::EmptySieve);
    }
    if prime == 2 {
        return Ok(Some(3));
    }
    if !is_prime(prime, storage)? {
        return Err(SieveError::NotPrime { value: prime });
    }

    let after = index_of_value(prime) + 1;
    Ok(storage[after..]
        .iter()
        .position(|cell| cell.is_prime_cell())
        .map(|offset| value_at_index(after + offset)))
}

/// All primes the table covers, ascending, starting with 2.
pub fn enumerate_primes<C: SieveCell>(storage: &[C]) -> Primes<'_, C> {
    Primes {
        cells: storage.iter().enumerate(),
        emitted_two: false,
    }
}

/// Number of primes the table covers, including 2.
pub fn prime_count<C: SieveCell>(storage: &[C]) -> usize {
    1 + storage.iter().filter(|cell| cell.is_prime_cell()).count()
}

/// Lazy ascending iterator over the primes of a built sieve.
///
/// A clone continues from the same position; call [`enumerate_primes`] again
/// to start over.
#[derive(Debug, Clone)]
pub struct Primes<'a, C> {
    cells: Enumerate<slice::Iter<'a, C>>,
    emitted_two: bool,
}

impl<C: SieveCell> Iterator for Primes<'_, C> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if !self.emitted_two {
            self.emitted_two = true;
            return Some(2);
        }
        self.cells
            .find_map(|(i, cell)| cell.is_prime_cell().then_some(value_at_index(i)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending_two = usize::from(!self.emitted_two);
        let (_, upper) = self.cells.size_hint();
        (pending_two, upper.map(|u| u + pending_two))
    }
}

impl<C: SieveCell> FusedIterator for Primes<'_, C> {}
