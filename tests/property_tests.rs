//! Property-based tests for primetable's sieve and queries.
//!
//! These tests use the `proptest` framework to check invariants across
//! randomly generated table lengths and query values. Every answer the sieve
//! gives is cross-checked against plain trial division.
//!
//! # How to run
//!
//! ```bash
//! # Run all property tests:
//! cargo test --test property_tests
//!
//! # Increase case count for thorough testing (default is 256):
//! PROPTEST_CASES=10000 cargo test --test property_tests
//! ```
//!
//! # Testing strategy
//!
//! - **Index mapping**: both directions of the odd-value bijection round-trip.
//! - **Builder**: coverage bound, agreement with trial division, and the
//!   incremental square-index update.
//! - **Queries**: n-th and next prime agree with enumeration; out-of-range
//!   values fail; repeated queries leave the table untouched.
//! - **Factorization**: factors are prime and multiply back to the input.

use primetable::index::{index_of_value, max_covered, value_at_index};
use primetable::sieve::{sift, Candidate};
use primetable::{
    enumerate_primes, factor, find_next_prime, find_nth_prime, is_prime, PrimeTable, SieveError,
};
use proptest::prelude::*;

fn trial_division(x: u64) -> bool {
    if x < 2 {
        return false;
    }
    let mut d = 2u64;
    while d * d <= x {
        if x % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

fn built(len: usize) -> Vec<u8> {
    let mut cells = vec![0u8; len];
    sift(&mut cells);
    cells
}

// == Index Mapping =============================================================

proptest! {
    /// index_of_value(value_at_index(i)) == i for every position.
    #[test]
    fn prop_index_roundtrip(i in 0usize..100_000_000) {
        prop_assert_eq!(index_of_value(value_at_index(i)), i);
    }

    /// value_at_index(index_of_value(v)) == v for every odd v >= 3.
    #[test]
    fn prop_value_roundtrip(half in 1u64..100_000_000) {
        let v = 2 * half + 1;
        prop_assert_eq!(value_at_index(index_of_value(v)), v);
    }
}

// == Sieve Builder =============================================================

proptest! {
    /// sift returns value_at_index(n - 1), or 2 for empty storage.
    #[test]
    fn prop_sift_returns_coverage_bound(len in 0usize..5_000) {
        let mut cells = vec![false; len];
        let max = sift(&mut cells);
        let expected = if len > 0 { value_at_index(len - 1) } else { 2 };
        prop_assert_eq!(max, expected);
        prop_assert_eq!(max, max_covered(len));
    }

    /// Every covered value is classified the same way trial division does.
    #[test]
    fn prop_is_prime_matches_trial_division(
        len in 1usize..3_000,
        seed in any::<u64>(),
    ) {
        let cells = built(len);
        let x = seed % (max_covered(len) + 1);
        prop_assert_eq!(is_prime(x, &cells), Ok(trial_division(x)), "x = {}", x);
    }

    /// After advancing past candidate p, the square index lands on (p+2)^2.
    #[test]
    fn prop_candidate_square_index(steps in 0usize..20_000) {
        let mut candidate = Candidate::first();
        for _ in 0..steps {
            candidate.advance();
        }
        let p = value_at_index(candidate.index);
        prop_assert_eq!(candidate.factor as u64, p);
        prop_assert_eq!(candidate.index_square, index_of_value(p * p));

        candidate.advance();
        prop_assert_eq!(candidate.index_square, index_of_value((p + 2) * (p + 2)));
    }
}

// == Sieve Queries =============================================================

proptest! {
    /// Values above the coverage bound are rejected, never guessed.
    #[test]
    fn prop_is_prime_rejects_above_bound(len in 1usize..2_000, excess in 1u64..1_000) {
        let cells = built(len);
        let max = max_covered(len);
        prop_assert_eq!(
            is_prime(max + excess, &cells),
            Err(SieveError::OutOfRange { value: max + excess, max_covered: max })
        );
    }

    /// find_nth_prime(k) is the k-th element of the enumeration, and one past
    /// the end is None.
    #[test]
    fn prop_nth_prime_matches_enumeration(len in 0usize..2_000, pick in any::<prop::sample::Index>()) {
        let cells = built(len);
        let primes: Vec<u64> = enumerate_primes(&cells).collect();
        let k = pick.index(primes.len());
        prop_assert_eq!(find_nth_prime(k + 1, &cells), Some(primes[k]));
        prop_assert_eq!(find_nth_prime(primes.len() + 1, &cells), None);
    }

    /// find_next_prime(p) is the successor of p in the enumeration.
    #[test]
    fn prop_next_prime_is_successor(len in 1usize..2_000, pick in any::<prop::sample::Index>()) {
        let cells = built(len);
        let primes: Vec<u64> = enumerate_primes(&cells).collect();
        let k = pick.index(primes.len());
        let expected = primes.get(k + 1).copied();
        prop_assert_eq!(find_next_prime(primes[k], &cells), Ok(expected));
    }

    /// find_next_prime rejects covered composites.
    #[test]
    fn prop_next_prime_rejects_composites(len in 1usize..2_000, seed in any::<u64>()) {
        let cells = built(len);
        let x = seed % (max_covered(len) + 1);
        prop_assume!(!trial_division(x));
        prop_assert_eq!(find_next_prime(x, &cells), Err(SieveError::NotPrime { value: x }));
    }

    /// Querying never mutates the table and always answers the same way.
    #[test]
    fn prop_queries_idempotent(len in 1usize..1_000, seed in any::<u64>()) {
        let table = PrimeTable::with_len(len);
        let snapshot = table.clone();
        let x = seed % (table.max_covered() + 1);
        let n = (seed % 200) as usize;

        let first = (table.is_prime(x), table.nth_prime(n), table.prime_count());
        for _ in 0..3 {
            prop_assert_eq!((table.is_prime(x), table.nth_prime(n), table.prime_count()), first);
        }
        prop_assert_eq!(&table, &snapshot);
    }

    /// PrimeTable::covering(bound) always covers bound.
    #[test]
    fn prop_covering_includes_bound(bound in 0u64..100_000) {
        let table = PrimeTable::covering(bound);
        prop_assert!(table.max_covered() >= bound);
        if bound >= 3 {
            prop_assert!(table.is_prime(bound).is_ok());
        }
    }
}

// == Factorization =============================================================

proptest! {
    /// Factors are prime, ascending, and multiply back to the input.
    #[test]
    fn prop_prime_factors_multiply_back(x in 2u64..1_000_000_000) {
        let factors = factor::prime_factors(x);
        prop_assert_eq!(factors.iter().product::<u64>(), x);
        prop_assert!(factors.windows(2).all(|w| w[0] <= w[1]));
        for &p in &factors {
            prop_assert!(trial_division(p), "{} is not prime", p);
        }
    }
}
