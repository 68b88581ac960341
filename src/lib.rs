//! # primetable — Odd-Only Sieve of Eratosthenes
//!
//! Builds a prime table once over a bounded range and answers repeated
//! queries against it without recomputation:
//!
//! - [`sieve::sift`] fills caller-owned storage and returns its coverage bound.
//! - [`query`] tests primality, finds the n-th prime, finds the next prime and
//!   enumerates all primes of a built table.
//! - [`sieve::PrimeTable`] owns the storage for callers who just want a table.
//!
//! Only odd values from 3 upward are stored ([`index`]), 2 is a constant.
//! Queries never extend a table: values beyond its coverage are an error.
//!
//! ```
//! use primetable::PrimeTable;
//!
//! let table = PrimeTable::with_len(50);
//! assert_eq!(table.max_covered(), 101);
//! assert_eq!(table.nth_prime(13), Some(41));
//! assert_eq!(table.next_prime(97), Ok(Some(101)));
//! assert!(table.is_prime(59).unwrap());
//! assert!(table.is_prime(103).is_err());
//! ```

pub mod config;
pub mod error;
pub mod factor;
pub mod index;
pub mod query;
pub mod sieve;

pub use error::SieveError;
pub use query::{
    enumerate_primes, find_next_prime, find_nth_prime, is_prime, prime_count, Primes,
};
pub use sieve::{sift, PrimeTable, SieveCell};
