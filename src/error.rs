/// Errors from sieve queries.
///
/// A failed query never touches the table; the same storage can be queried
/// again straight away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SieveError {
    /// The storage has zero cells.
    EmptySieve,
    /// The value lies above the largest value the sieve represents.
    OutOfRange { value: u64, max_covered: u64 },
    /// `find_next_prime` was given a value the table does not mark prime.
    NotPrime { value: u64 },
}

impl std::fmt::Display for SieveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SieveError::EmptySieve => write!(f, "sieve is empty"),
            SieveError::OutOfRange { value, max_covered } => write!(
                f,
                "number {} not covered by range of sieve (max {})",
                value, max_covered
            ),
            SieveError::NotPrime { value } => write!(f, "{} is not a prime", value),
        }
    }
}

impl std::error::Error for SieveError {}
