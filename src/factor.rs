//! Trial-division factorization of a `u64`.
//!
//! Works without a sieve table: strips factors of 2, then tries odd divisors
//! up to the square root of what remains.

/// Prime factors of `x` in ascending order, repeated by multiplicity.
/// `0` and `1` have no prime factors.
pub fn prime_factors(mut x: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    if x < 2 {
        return factors;
    }
    while x.is_multiple_of(2) {
        x /= 2;
        factors.push(2);
    }
    let mut d = 3u64;
    while d <= x / d {
        while x.is_multiple_of(d) {
            x /= d;
            factors.push(d);
        }
        d += 2;
    }
    if x > 1 {
        factors.push(x);
    }
    factors
}

/// Factorization of `x` as `(prime, exponent)` pairs.
pub fn factor_pairs(x: u64) -> Vec<(u64, u32)> {
    let mut pairs: Vec<(u64, u32)> = Vec::new();
    for p in prime_factors(x) {
        match pairs.last_mut() {
            Some((q, exp)) if *q == p => *exp += 1,
            _ => pairs.push((p, 1)),
        }
    }
    pairs
}
