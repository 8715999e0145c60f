// src/integer_math/primality.rs

use log::debug;
use num::integer::Roots;

pub struct Primality;

impl Primality {
    /// Trial division up to the integer square root of `n`.
    /// Everything at or below 1 is composite by convention.
    pub fn is_prime(n: i64) -> bool {
        if n <= 1 {
            return false;
        }
        let limit = n.sqrt();
        for i in 2..=limit {
            if n % i == 0 {
                return false;
            }
        }
        true
    }

    /// Smallest prime strictly greater than `n`. Terminates for every input
    /// since the primes are unbounded.
    pub fn next_prime(n: i64) -> i64 {
        let mut candidate = n + 1;
        while !Self::is_prime(candidate) {
            candidate += 1;
        }
        debug!("next prime after {} is {}", n, candidate);
        candidate
    }
}
