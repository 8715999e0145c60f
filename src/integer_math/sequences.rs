// src/integer_math/sequences.rs

use num::{BigUint, One, Zero};

use crate::error::MathError;

pub struct Sequences;

impl Sequences {
    /// nth Fibonacci number, two-accumulator iteration. 0 for n <= 0.
    pub fn fibonacci(n: i64) -> i64 {
        if n <= 0 {
            return 0;
        }
        let (mut a, mut b) = (0i64, 1i64);
        for _ in 1..n {
            let next = a + b;
            a = b;
            b = next;
        }
        b
    }

    /// n! as a u64. Exact through n = 20; larger arguments belong to
    /// [`Self::factorial_big`].
    pub fn factorial(n: i64) -> Result<u64, MathError> {
        if n < 0 {
            return Err(MathError::NegativeFactorial { n });
        }
        let mut result = 1u64;
        for i in 2..=n as u64 {
            result *= i;
        }
        Ok(result)
    }

    /// Arbitrary-precision Fibonacci for arguments past the i64 range.
    pub fn fibonacci_big(n: u64) -> BigUint {
        if n == 0 {
            return BigUint::zero();
        }
        let (mut a, mut b) = (BigUint::zero(), BigUint::one());
        for _ in 1..n {
            let next = &a + &b;
            a = b;
            b = next;
        }
        b
    }

    /// Arbitrary-precision n!.
    pub fn factorial_big(n: i64) -> Result<BigUint, MathError> {
        if n < 0 {
            return Err(MathError::NegativeFactorial { n });
        }
        let mut result = BigUint::one();
        for i in 2..=n as u64 {
            result *= i;
        }
        Ok(result)
    }
}
