// src/integer_math/gcd.rs

pub struct GCD;

impl GCD {
    /// Euclidean algorithm. Non-negative result for any sign of inputs.
    pub fn gcd(a: i64, b: i64) -> i64 {
        let (mut a, mut b) = (a, b);
        while b != 0 {
            let temp = b;
            b = a % b;
            a = temp;
        }
        a.abs()
    }

    /// |a * b| / gcd(a, b), dividing before multiplying to keep the
    /// intermediate in range. `lcm(0, 0)` is a precondition violation.
    pub fn lcm(a: i64, b: i64) -> i64 {
        debug_assert!(a != 0 || b != 0, "lcm(0, 0) is undefined");
        (a / Self::gcd(a, b) * b).abs()
    }

    pub fn find_gcd(numbers: &[i64]) -> i64 {
        numbers.iter().fold(0, |acc, &x| Self::gcd(acc, x))
    }

    pub fn find_lcm(numbers: &[i64]) -> i64 {
        numbers.iter().fold(1, |acc, &x| Self::lcm(acc, x))
    }

    pub fn are_coprime(numbers: &[i64]) -> bool {
        Self::find_gcd(numbers) == 1
    }
}
