// src/integer_math/divisors.rs

pub struct Divisors;

impl Divisors {
    /// Sum of the proper divisors of `n`, 0 for n <= 1. No proper divisor
    /// lies strictly between n/2 and n, so the scan stops at n/2.
    pub fn aliquot_sum(n: i64) -> i64 {
        if n <= 1 {
            return 0;
        }
        let mut sum = 0;
        for i in 1..=n / 2 {
            if n % i == 0 {
                sum += i;
            }
        }
        sum
    }

    pub fn is_perfect_number(n: i64) -> bool {
        n > 0 && Self::aliquot_sum(n) == n
    }
}
