// src/integer_math/digits.rs

pub struct Digits;

impl Digits {
    /// Sum of the base-10 digits of |n|.
    pub fn sum_of_digits(n: i64) -> i64 {
        let mut n = n.abs();
        let mut sum = 0;
        while n > 0 {
            sum += n % 10;
            n /= 10;
        }
        sum
    }

    /// Base-10 digit reversal of |n|. Trailing zeros in the input drop out
    /// of the result naturally.
    pub fn reverse_number(n: i64) -> i64 {
        let mut n = n.abs();
        let mut reversed = 0;
        while n > 0 {
            reversed = reversed * 10 + n % 10;
            n /= 10;
        }
        reversed
    }

    /// Base-10 digit count of |n|; zero counts as one digit.
    pub fn count_digits(n: i64) -> u32 {
        let mut n = n.abs();
        let mut count = 1;
        while n >= 10 {
            n /= 10;
            count += 1;
        }
        count
    }

    /// True iff the sum of each digit raised to the digit count equals `n`.
    /// Defined for non-negative `n` only; negative inputs return false.
    pub fn is_armstrong_number(n: i64) -> bool {
        if n < 0 {
            return false;
        }
        let digits = Self::count_digits(n);
        let mut sum = 0i64;
        let mut temp = n;
        while temp > 0 {
            let digit = temp % 10;
            sum += digit.pow(digits);
            temp /= 10;
        }
        sum == n
    }
}
