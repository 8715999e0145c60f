// tests/digits_tests.rs

use mathutil::integer_math::digits::Digits;

#[cfg(test)]
mod digits_tests {
    use super::*;

    #[test]
    fn test_sum_of_digits() {
        assert_eq!(Digits::sum_of_digits(1234), 10);
        assert_eq!(Digits::sum_of_digits(-1234), 10, "sign is ignored");
        assert_eq!(Digits::sum_of_digits(0), 0);
        assert_eq!(Digits::sum_of_digits(999), 27);
    }

    #[test]
    fn test_reverse_number() {
        assert_eq!(Digits::reverse_number(1234), 4321);
        assert_eq!(Digits::reverse_number(100), 1);
        assert_eq!(Digits::reverse_number(-123), 321, "sign is ignored");
        assert_eq!(Digits::reverse_number(0), 0);
        assert_eq!(Digits::reverse_number(7), 7);
    }

    #[test]
    fn test_reverse_is_involutive_without_trailing_zeros() {
        // Test: reverse(reverse(n)) == n whenever n does not end in 0
        for n in (1..5000i64).filter(|n| n % 10 != 0) {
            assert_eq!(
                Digits::reverse_number(Digits::reverse_number(n)),
                n,
                "double reversal should restore {}",
                n
            );
        }
    }

    #[test]
    fn test_armstrong_numbers() {
        // 153 = 1^3 + 5^3 + 3^3; 9474 = 9^4 + 4^4 + 7^4 + 4^4
        for n in [0, 1, 5, 9, 153, 370, 371, 407, 9474] {
            assert!(Digits::is_armstrong_number(n), "{} is an Armstrong number", n);
        }
        for n in [10, 123, 9475] {
            assert!(!Digits::is_armstrong_number(n), "{} is not an Armstrong number", n);
        }
        assert!(!Digits::is_armstrong_number(-153), "undefined for negatives");
    }
}
