// src/main.rs

use env_logger::Env;

use mathutil::integer_math::digits::Digits;
use mathutil::integer_math::divisors::Divisors;
use mathutil::integer_math::gcd::GCD;
use mathutil::integer_math::primality::Primality;
use mathutil::integer_math::sequences::Sequences;

fn main() {
    // Initialize the logger
    let env = Env::default()
        .filter_or("MATHUTIL_LOG_LEVEL", "info")
        .write_style_or("MATHUTIL_LOG_STYLE", "always");

    env_logger::Builder::from_env(env).init();

    println!("Is 7 prime? {}", Primality::is_prime(7));
    println!("GCD of 48 and 18: {}", GCD::gcd(48, 18));
    println!("LCM of 4 and 6: {}", GCD::lcm(4, 6));
    println!("Fibonacci of 5: {}", Sequences::fibonacci(5));
    match Sequences::factorial(5) {
        Ok(value) => println!("Factorial of 5: {}", value),
        Err(e) => eprintln!("{}", e),
    }
    println!("Is 28 a perfect number? {}", Divisors::is_perfect_number(28));
    println!("Sum of digits in 12345: {}", Digits::sum_of_digits(12345));
    println!("Reverse of 123: {}", Digits::reverse_number(123));
    println!("Is 153 an Armstrong number? {}", Digits::is_armstrong_number(153));
    println!("Next prime after 10: {}", Primality::next_prime(10));
}
