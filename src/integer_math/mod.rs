// src/integer_math/mod.rs

pub mod digits;
pub mod divisors;
pub mod gcd;
pub mod primality;
pub mod sequences;
