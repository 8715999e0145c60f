// src/lib.rs

pub mod error;
pub mod integer_math;

pub use error::MathError;
