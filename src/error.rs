// src/error.rs

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("factorial is undefined for negative input: {n}")]
    NegativeFactorial { n: i64 },
}
