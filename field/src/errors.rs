//! Error types for field arithmetic.

use num_bigint::BigUint;
use thiserror::Error;

/// Errors raised by field construction and division.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The modulus is not a prime greater than 3.
    #[error("modulus {0} is not a prime greater than 3")]
    InvalidModulus(BigUint),
    /// An inverse of the zero element was requested.
    #[error("attempted to invert zero")]
    DivisionByZero,
}
