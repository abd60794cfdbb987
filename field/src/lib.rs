//! Prime fields with a runtime modulus.
//!
//! This crate provides the field arithmetic the curve models are written
//! against: elements of `F_p` for any prime `p > 3`, Legendre symbols and
//! square roots, a canonical ordering of elements by integer representative,
//! exhaustive element enumeration, random sampling and root finding for
//! univariate polynomials.

#[macro_use]
mod macros;

mod element;
mod errors;
mod poly;
mod primality;
mod prime;
mod random;

pub use element::FieldElement;
pub use errors::FieldError;
pub use num_bigint::{BigInt, BigUint};
pub use poly::Polynomial;
pub use primality::is_probable_prime;
pub use prime::{Elements, PrimeField};
