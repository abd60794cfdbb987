//! Elliptic curves over prime fields in four models.
//!
//! A [`Curve`] is a short Weierstrass, Montgomery, twisted Edwards or Edwards
//! curve. Each model carries its own group law (see [`CurveModel`]) and
//! [`Point`] ties projective coordinates to the curve they lie on. The
//! [`birational`] module converts curves and points between any two models,
//! and [`find_curve`] searches for random curves with a prescribed order.

mod affine;
pub mod birational;
mod curve;
mod edwards;
mod errors;
mod form;
mod group;
mod montgomery;
mod point;
mod points;
mod projective;
mod search;
mod sqrt;
mod twisted_edwards;
mod weierstrass;

#[cfg(test)]
mod tests;

pub use affine::Affine;
pub use birational::{BirationalMap, Edge};
pub use curve::Curve;
pub use edwards::Edwards;
pub use errors::CurveError;
pub use field::{BigInt, BigUint, FieldElement, PrimeField};
pub use form::CurveForm;
pub use group::CurveModel;
pub use montgomery::Montgomery;
pub use point::Point;
pub use points::Points;
pub use projective::Projective;
pub use search::{find_curve, random_short_weierstrass, SearchConfig};
pub use sqrt::canonical_sqrt;
pub use twisted_edwards::TwistedEdwards;
pub use weierstrass::ShortWeierstrass;
