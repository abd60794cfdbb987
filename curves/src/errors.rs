//! Error types for curve arithmetic and model conversion.

use thiserror::Error;

use crate::form::CurveForm;

/// Errors produced by curve construction, the group law, the birational
/// maps and the curve search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// The coordinates do not satisfy the curve equation.
    #[error("point is not on the curve")]
    NotOnCurve,

    /// A square root was requested of a quadratic non-residue.
    #[error("element has no square root in the field")]
    NoSquareRoot,

    /// The curve has no model of the requested form over its field.
    ///
    /// This is an expected outcome for a large share of random curves: a
    /// Weierstrass curve only has a Montgomery or twisted Edwards model when
    /// it has a point of order two, and an Edwards model needs a further
    /// square.
    #[error("the curve does not support the {to} form (from {from})")]
    UnsupportedForm { from: CurveForm, to: CurveForm },

    /// The parameters describe a singular or otherwise degenerate curve.
    #[error("invalid curve parameters: {0}")]
    InvalidCurve(&'static str),

    /// A denominator of the Edwards addition law vanished.
    ///
    /// This cannot happen on complete curves (`d` a non-square) but can on
    /// the others.
    #[error("degenerate operation: zero denominator in the addition law")]
    DegenerateOperation,

    /// The point is one of the finitely many exceptional points of the
    /// birational map; its image lies at infinity of the affine target model.
    #[error("point is exceptional for the map from {from} to {to}")]
    ExceptionalPoint { from: CurveForm, to: CurveForm },

    /// Points of different curves, or coordinates from another field, were
    /// combined.
    #[error("points belong to different curves")]
    CurveMismatch,

    /// The curve search gave up after the configured number of attempts.
    #[error("no suitable curve found after {0} attempts")]
    SearchExhausted(u64),
}
