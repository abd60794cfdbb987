use core::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// The four algebraic models a curve can be written in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveForm {
    /// `y^2 = x^3 + a x + b`
    ShortWeierstrass,
    /// `b y^2 = x^3 + a x^2 + x`
    Montgomery,
    /// `a x^2 + y^2 = 1 + d x^2 y^2`
    TwistedEdwards,
    /// `x^2 + y^2 = c^2 (1 + d x^2 y^2)`
    Edwards,
}

impl CurveForm {
    pub const ALL: [CurveForm; 4] = [
        CurveForm::ShortWeierstrass,
        CurveForm::Montgomery,
        CurveForm::TwistedEdwards,
        CurveForm::Edwards,
    ];

    /// Whether the identity is the projective point `(0:1:0)` rather than an
    /// affine point.
    pub fn has_point_at_infinity(&self) -> bool {
        matches!(self, CurveForm::ShortWeierstrass | CurveForm::Montgomery)
    }
}

impl Display for CurveForm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            CurveForm::ShortWeierstrass => "Weierstrass",
            CurveForm::Montgomery => "Montgomery",
            CurveForm::TwistedEdwards => "Twisted Edwards",
            CurveForm::Edwards => "Edwards",
        };
        f.write_str(name)
    }
}
