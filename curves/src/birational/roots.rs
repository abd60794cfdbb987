use field::{FieldElement, Polynomial};
use log::{debug, trace};

use crate::errors::CurveError;
use crate::sqrt::canonical_sqrt;
use crate::weierstrass::ShortWeierstrass;

use super::Edge;

/// A root `alpha` of `z^3 + a z + b` together with
/// `s = 1 / sqrt(3 alpha^2 + a)`.
///
/// `(alpha, 0)` is a point of order two; shifting it to the origin and
/// scaling by `s` puts the curve in Montgomery form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlphaS {
    pub alpha: FieldElement,
    pub s: FieldElement,
}

/// Every usable `(alpha, s)`, ordered by `alpha`.
pub fn alpha_s_candidates(curve: &ShortWeierstrass) -> Vec<AlphaS> {
    let field = curve.a().field();
    let cubic = Polynomial::new(
        field,
        vec![curve.b().clone(), curve.a().clone(), field.zero(), field.one()],
    );

    let three = field.element(3u32);
    let mut candidates = Vec::new();
    for alpha in cubic.roots() {
        let slope = &(&three * &alpha.square()) + curve.a();
        if slope.is_zero() {
            trace!("alpha={alpha}: 3alpha^2 + a vanishes");
            continue;
        }
        let Ok(root) = canonical_sqrt(&slope) else {
            trace!("alpha={alpha}: 3alpha^2 + a={slope} is not a square");
            continue;
        };
        let Ok(s) = root.inverse() else {
            continue;
        };
        trace!("alpha={alpha}: s={s}");
        candidates.push(AlphaS { alpha, s });
    }
    candidates
}

/// The first candidate, or `UnsupportedForm` for `edge` when there is none.
pub fn find_alpha_s(curve: &ShortWeierstrass, edge: Edge) -> Result<AlphaS, CurveError> {
    let chosen = alpha_s_candidates(curve)
        .into_iter()
        .next()
        .ok_or(edge.unsupported())?;
    debug!("{edge}: alpha={} s={}", chosen.alpha, chosen.s);
    Ok(chosen)
}

/// `t = sqrt(s / (3 s alpha + 2))`, the extra square the Edwards model
/// needs.
pub(crate) fn edwards_scale(candidate: &AlphaS) -> Result<FieldElement, CurveError> {
    let field = candidate.s.field();
    let denominator = &(&(&field.element(3u32) * &candidate.s) * &candidate.alpha)
        + &field.element(2u32);
    let ratio = candidate
        .s
        .checked_div(&denominator)
        .map_err(|_| CurveError::NoSquareRoot)?;
    canonical_sqrt(&ratio)
}
