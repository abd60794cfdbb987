use field::FieldElement;

use crate::errors::CurveError;

/// The canonical square root of `x`: of the two roots `r` and `p - r`, the
/// one with the smaller integer representative.
///
/// Every map that introduces a square root goes through this function, so
/// converting the same curve twice always yields the same parameters.
pub fn canonical_sqrt(x: &FieldElement) -> Result<FieldElement, CurveError> {
    let root = x.sqrt().ok_or(CurveError::NoSquareRoot)?;
    let other = -&root;
    if other.value() < root.value() {
        Ok(other)
    } else {
        Ok(root)
    }
}
