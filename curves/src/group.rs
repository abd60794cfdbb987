use field::{BigUint, FieldElement, PrimeField};

use crate::affine::Affine;
use crate::errors::CurveError;
use crate::form::CurveForm;
use crate::projective::Projective;

/// The group law of one curve model.
///
/// Points are passed as raw projective triples; the implementations never
/// check membership, that is [`crate::Point`]'s job.
pub trait CurveModel {
    const FORM: CurveForm;

    fn field(&self) -> &PrimeField;

    /// The two defining parameters, in the order the model is written.
    fn params(&self) -> (&FieldElement, &FieldElement);

    fn identity(&self) -> Projective;
    fn is_identity(&self, point: &Projective) -> bool;
    fn contains(&self, point: &Projective) -> bool;
    fn negate(&self, point: &Projective) -> Projective;
    fn add(&self, p: &Projective, q: &Projective) -> Result<Projective, CurveError>;

    #[inline]
    fn double(&self, point: &Projective) -> Result<Projective, CurveError> {
        self.add(point, point)
    }

    /// The affine points whose free coordinate equals `t`: `x` for the
    /// Weierstrass and Montgomery models, `y` for the Edwards families.
    fn lift(&self, t: &FieldElement) -> Vec<Affine>;

    /// `scalar * point` by double-and-add, least significant bit first.
    fn scalar_mul(&self, point: &Projective, scalar: &BigUint) -> Result<Projective, CurveError> {
        let mut result = self.identity();
        let mut temp = point.clone();
        let bits = scalar.bits();

        for i in 0..bits {
            if scalar.bit(i) {
                result = self.add(&result, &temp)?;
            }
            // the last doubling is never used
            if i + 1 < bits {
                temp = self.double(&temp)?;
            }
        }

        Ok(result)
    }

    fn mul_u64(&self, point: &Projective, n: u64) -> Result<Projective, CurveError> {
        self.scalar_mul(point, &BigUint::from(n))
    }
}

/// Both parameters must come from the same field.
pub(crate) fn check_same_field(p1: &FieldElement, p2: &FieldElement) -> Result<(), CurveError> {
    if p1.field() != p2.field() {
        return Err(CurveError::InvalidCurve("parameters belong to different fields"));
    }
    Ok(())
}

/// The points `(t, r)` and `(t, -r)` for `r` the canonical root of `rhs`,
/// a single point when `r = 0` and none when `rhs` is not a square.
pub(crate) fn lift_pair(t: &FieldElement, rhs: &FieldElement) -> Vec<Affine> {
    match crate::sqrt::canonical_sqrt(rhs) {
        Ok(r) if r.is_zero() => vec![Affine::new(t.clone(), r)],
        Ok(r) => {
            let neg = -&r;
            vec![Affine::new(t.clone(), r), Affine::new(t.clone(), neg)]
        }
        Err(_) => Vec::new(),
    }
}

/// Solve `quadratic * x^2 + constant = 0` for the Edwards families and
/// return `(r, y)` and `(-r, y)` for the smallest root `r`.
pub(crate) fn lift_edwards(
    y: &FieldElement,
    quadratic: FieldElement,
    constant: FieldElement,
) -> Vec<Affine> {
    let field = y.field();
    let poly = field::Polynomial::new(field, vec![constant, field.zero(), quadratic]);
    let Some(r) = poly.roots().into_iter().next() else {
        return Vec::new();
    };
    if r.is_zero() {
        vec![Affine::new(r, y.clone())]
    } else {
        let neg = -&r;
        vec![Affine::new(r, y.clone()), Affine::new(neg, y.clone())]
    }
}
