use core::fmt::{self, Display, Formatter};

use field::{FieldElement, PrimeField};

use crate::affine::Affine;
use crate::errors::CurveError;
use crate::form::CurveForm;
use crate::group::{check_same_field, lift_edwards, CurveModel};
use crate::projective::Projective;

/// Twisted Edwards curve `a x^2 + y^2 = 1 + d x^2 y^2`.
///
/// The addition law is unified (doubling uses the same formula) and
/// complete when `a` is a square and `d` is not.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TwistedEdwards {
    a: FieldElement,
    d: FieldElement,
}

impl TwistedEdwards {
    /// Rejects `a = 0`, `d = 0` and `a = d`.
    pub fn new(a: FieldElement, d: FieldElement) -> Result<Self, CurveError> {
        check_same_field(&a, &d)?;
        if a.is_zero() || d.is_zero() {
            return Err(CurveError::InvalidCurve("twisted Edwards curve with a = 0 or d = 0"));
        }
        if a == d {
            return Err(CurveError::InvalidCurve("singular twisted Edwards curve, a = d"));
        }
        Ok(TwistedEdwards { a, d })
    }

    #[inline]
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    #[inline]
    pub fn d(&self) -> &FieldElement {
        &self.d
    }
}

impl CurveModel for TwistedEdwards {
    const FORM: CurveForm = CurveForm::TwistedEdwards;

    #[inline]
    fn field(&self) -> &PrimeField {
        self.a.field()
    }

    #[inline]
    fn params(&self) -> (&FieldElement, &FieldElement) {
        (&self.a, &self.d)
    }

    /// `(0, 1)`
    fn identity(&self) -> Projective {
        let field = self.field();
        Projective::new(field.zero(), field.one(), field.one())
    }

    fn is_identity(&self, point: &Projective) -> bool {
        point
            .to_affine()
            .is_some_and(|p| p.x.is_zero() && p.y.is_one())
    }

    /// `a x^2 + y^2 = 1 + d x^2 y^2`
    fn contains(&self, point: &Projective) -> bool {
        let Some(Affine { x, y }) = point.to_affine() else {
            return false;
        };
        let x2 = x.square();
        let y2 = y.square();
        let lhs = &(&self.a * &x2) + &y2;
        let rhs = &self.field().one() + &(&(&self.d * &x2) * &y2);
        lhs == rhs
    }

    fn negate(&self, point: &Projective) -> Projective {
        Projective::new(-&point.x, point.y.clone(), point.z.clone())
    }

    fn add(&self, p: &Projective, q: &Projective) -> Result<Projective, CurveError> {
        let p1 = p.to_affine().ok_or(CurveError::DegenerateOperation)?;
        let p2 = q.to_affine().ok_or(CurveError::DegenerateOperation)?;
        let one = self.field().one();

        let t = &(&(&self.d * &p1.x) * &p2.x) * &(&p1.y * &p2.y);
        // x3 = (x1 y2 + y1 x2) / (1 + t)
        let x_num = &(&p1.x * &p2.y) + &(&p1.y * &p2.x);
        let x3 = x_num
            .checked_div(&(&one + &t))
            .map_err(|_| CurveError::DegenerateOperation)?;
        // y3 = (y1 y2 - a x1 x2) / (1 - t)
        let y_num = &(&p1.y * &p2.y) - &(&(&self.a * &p1.x) * &p2.x);
        let y3 = y_num
            .checked_div(&(&one - &t))
            .map_err(|_| CurveError::DegenerateOperation)?;

        Ok(Projective::from_affine(&Affine::new(x3, y3)))
    }

    fn lift(&self, y: &FieldElement) -> Vec<Affine> {
        // (a - d y^2) x^2 + (y^2 - 1) = 0
        let y2 = y.square();
        let quadratic = &self.a - &(&self.d * &y2);
        let constant = &y2 - &self.field().one();
        lift_edwards(y, quadratic, constant)
    }
}

impl Display for TwistedEdwards {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Twisted Edwards curve {}x^2+y^2=1+{}x^2y^2 over {}",
            self.a,
            self.d,
            self.field()
        )
    }
}
