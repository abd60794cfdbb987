use core::fmt::{self, Display, Formatter};

use field::{FieldElement, PrimeField};

use crate::affine::Affine;
use crate::errors::CurveError;
use crate::form::CurveForm;
use crate::group::{check_same_field, lift_edwards, CurveModel};
use crate::projective::Projective;

/// Edwards curve `x^2 + y^2 = c^2 (1 + d x^2 y^2)`. The identity is
/// `(0, c)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edwards {
    c: FieldElement,
    d: FieldElement,
}

impl Edwards {
    /// Rejects `c = 0`, `d = 0` and `c^4 d = 1`.
    pub fn new(c: FieldElement, d: FieldElement) -> Result<Self, CurveError> {
        check_same_field(&c, &d)?;
        if c.is_zero() || d.is_zero() {
            return Err(CurveError::InvalidCurve("Edwards curve with c = 0 or d = 0"));
        }
        if (&c.pow(4) * &d).is_one() {
            return Err(CurveError::InvalidCurve("singular Edwards curve, c^4 d = 1"));
        }
        Ok(Edwards { c, d })
    }

    #[inline]
    pub fn c(&self) -> &FieldElement {
        &self.c
    }

    #[inline]
    pub fn d(&self) -> &FieldElement {
        &self.d
    }
}

impl CurveModel for Edwards {
    const FORM: CurveForm = CurveForm::Edwards;

    #[inline]
    fn field(&self) -> &PrimeField {
        self.c.field()
    }

    #[inline]
    fn params(&self) -> (&FieldElement, &FieldElement) {
        (&self.c, &self.d)
    }

    /// `(0, c)`
    fn identity(&self) -> Projective {
        let field = self.field();
        Projective::new(field.zero(), self.c.clone(), field.one())
    }

    fn is_identity(&self, point: &Projective) -> bool {
        point
            .to_affine()
            .is_some_and(|p| p.x.is_zero() && p.y == self.c)
    }

    /// `x^2 + y^2 = c^2 (1 + d x^2 y^2)`
    fn contains(&self, point: &Projective) -> bool {
        let Some(Affine { x, y }) = point.to_affine() else {
            return false;
        };
        let x2 = x.square();
        let y2 = y.square();
        let lhs = &x2 + &y2;
        let rhs = &self.c.square() * &(&self.field().one() + &(&(&self.d * &x2) * &y2));
        lhs == rhs
    }

    /// `-(x, y) = (-x, y)`, which fixes the identity `(0, c)`.
    fn negate(&self, point: &Projective) -> Projective {
        Projective::new(-&point.x, point.y.clone(), point.z.clone())
    }

    fn add(&self, p: &Projective, q: &Projective) -> Result<Projective, CurveError> {
        let p1 = p.to_affine().ok_or(CurveError::DegenerateOperation)?;
        let p2 = q.to_affine().ok_or(CurveError::DegenerateOperation)?;
        let one = self.field().one();

        let t = &(&(&self.d * &p1.x) * &p2.x) * &(&p1.y * &p2.y);
        // x3 = (x1 y2 + y1 x2) / (c (1 + t))
        let x_num = &(&p1.x * &p2.y) + &(&p1.y * &p2.x);
        let x3 = x_num
            .checked_div(&(&self.c * &(&one + &t)))
            .map_err(|_| CurveError::DegenerateOperation)?;
        // y3 = (y1 y2 - x1 x2) / (c (1 - t))
        let y_num = &(&p1.y * &p2.y) - &(&p1.x * &p2.x);
        let y3 = y_num
            .checked_div(&(&self.c * &(&one - &t)))
            .map_err(|_| CurveError::DegenerateOperation)?;

        Ok(Projective::from_affine(&Affine::new(x3, y3)))
    }

    fn lift(&self, y: &FieldElement) -> Vec<Affine> {
        // (1 - c^2 d y^2) x^2 + (y^2 - c^2) = 0
        let y2 = y.square();
        let c2 = self.c.square();
        let quadratic = &self.field().one() - &(&(&c2 * &self.d) * &y2);
        let constant = &y2 - &c2;
        lift_edwards(y, quadratic, constant)
    }
}

impl Display for Edwards {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Edwards curve x^2+y^2={}^2(1+{}x^2y^2) over {}",
            self.c,
            self.d,
            self.field()
        )
    }
}
