use core::fmt::{self, Display, Formatter};

use field::{FieldElement, PrimeField};

use crate::affine::Affine;
use crate::errors::CurveError;
use crate::form::CurveForm;
use crate::group::{check_same_field, lift_pair, CurveModel};
use crate::projective::Projective;

/// Montgomery curve `b y^2 = x^3 + a x^2 + x`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Montgomery {
    a: FieldElement,
    b: FieldElement,
}

impl Montgomery {
    /// Rejects `b = 0` and `a^2 = 4`.
    pub fn new(a: FieldElement, b: FieldElement) -> Result<Self, CurveError> {
        check_same_field(&a, &b)?;
        if b.is_zero() {
            return Err(CurveError::InvalidCurve("Montgomery curve with b = 0"));
        }
        if a.square() == a.field().element(4u32) {
            return Err(CurveError::InvalidCurve("singular Montgomery curve, a^2 = 4"));
        }
        Ok(Montgomery { a, b })
    }

    #[inline]
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    #[inline]
    pub fn b(&self) -> &FieldElement {
        &self.b
    }
}

impl CurveModel for Montgomery {
    const FORM: CurveForm = CurveForm::Montgomery;

    #[inline]
    fn field(&self) -> &PrimeField {
        self.a.field()
    }

    #[inline]
    fn params(&self) -> (&FieldElement, &FieldElement) {
        (&self.a, &self.b)
    }

    fn identity(&self) -> Projective {
        Projective::infinity(self.field())
    }

    #[inline]
    fn is_identity(&self, point: &Projective) -> bool {
        point.is_infinity()
    }

    /// `b y^2 z = x^3 + a x^2 z + x z^2`
    fn contains(&self, point: &Projective) -> bool {
        let Projective { x, y, z } = point;
        if x.is_zero() && y.is_zero() && z.is_zero() {
            return false;
        }
        let lhs = &(&self.b * &y.square()) * z;
        let rhs = &(&x.pow(3) + &(&(&self.a * &x.square()) * z)) + &(x * &z.square());
        lhs == rhs
    }

    fn negate(&self, point: &Projective) -> Projective {
        Projective::new(point.x.clone(), -&point.y, point.z.clone())
    }

    fn add(&self, p: &Projective, q: &Projective) -> Result<Projective, CurveError> {
        let (p1, p2) = match (p.to_affine(), q.to_affine()) {
            (None, _) => return Ok(q.clone()),
            (_, None) => return Ok(p.clone()),
            (Some(p1), Some(p2)) => (p1, p2),
        };
        let field = self.field();

        let lambda = if p1 == p2 {
            // l = (3x^2 + 2ax + 1) / (2by)
            let numerator = &(&(&field.element(3u32) * &p1.x.square())
                + &(&self.a.double() * &p1.x))
                + &field.one();
            numerator.checked_div(&(&self.b.double() * &p1.y))
        } else {
            // l = (y2 - y1) / (x2 - x1)
            (&p2.y - &p1.y).checked_div(&(&p2.x - &p1.x))
        };
        let Ok(lambda) = lambda else {
            return Ok(self.identity());
        };

        // x3 = b l^2 - a - x1 - x2
        let b_lambda2 = &self.b * &lambda.square();
        let x3 = &(&(&b_lambda2 - &self.a) - &p1.x) - &p2.x;
        // y3 = (2x1 + x2 + a) l - b l^3 - y1
        let coeff = &(&p1.x.double() + &p2.x) + &self.a;
        let y3 = &(&(&coeff * &lambda) - &(&b_lambda2 * &lambda)) - &p1.y;

        Ok(Projective::from_affine(&Affine::new(x3, y3)))
    }

    fn lift(&self, x: &FieldElement) -> Vec<Affine> {
        // y^2 = (x^3 + a x^2 + x) / b
        let numerator = &(&x.pow(3) + &(&self.a * &x.square())) + x;
        match numerator.checked_div(&self.b) {
            Ok(rhs) => lift_pair(x, &rhs),
            Err(_) => Vec::new(),
        }
    }
}

impl Display for Montgomery {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Montgomery curve {}y^2=x^3+{}x^2+x over {}",
            self.b,
            self.a,
            self.field()
        )
    }
}
