use core::fmt::{self, Display, Formatter};

use field::{BigInt, BigUint, FieldElement, PrimeField};

use crate::affine::Affine;
use crate::errors::CurveError;
use crate::form::CurveForm;
use crate::group::{check_same_field, lift_pair, CurveModel};
use crate::projective::Projective;

/// Short Weierstrass curve `y^2 = x^3 + a x + b`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShortWeierstrass {
    a: FieldElement,
    b: FieldElement,
}

impl ShortWeierstrass {
    /// Rejects singular curves, `4a^3 + 27b^2 = 0`.
    pub fn new(a: FieldElement, b: FieldElement) -> Result<Self, CurveError> {
        check_same_field(&a, &b)?;
        let field = a.field();
        let discriminant =
            &(&field.element(4u32) * &a.pow(3)) + &(&field.element(27u32) * &b.square());
        if discriminant.is_zero() {
            return Err(CurveError::InvalidCurve("singular Weierstrass curve"));
        }
        Ok(ShortWeierstrass { a, b })
    }

    #[inline]
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    #[inline]
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// Right-hand side `x^3 + a x + b`.
    pub fn rhs(&self, x: &FieldElement) -> FieldElement {
        &(&x.pow(3) + &(&self.a * x)) + &self.b
    }

    /// Number of points including infinity, `p + 1 + sum_x (x^3 + ax + b | p)`.
    ///
    /// Walks the whole field, so only usable for small moduli.
    pub fn order(&self) -> BigUint {
        let field = self.field();
        let trace: i64 = field
            .elements()
            .map(|x| i64::from(self.rhs(&x).legendre()))
            .sum();
        let order = BigInt::from(field.modulus().clone()) + BigInt::from(1 + trace);
        // Hasse bound keeps the order positive.
        order.to_biguint().unwrap_or_default()
    }

    fn slope(&self, p1: &Affine, p2: &Affine) -> Option<FieldElement> {
        let field = self.field();
        let slope = if p1 == p2 {
            // λ = (3x^2 + a) / (2y)
            let numerator = &(&field.element(3u32) * &p1.x.square()) + &self.a;
            numerator.checked_div(&p1.y.double())
        } else {
            // λ = (y1 - y2) / (x1 - x2)
            (&p1.y - &p2.y).checked_div(&(&p1.x - &p2.x))
        };
        slope.ok()
    }
}

impl CurveModel for ShortWeierstrass {
    const FORM: CurveForm = CurveForm::ShortWeierstrass;

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

    /// `y^2 z = x^3 + a x z^2 + b z^3`
    fn contains(&self, point: &Projective) -> bool {
        let Projective { x, y, z } = point;
        if x.is_zero() && y.is_zero() && z.is_zero() {
            return false;
        }
        let lhs = &y.square() * z;
        let rhs = &(&x.pow(3) + &(&(&self.a * x) * &z.square())) + &(&self.b * &z.pow(3));
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

        // P = -Q and 2-torsion doublings have a zero denominator.
        let Some(lambda) = self.slope(&p1, &p2) else {
            return Ok(self.identity());
        };

        // x_r = λ^2 - x1 - x2
        let x_r = &(&lambda.square() - &p1.x) - &p2.x;
        // y_r = λ(x1 - x_r) - y1
        let y_r = &(&lambda * &(&p1.x - &x_r)) - &p1.y;

        Ok(Projective::from_affine(&Affine::new(x_r, y_r)))
    }

    fn lift(&self, x: &FieldElement) -> Vec<Affine> {
        lift_pair(x, &self.rhs(x))
    }
}

impl Display for ShortWeierstrass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Weierstrass curve y^2=x^3+{}x+{} over {}",
            self.a,
            self.b,
            self.field()
        )
    }
}
