use core::fmt::{self, Display, Formatter};
use core::ops::Neg;

use field::{BigInt, FieldElement};
use num_bigint::Sign;

use crate::affine::Affine;
use crate::curve::Curve;
use crate::errors::CurveError;
use crate::projective::Projective;

/// A point on a specific curve, in projective coordinates `(x, y, z)`.
///
/// Points are only ever constructed on their curve, with `z = 1` or as the
/// single point at infinity `(0,1,0)`. Two points are equal when they lie on
/// the same curve and have identical coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    curve: Curve,
    coords: Projective,
}

impl Point {
    /// Caller guarantees `curve.contains(&coords)`.
    pub(crate) fn from_parts(curve: Curve, coords: Projective) -> Self {
        Point { curve, coords }
    }

    fn with_coords(&self, coords: Projective) -> Point {
        Point::from_parts(self.curve.clone(), coords)
    }

    #[inline]
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    #[inline]
    pub fn coordinates(&self) -> &Projective {
        &self.coords
    }

    #[inline]
    pub fn x(&self) -> &FieldElement {
        &self.coords.x
    }

    #[inline]
    pub fn y(&self) -> &FieldElement {
        &self.coords.y
    }

    #[inline]
    pub fn z(&self) -> &FieldElement {
        &self.coords.z
    }

    pub fn is_identity(&self) -> bool {
        self.curve.is_identity_coords(&self.coords)
    }

    /// Affine coordinates; `None` for the point at infinity of the
    /// Weierstrass and Montgomery models.
    pub fn to_affine(&self) -> Option<Affine> {
        self.coords.to_affine()
    }

    /// The same point rescaled to `z = 1` where possible.
    pub fn normalize(&self) -> Point {
        self.with_coords(self.coords.normalize())
    }

    pub fn add(&self, other: &Point) -> Result<Point, CurveError> {
        if self.curve != other.curve {
            return Err(CurveError::CurveMismatch);
        }
        let coords = self.curve.add_coords(&self.coords, &other.coords)?;
        Ok(self.with_coords(coords))
    }

    pub fn sub(&self, other: &Point) -> Result<Point, CurveError> {
        self.add(&other.negate())
    }

    pub fn double(&self) -> Result<Point, CurveError> {
        let coords = self.curve.double_coords(&self.coords)?;
        Ok(self.with_coords(coords))
    }

    pub fn negate(&self) -> Point {
        self.with_coords(self.curve.negate_coords(&self.coords))
    }

    /// `k * P`. A negative `k` computes `(-k) * (-P)`; `0 * P` is the
    /// identity.
    pub fn scalar_mul(&self, k: &BigInt) -> Result<Point, CurveError> {
        let (sign, magnitude) = (k.sign(), k.magnitude());
        let base = match sign {
            Sign::Minus => self.negate(),
            _ => self.clone(),
        };
        let coords = self.curve.scalar_mul_coords(&base.coords, magnitude)?;
        Ok(self.with_coords(coords))
    }

    pub fn mul_i64(&self, k: i64) -> Result<Point, CurveError> {
        self.scalar_mul(&BigInt::from(k))
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        self.negate()
    }
}

impl<'a> Neg for &'a Point {
    type Output = Point;

    fn neg(self) -> Point {
        self.negate()
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.coords, f)
    }
}
