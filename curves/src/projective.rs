use core::fmt::{self, Display, Formatter};

use field::{FieldElement, PrimeField};

use crate::affine::Affine;

/// Projective coordinates `(X:Y:Z)` where `(x, y) = (X/Z, Y/Z)`.
/// The point at infinity of the Weierstrass and Montgomery models is
/// `(0:1:0)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Projective {
    pub x: FieldElement,
    pub y: FieldElement,
    pub z: FieldElement,
}

impl Projective {
    pub fn new(x: FieldElement, y: FieldElement, z: FieldElement) -> Self {
        Projective { x, y, z }
    }

    /// `(0:1:0)`
    pub fn infinity(field: &PrimeField) -> Self {
        Projective::new(field.zero(), field.one(), field.zero())
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    /// Convert from affine coordinates, with `Z = 1`.
    pub fn from_affine(point: &Affine) -> Self {
        let one = point.x.field().one();
        Projective::new(point.x.clone(), point.y.clone(), one)
    }

    /// Convert to affine coordinates; `None` at infinity.
    pub fn to_affine(&self) -> Option<Affine> {
        let z_inv = self.z.inverse().ok()?;
        Some(Affine::new(&self.x * &z_inv, &self.y * &z_inv))
    }

    /// Rescale to `Z = 1`, leaving points at infinity untouched.
    pub fn normalize(&self) -> Self {
        match self.to_affine() {
            Some(affine) => Projective::from_affine(&affine),
            None => self.clone(),
        }
    }
}

impl From<Affine> for Projective {
    fn from(point: Affine) -> Self {
        Projective::from_affine(&point)
    }
}

impl Display for Projective {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infinity() {
        let field = PrimeField::from_u64(101).unwrap();
        let inf = Projective::infinity(&field);
        assert!(inf.is_infinity());
        assert_eq!(inf.to_affine(), None);
        assert_eq!(inf.normalize(), inf);
        assert_eq!(inf.to_string(), "(0,1,0)");
    }

    #[test]
    fn test_affine_conversion() {
        let field = PrimeField::from_u64(101).unwrap();
        let p = Projective::new(field.element(4u32), field.element(6u32), field.element(2u32));
        let affine = p.to_affine().unwrap();
        assert_eq!(affine, Affine::new(field.element(2u32), field.element(3u32)));
        assert_eq!(
            p.normalize(),
            Projective::new(field.element(2u32), field.element(3u32), field.one())
        );
        assert_eq!(Projective::from(affine).to_string(), "(2,3,1)");
    }
}
