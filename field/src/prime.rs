//! The prime field `F_p` and its precomputed exponents.

use core::fmt::{self, Debug, Display, Formatter};
use core::hash::{Hash, Hasher};
use std::sync::Arc;

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use crate::element::FieldElement;
use crate::errors::FieldError;
use crate::primality::is_probable_prime;

struct FieldParams {
    modulus: BigUint,
    // (p - 1) / 2
    legendre_exponent: BigUint,
    // p - 2
    inversion_exponent: BigUint,
    // p - 1 = odd_part * 2^two_adicity
    two_adicity: u64,
    odd_part: BigUint,
    // smallest quadratic non-residue
    non_residue: BigUint,
}

/// A prime field `F_p` with `p > 3`.
///
/// Cloning is cheap: the modulus and the exponents derived from it are
/// shared. Two fields compare equal when their moduli do.
#[derive(Clone)]
pub struct PrimeField {
    params: Arc<FieldParams>,
}

impl PrimeField {
    /// Create the field of integers modulo `modulus`.
    pub fn new(modulus: BigUint) -> Result<Self, FieldError> {
        if modulus <= BigUint::from(3u32) || !is_probable_prime(&modulus) {
            return Err(FieldError::InvalidModulus(modulus));
        }

        let p_minus_one = &modulus - 1u32;
        let two_adicity = p_minus_one.trailing_zeros().unwrap_or(0);
        let odd_part = &p_minus_one >> two_adicity;
        let legendre_exponent = &p_minus_one >> 1u32;
        let inversion_exponent = &modulus - 2u32;

        let mut candidate = BigUint::from(2u32);
        while candidate.modpow(&legendre_exponent, &modulus) != p_minus_one {
            candidate += 1u32;
        }

        Ok(PrimeField {
            params: Arc::new(FieldParams {
                modulus,
                legendre_exponent,
                inversion_exponent,
                two_adicity,
                odd_part,
                non_residue: candidate,
            }),
        })
    }

    /// Create the field of integers modulo a machine-sized prime.
    pub fn from_u64(modulus: u64) -> Result<Self, FieldError> {
        Self::new(BigUint::from(modulus))
    }

    /// The characteristic `p`, which is also the number of elements.
    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.params.modulus
    }

    #[inline]
    pub fn zero(&self) -> FieldElement {
        FieldElement::from_reduced(BigUint::zero(), self.clone())
    }

    #[inline]
    pub fn one(&self) -> FieldElement {
        FieldElement::from_reduced(BigUint::one(), self.clone())
    }

    /// Embed an integer, reducing it modulo `p`.
    pub fn element<T: Into<BigUint>>(&self, value: T) -> FieldElement {
        let value = value.into() % self.modulus();
        FieldElement::from_reduced(value, self.clone())
    }

    /// Embed a signed integer, reducing it modulo `p`.
    pub fn element_from_i64(&self, value: i64) -> FieldElement {
        let magnitude = self.element(value.unsigned_abs());
        if value < 0 {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Every element of the field exactly once, in ascending order of the
    /// integer representative.
    pub fn elements(&self) -> Elements {
        Elements {
            field: self.clone(),
            next: BigUint::zero(),
        }
    }

    pub(crate) fn legendre_exponent(&self) -> &BigUint {
        &self.params.legendre_exponent
    }

    pub(crate) fn inversion_exponent(&self) -> &BigUint {
        &self.params.inversion_exponent
    }

    pub(crate) fn two_adicity(&self) -> u64 {
        self.params.two_adicity
    }

    pub(crate) fn odd_part(&self) -> &BigUint {
        &self.params.odd_part
    }

    pub(crate) fn non_residue(&self) -> FieldElement {
        FieldElement::from_reduced(self.params.non_residue.clone(), self.clone())
    }
}

impl PartialEq for PrimeField {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.params, &other.params) || self.params.modulus == other.params.modulus
    }
}

impl Eq for PrimeField {}

impl Hash for PrimeField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.params.modulus.hash(state);
    }
}

impl Display for PrimeField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "F_{}", self.params.modulus)
    }
}

impl Debug for PrimeField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "PrimeField({})", self.params.modulus)
    }
}

/// Iterator over all elements of a field, see [`PrimeField::elements`].
#[derive(Clone, Debug)]
pub struct Elements {
    field: PrimeField,
    next: BigUint,
}

impl Iterator for Elements {
    type Item = FieldElement;

    fn next(&mut self) -> Option<FieldElement> {
        if &self.next >= self.field.modulus() {
            return None;
        }
        let element = FieldElement::from_reduced(self.next.clone(), self.field.clone());
        self.next += 1u32;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (self.field.modulus() - &self.next).to_usize() {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_composite_and_small_moduli() {
        assert!(matches!(
            PrimeField::from_u64(91),
            Err(FieldError::InvalidModulus(_))
        ));
        assert!(PrimeField::from_u64(2).is_err());
        assert!(PrimeField::from_u64(3).is_err());
        assert!(PrimeField::from_u64(5).is_ok());
    }

    #[test]
    fn test_precomputed_exponents() {
        let field = PrimeField::from_u64(101).unwrap();
        // 100 = 25 * 2^2
        assert_eq!(field.two_adicity(), 2);
        assert_eq!(field.odd_part(), &BigUint::from(25u32));
        assert_eq!(field.legendre_exponent(), &BigUint::from(50u32));
        assert_eq!(field.non_residue().legendre(), -1);
    }

    #[test]
    fn test_element_reduction() {
        let field = PrimeField::from_u64(101).unwrap();
        assert_eq!(field.element(205u32), field.element(3u32));
        assert_eq!(field.element_from_i64(-1), field.element(100u32));
        assert_eq!(field.element_from_i64(-202), field.zero());
    }

    #[test]
    fn test_elements_enumerates_each_once() {
        let field = PrimeField::from_u64(13).unwrap();
        let all: Vec<_> = field.elements().collect();
        assert_eq!(all.len(), 13);
        assert_eq!(field.elements().size_hint(), (13, Some(13)));
        for (i, element) in all.iter().enumerate() {
            assert_eq!(element.value(), &BigUint::from(i));
        }
    }

    #[test]
    fn test_field_equality_by_modulus() {
        let a = PrimeField::from_u64(1009).unwrap();
        let b = PrimeField::from_u64(1009).unwrap();
        let c = PrimeField::from_u64(1013).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.to_string(), "F_1009");
    }
}
