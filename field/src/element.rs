//! Elements of a runtime prime field.

use core::cmp::Ordering;
use core::fmt::{self, Debug, Display, Formatter};
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::errors::FieldError;
use crate::prime::PrimeField;

/// An element of a [`PrimeField`], stored as its representative in `[0, p)`.
#[derive(Clone)]
pub struct FieldElement {
    value: BigUint,
    field: PrimeField,
}

impl FieldElement {
    /// Caller guarantees `value < p`.
    #[inline]
    pub(crate) fn from_reduced(value: BigUint, field: PrimeField) -> Self {
        FieldElement { value, field }
    }

    /// The integer representative in `[0, p)`.
    #[inline]
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    #[inline]
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.value.is_one()
    }

    #[inline]
    pub fn square(&self) -> FieldElement {
        self * self
    }

    pub fn double(&self) -> FieldElement {
        self + self
    }

    pub fn pow(&self, exp: u64) -> FieldElement {
        self.pow_biguint(&BigUint::from(exp))
    }

    pub fn pow_biguint(&self, exp: &BigUint) -> FieldElement {
        let value = self.value.modpow(exp, self.field.modulus());
        FieldElement::from_reduced(value, self.field.clone())
    }

    /// Multiplicative inverse via Fermat's little theorem.
    pub fn inverse(&self) -> Result<FieldElement, FieldError> {
        if self.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        Ok(self.pow_biguint(self.field.inversion_exponent()))
    }

    pub fn checked_div(&self, rhs: &FieldElement) -> Result<FieldElement, FieldError> {
        Ok(self * &rhs.inverse()?)
    }

    /// Legendre symbol: `0` for zero, `1` for a non-zero square, `-1` otherwise.
    pub fn legendre(&self) -> i8 {
        if self.is_zero() {
            return 0;
        }
        if self.pow_biguint(self.field.legendre_exponent()).is_one() {
            1
        } else {
            -1
        }
    }

    /// Zero counts as a square.
    pub fn is_square(&self) -> bool {
        self.legendre() >= 0
    }

    /// A square root, if one exists. Which of the two roots is returned is
    /// unspecified.
    pub fn sqrt(&self) -> Option<FieldElement> {
        if self.is_zero() {
            return Some(self.clone());
        }
        if self.legendre() != 1 {
            return None;
        }

        // Tonelli-Shanks
        let odd_part = self.field.odd_part();
        let mut m = self.field.two_adicity();
        let mut c = self.field.non_residue().pow_biguint(odd_part);
        let mut t = self.pow_biguint(odd_part);
        let mut r = self.pow_biguint(&((odd_part + 1u32) >> 1u32));

        while !t.is_one() {
            let mut i = 0u64;
            let mut t2i = t.clone();
            while !t2i.is_one() {
                t2i = t2i.square();
                i += 1;
            }

            let mut b = c;
            for _ in 0..(m - i - 1) {
                b = b.square();
            }
            m = i;
            c = b.square();
            t = &t * &c;
            r = &r * &b;
        }

        Some(r)
    }

    #[inline]
    fn assert_same_field(&self, other: &FieldElement) {
        debug_assert!(
            self.field == other.field,
            "mixing elements of {} and {}",
            self.field,
            other.field
        );
    }
}

impl<'a, 'b> Add<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: &'b FieldElement) -> FieldElement {
        self.assert_same_field(rhs);
        let mut value = &self.value + &rhs.value;
        if &value >= self.field.modulus() {
            value -= self.field.modulus();
        }
        FieldElement::from_reduced(value, self.field.clone())
    }
}

impl<'a, 'b> Sub<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: &'b FieldElement) -> FieldElement {
        self.assert_same_field(rhs);
        let value = if self.value >= rhs.value {
            &self.value - &rhs.value
        } else {
            &self.value + self.field.modulus() - &rhs.value
        };
        FieldElement::from_reduced(value, self.field.clone())
    }
}

impl<'a, 'b> Mul<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: &'b FieldElement) -> FieldElement {
        self.assert_same_field(rhs);
        let value = (&self.value * &rhs.value) % self.field.modulus();
        FieldElement::from_reduced(value, self.field.clone())
    }
}

impl<'a> Neg for &'a FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        if self.is_zero() {
            return self.clone();
        }
        FieldElement::from_reduced(self.field.modulus() - &self.value, self.field.clone())
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        -&self
    }
}

define_add_variants!(LHS = FieldElement, RHS = FieldElement, Output = FieldElement);
define_sub_variants!(LHS = FieldElement, RHS = FieldElement, Output = FieldElement);
define_mul_variants!(LHS = FieldElement, RHS = FieldElement, Output = FieldElement);
define_assign_variants!(FieldElement);

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.field == other.field
    }
}

impl Eq for FieldElement {}

impl Hash for FieldElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.field.hash(state);
        self.value.hash(state);
    }
}

/// Elements of one field are ordered by their integer representative;
/// elements of different fields are incomparable.
impl PartialOrd for FieldElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.field != other.field {
            return None;
        }
        Some(self.value.cmp(&other.value))
    }
}

impl Display for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Debug for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({} mod {})", self.value, self.field.modulus())
    }
}
