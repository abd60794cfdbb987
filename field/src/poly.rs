//! Dense univariate polynomials over a prime field, just enough to find the
//! roots of small-degree polynomials.

use core::ops::{Add, Mul, Sub};

use num_bigint::BigUint;

use crate::element::FieldElement;
use crate::errors::FieldError;
use crate::prime::PrimeField;

/// A polynomial `c_0 + c_1 x + ... + c_n x^n`; coefficients are stored
/// lowest degree first with no trailing zeros.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial {
    field: PrimeField,
    coeffs: Vec<FieldElement>,
}

impl Polynomial {
    pub fn new(field: &PrimeField, mut coeffs: Vec<FieldElement>) -> Self {
        while coeffs.last().is_some_and(FieldElement::is_zero) {
            coeffs.pop();
        }
        Polynomial {
            field: field.clone(),
            coeffs,
        }
    }

    pub fn zero(field: &PrimeField) -> Self {
        Polynomial::new(field, Vec::new())
    }

    pub fn constant(value: FieldElement) -> Self {
        let field = value.field().clone();
        Polynomial::new(&field, vec![value])
    }

    /// The monomial `x`.
    pub fn x(field: &PrimeField) -> Self {
        Polynomial::new(field, vec![field.zero(), field.one()])
    }

    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    pub fn coefficients(&self) -> &[FieldElement] {
        &self.coeffs
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    pub fn leading(&self) -> Option<&FieldElement> {
        self.coeffs.last()
    }

    pub fn evaluate(&self, x: &FieldElement) -> FieldElement {
        self.coeffs
            .iter()
            .rev()
            .fold(self.field.zero(), |acc, c| &(&acc * x) + c)
    }

    /// Scale so the leading coefficient is one. The zero polynomial is
    /// returned unchanged.
    pub fn monic(&self) -> Polynomial {
        let Some(lead_inv) = self.leading().and_then(|lead| lead.inverse().ok()) else {
            return self.clone();
        };
        let coeffs = self.coeffs.iter().map(|c| c * &lead_inv).collect();
        Polynomial::new(&self.field, coeffs)
    }

    /// Euclidean division, `self = q * divisor + r` with `deg r < deg divisor`.
    pub fn div_rem(&self, divisor: &Polynomial) -> Result<(Polynomial, Polynomial), FieldError> {
        let lead_inv = divisor
            .leading()
            .ok_or(FieldError::DivisionByZero)?
            .inverse()?;
        Ok(self.long_division(divisor, &lead_inv))
    }

    pub fn rem(&self, divisor: &Polynomial) -> Result<Polynomial, FieldError> {
        Ok(self.div_rem(divisor)?.1)
    }

    // `divisor` must be non-zero with leading coefficient inverse `lead_inv`.
    fn long_division(
        &self,
        divisor: &Polynomial,
        lead_inv: &FieldElement,
    ) -> (Polynomial, Polynomial) {
        let divisor_len = divisor.coeffs.len();
        if self.coeffs.len() < divisor_len {
            return (Polynomial::zero(&self.field), self.clone());
        }

        let shift = divisor_len - 1;
        let mut remainder = self.coeffs.clone();
        let mut quotient = vec![self.field.zero(); remainder.len() - shift];
        for i in (0..quotient.len()).rev() {
            let coeff = &remainder[i + shift] * lead_inv;
            if !coeff.is_zero() {
                for (j, d) in divisor.coeffs.iter().enumerate() {
                    remainder[i + j] = &remainder[i + j] - &(&coeff * d);
                }
            }
            quotient[i] = coeff;
        }
        remainder.truncate(shift);

        (
            Polynomial::new(&self.field, quotient),
            Polynomial::new(&self.field, remainder),
        )
    }

    /// Monic greatest common divisor. `gcd(0, 0) = 0`.
    pub fn gcd(&self, other: &Polynomial) -> Polynomial {
        let mut a = self.monic();
        let mut b = other.monic();
        while !b.is_zero() {
            let r = a.long_division(&b, &self.field.one()).1.monic();
            a = b;
            b = r;
        }
        a
    }

    /// `self^exp mod modulus`.
    pub fn pow_mod(&self, exp: &BigUint, modulus: &Polynomial) -> Result<Polynomial, FieldError> {
        let modulus = modulus.monic();
        if modulus.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        Ok(self.pow_biguint_mod(exp, &modulus, &self.field.one()))
    }

    /// The distinct roots lying in the field, in ascending order of their
    /// integer representative.
    pub fn roots(&self) -> Vec<FieldElement> {
        let f = self.monic();
        if f.degree().unwrap_or(0) == 0 {
            return Vec::new();
        }

        // gcd(f, x^p - x) keeps exactly the linear factors, each once.
        let x = Polynomial::x(&self.field);
        let one = self.field.one();
        let x_p = x.pow_biguint_mod(self.field.modulus(), &f, &one);
        let split = f.gcd(&(&x_p - &x));

        let mut roots = Vec::new();
        split_linear(&split, &mut roots);
        roots.sort_by(|a, b| a.value().cmp(b.value()));
        roots
    }

    // `modulus` must be monic.
    fn pow_biguint_mod(&self, exp: &BigUint, modulus: &Polynomial, one: &FieldElement) -> Polynomial {
        let mut result = Polynomial::constant(one.clone()).long_division(modulus, one).1;
        let base = self.long_division(modulus, one).1;
        for i in (0..exp.bits()).rev() {
            result = (&result * &result).long_division(modulus, one).1;
            if exp.bit(i) {
                result = (&result * &base).long_division(modulus, one).1;
            }
        }
        result
    }
}

// Push the roots of `g`, a monic product of distinct linear factors.
fn split_linear(g: &Polynomial, roots: &mut Vec<FieldElement>) {
    let field = g.field();
    match g.degree() {
        None | Some(0) => {}
        Some(1) => roots.push(-&g.coeffs[0]),
        Some(2) => {
            // x^2 + b x + c with distinct roots (-b +- sqrt(b^2 - 4c)) / 2
            let b = &g.coeffs[1];
            let c = &g.coeffs[0];
            let disc = &b.square() - &(&field.element(4u32) * c);
            let Some(r) = disc.sqrt() else {
                return;
            };
            let Ok(half) = field.element(2u32).inverse() else {
                return;
            };
            let minus_b = -b;
            roots.push(&(&minus_b + &r) * &half);
            roots.push(&(&minus_b - &r) * &half);
        }
        Some(degree) => {
            // Equal-degree splitting: (x + delta)^((p-1)/2) - 1 picks out the
            // roots r with r + delta a non-zero square. Some delta separates
            // any two distinct roots, so the scan always finds a split.
            let one = field.one();
            let exponent = (field.modulus() - 1u32) >> 1u32;
            for delta in field.elements() {
                let shifted = Polynomial::new(field, vec![delta, one.clone()]);
                let power = shifted.pow_biguint_mod(&exponent, g, &one);
                let h = g.gcd(&(&power - &Polynomial::constant(one.clone())));
                match h.degree() {
                    Some(d) if d > 0 && d < degree => {
                        let cofactor = g.long_division(&h, &one).0;
                        split_linear(&h, roots);
                        split_linear(&cofactor, roots);
                        return;
                    }
                    _ => {}
                }
            }
        }
    }
}

impl<'a, 'b> Add<&'b Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &'b Polynomial) -> Polynomial {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let zero = self.field.zero();
        let coeffs = (0..len)
            .map(|i| {
                let a = self.coeffs.get(i).unwrap_or(&zero);
                let b = rhs.coeffs.get(i).unwrap_or(&zero);
                a + b
            })
            .collect();
        Polynomial::new(&self.field, coeffs)
    }
}

impl<'a, 'b> Sub<&'b Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &'b Polynomial) -> Polynomial {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let zero = self.field.zero();
        let coeffs = (0..len)
            .map(|i| {
                let a = self.coeffs.get(i).unwrap_or(&zero);
                let b = rhs.coeffs.get(i).unwrap_or(&zero);
                a - b
            })
            .collect();
        Polynomial::new(&self.field, coeffs)
    }
}

impl<'a, 'b> Mul<&'b Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &'b Polynomial) -> Polynomial {
        if self.is_zero() || rhs.is_zero() {
            return Polynomial::zero(&self.field);
        }
        let mut coeffs = vec![self.field.zero(); self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        Polynomial::new(&self.field, coeffs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(field: &PrimeField, coeffs: &[i64]) -> Polynomial {
        let coeffs = coeffs.iter().map(|&c| field.element_from_i64(c)).collect();
        Polynomial::new(field, coeffs)
    }

    fn values(roots: &[FieldElement]) -> Vec<u32> {
        roots
            .iter()
            .map(|r| r.value().to_u32_digits().first().copied().unwrap_or(0))
            .collect()
    }

    #[test]
    fn test_trims_and_degree() {
        let field = PrimeField::from_u64(101).unwrap();
        assert_eq!(poly(&field, &[1, 2, 0, 0]).degree(), Some(1));
        assert_eq!(poly(&field, &[0, 0]).degree(), None);
        assert!(poly(&field, &[101]).is_zero());
    }

    #[test]
    fn test_evaluate() {
        let field = PrimeField::from_u64(101).unwrap();
        // x^3 + x + 2 at 5 = 132 = 31
        let f = poly(&field, &[2, 1, 0, 1]);
        assert_eq!(f.evaluate(&field.element(5u32)), field.element(31u32));
    }

    #[test]
    fn test_div_rem() {
        let field = PrimeField::from_u64(101).unwrap();
        // (x^2 - 1) = (x + 1)(x - 1)
        let f = poly(&field, &[-1, 0, 1]);
        let g = poly(&field, &[1, 1]);
        let (q, r) = f.div_rem(&g).unwrap();
        assert_eq!(q, poly(&field, &[-1, 1]));
        assert!(r.is_zero());

        let (q, r) = poly(&field, &[3, 0, 2]).div_rem(&poly(&field, &[0, 1])).unwrap();
        assert_eq!(q, poly(&field, &[0, 2]));
        assert_eq!(r, poly(&field, &[3]));

        assert_eq!(
            f.div_rem(&Polynomial::zero(&field)),
            Err(FieldError::DivisionByZero)
        );
    }

    #[test]
    fn test_gcd_is_monic() {
        let field = PrimeField::from_u64(101).unwrap();
        // 2(2x - 1)(x - 1) and 3(x - 1)(x - 3)
        let f = poly(&field, &[2, -6, 4]);
        let g = poly(&field, &[9, -12, 3]);
        assert_eq!(f.gcd(&g), poly(&field, &[-1, 1]));
    }

    #[test]
    fn test_pow_mod() {
        let field = PrimeField::from_u64(101).unwrap();
        let x = Polynomial::x(&field);
        // x^2 = -1 mod (x^2 + 1), so x^4 = 1
        let m = poly(&field, &[1, 0, 1]);
        assert_eq!(x.pow_mod(&BigUint::from(4u32), &m).unwrap(), poly(&field, &[1]));
        assert_eq!(x.pow_mod(&BigUint::from(2u32), &m).unwrap(), poly(&field, &[-1]));
        assert!(x.pow_mod(&BigUint::from(2u32), &Polynomial::zero(&field)).is_err());
    }

    #[test]
    fn test_roots_linear_and_quadratic() {
        let field = PrimeField::from_u64(101).unwrap();
        assert_eq!(values(&poly(&field, &[-7, 1]).roots()), vec![7]);
        // (x - 3)(x - 90)
        assert_eq!(values(&poly(&field, &[270, -93, 1]).roots()), vec![3, 90]);
        // x^2 - 2 is irreducible mod 101
        assert!(poly(&field, &[-2, 0, 1]).roots().is_empty());
        // repeated root reported once
        assert_eq!(values(&poly(&field, &[4, -4, 1]).roots()), vec![2]);
    }

    #[test]
    fn test_roots_cubic() {
        let field = PrimeField::from_u64(1009).unwrap();
        // z^3 + 866 z + 208 has the single root 697
        assert_eq!(values(&poly(&field, &[208, 866, 0, 1]).roots()), vec![697]);

        let field = PrimeField::from_u64(101).unwrap();
        // (x - 1)(x - 5)(x - 50) splits completely
        let f = &(&poly(&field, &[-1, 1]) * &poly(&field, &[-5, 1])) * &poly(&field, &[-50, 1]);
        assert_eq!(values(&f.roots()), vec![1, 5, 50]);
    }

    #[test]
    fn test_roots_every_element() {
        // x^p - x vanishes on the whole field
        let field = PrimeField::from_u64(13).unwrap();
        let mut coeffs = vec![0i64; 14];
        coeffs[1] = -1;
        coeffs[13] = 1;
        let roots = poly(&field, &coeffs).roots();
        assert_eq!(roots, field.elements().collect::<Vec<_>>());
    }

    #[test]
    fn test_zero_polynomial_has_no_roots() {
        let field = PrimeField::from_u64(101).unwrap();
        assert!(Polynomial::zero(&field).roots().is_empty());
        assert!(poly(&field, &[5]).roots().is_empty());
    }
}
