//! Random curve search.

use field::{is_probable_prime, BigUint, FieldElement, PrimeField};
use log::{debug, info, trace};
use num_integer::Integer;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::curve::Curve;
use crate::errors::CurveError;
use crate::form::CurveForm;
use crate::weierstrass::ShortWeierstrass;

/// What [`find_curve`] looks for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Model of the returned curve.
    pub form: CurveForm,
    /// Required cofactor `h`: the group order must be `h` times a prime.
    /// `None` accepts any order.
    pub cofactor: Option<u64>,
    /// Fixed Weierstrass `a` coefficient.
    pub a: Option<BigUint>,
    /// Fixed Weierstrass `b` coefficient.
    pub b: Option<BigUint>,
    /// Give up after this many candidates. `None` searches until a curve is
    /// found.
    pub max_attempts: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            form: CurveForm::ShortWeierstrass,
            cofactor: Some(1),
            a: None,
            b: None,
            max_attempts: None,
        }
    }
}

/// The Weierstrass curve with j-invariant `j`, twisted by `u`:
/// `(a u^2, b u^3)` for the base curve `(a, b)`. A non-square `u` gives the
/// quadratic twist.
fn from_j_invariant(j: &FieldElement, u: &FieldElement) -> Result<ShortWeierstrass, CurveError> {
    let field = j.field();
    let (a, b) = if j.is_zero() {
        (field.zero(), field.one())
    } else if *j == field.element(1728u32) {
        (field.one(), field.zero())
    } else {
        // k = j / (1728 - j) gives j(3k, 2k) = j
        let k = j
            .checked_div(&(&field.element(1728u32) - j))
            .map_err(|_| CurveError::InvalidCurve("j-invariant 1728"))?;
        (&field.element(3u32) * &k, &field.element(2u32) * &k)
    };
    let u2 = u.square();
    let u3 = &u2 * u;
    ShortWeierstrass::new(&a * &u2, &b * &u3)
}

/// Sample a non-singular Weierstrass curve.
///
/// With neither coefficient fixed the curve comes from a uniform
/// j-invariant and a uniform twist; with one fixed the other is uniform.
/// With both fixed that curve is returned as is.
pub fn random_short_weierstrass<R: Rng + ?Sized>(
    field: &PrimeField,
    config: &SearchConfig,
    rng: &mut R,
) -> Result<ShortWeierstrass, CurveError> {
    let fixed_a = config.a.as_ref().map(|a| field.element(a.clone()));
    let fixed_b = config.b.as_ref().map(|b| field.element(b.clone()));

    if let (Some(a), Some(b)) = (&fixed_a, &fixed_b) {
        return ShortWeierstrass::new(a.clone(), b.clone());
    }

    loop {
        let candidate = match (&fixed_a, &fixed_b) {
            (Some(a), _) => ShortWeierstrass::new(a.clone(), field.random(rng)),
            (_, Some(b)) => ShortWeierstrass::new(field.random(rng), b.clone()),
            (None, None) => from_j_invariant(&field.random(rng), &field.random_nonzero(rng)),
        };
        match candidate {
            Ok(curve) => return Ok(curve),
            Err(e) => trace!("resampling: {e}"),
        }
    }
}

/// Search for a random curve of `config.form` whose group order is the
/// configured cofactor times a prime.
///
/// The group order is counted point by point, so this is meant for small
/// fields.
pub fn find_curve<R: Rng + ?Sized>(
    field: &PrimeField,
    config: &SearchConfig,
    rng: &mut R,
) -> Result<Curve, CurveError> {
    if config.cofactor == Some(0) {
        return Err(CurveError::InvalidCurve("cofactor must be positive"));
    }
    let single_candidate = config.a.is_some() && config.b.is_some();
    let max_attempts = if single_candidate {
        Some(config.max_attempts.map_or(1, |max| max.min(1)))
    } else {
        config.max_attempts
    };

    let mut attempts = 0u64;
    loop {
        if max_attempts.is_some_and(|max| attempts >= max) {
            return Err(CurveError::SearchExhausted(attempts));
        }
        attempts += 1;

        let weierstrass = random_short_weierstrass(field, config, rng)?;
        let curve = match Curve::ShortWeierstrass(weierstrass.clone()).to_form(config.form) {
            Ok(curve) => curve,
            Err(e @ CurveError::UnsupportedForm { .. }) => {
                debug!("attempt {attempts}: {weierstrass}: {e}");
                continue;
            }
            Err(e) => return Err(e),
        };

        if let Some(cofactor) = config.cofactor {
            let order = weierstrass.order();
            let (quotient, remainder) = order.div_rem(&BigUint::from(cofactor));
            if remainder != BigUint::default() || !is_probable_prime(&quotient) {
                debug!("attempt {attempts}: {weierstrass}: order {order} rejected");
                continue;
            }
        }

        info!("found {curve} after {attempts} attempts");
        return Ok(curve);
    }
}
