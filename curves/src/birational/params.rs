//! Parameter maps: the curve-level half of each directed edge.

use field::FieldElement;
use log::{debug, trace};

use crate::edwards::Edwards;
use crate::errors::CurveError;
use crate::form::CurveForm::{
    Edwards as E, Montgomery as M, ShortWeierstrass as W, TwistedEdwards as T,
};
use crate::montgomery::Montgomery;
use crate::sqrt::canonical_sqrt;
use crate::twisted_edwards::TwistedEdwards;
use crate::weierstrass::ShortWeierstrass;

use super::roots::{alpha_s_candidates, edwards_scale, find_alpha_s, AlphaS};
use super::Edge;

// Every failure of a parameter map means the target model does not exist.
fn div(num: &FieldElement, den: &FieldElement, edge: Edge) -> Result<FieldElement, CurveError> {
    num.checked_div(den).map_err(|_| edge.unsupported())
}

fn sqrt(x: &FieldElement, edge: Edge) -> Result<FieldElement, CurveError> {
    canonical_sqrt(x).map_err(|_| edge.unsupported())
}

fn build<C>(edge: Edge, curve: Result<C, CurveError>) -> Result<C, CurveError> {
    curve.map_err(|_| edge.unsupported())
}

fn int(x: &FieldElement, n: i64) -> FieldElement {
    x.field().element_from_i64(n)
}

/// `A = 3 alpha s`, `B = s`.
pub fn short_weierstrass_to_montgomery(curve: &ShortWeierstrass) -> Result<Montgomery, CurveError> {
    let edge = Edge::new(W, M);
    let AlphaS { alpha, s } = find_alpha_s(curve, edge)?;
    let a = &(&int(&alpha, 3) * &alpha) * &s;
    build(edge, Montgomery::new(a, s))
}

/// `a = (3 - A^2) / (3 B^2)`, `b = (2 A^3 - 9 A) / (27 B^3)`.
pub fn montgomery_to_short_weierstrass(curve: &Montgomery) -> Result<ShortWeierstrass, CurveError> {
    let edge = Edge::new(M, W);
    let (a, b) = (curve.a(), curve.b());
    let sw_a = div(
        &(&int(a, 3) - &a.square()),
        &(&int(a, 3) * &b.square()),
        edge,
    )?;
    let sw_b = div(
        &(&(&int(a, 2) * &a.pow(3)) - &(&int(a, 9) * a)),
        &(&int(a, 27) * &b.pow(3)),
        edge,
    )?;
    build(edge, ShortWeierstrass::new(sw_a, sw_b))
}

/// `A = 3 alpha + 2 / s`, `D = 3 alpha - 2 / s`.
pub fn short_weierstrass_to_twisted_edwards(
    curve: &ShortWeierstrass,
) -> Result<TwistedEdwards, CurveError> {
    let edge = Edge::new(W, T);
    let AlphaS { alpha, s } = find_alpha_s(curve, edge)?;
    let three_alpha = &int(&alpha, 3) * &alpha;
    let two_over_s = div(&int(&alpha, 2), &s, edge)?;
    build(
        edge,
        TwistedEdwards::new(&three_alpha + &two_over_s, &three_alpha - &two_over_s),
    )
}

/// `a = -(A^2 + 14 A D + D^2) / 48`,
/// `b = (A + D)(-A^2 + 34 A D - D^2) / 864`.
pub fn twisted_edwards_to_short_weierstrass(
    curve: &TwistedEdwards,
) -> Result<ShortWeierstrass, CurveError> {
    let edge = Edge::new(T, W);
    let (a, d) = (curve.a(), curve.d());
    let a2 = a.square();
    let d2 = d.square();
    let ad = a * d;
    let sw_a = div(
        &-(&(&a2 + &(&int(a, 14) * &ad)) + &d2),
        &int(a, 48),
        edge,
    )?;
    let sw_b = div(
        &(&(a + d) * &(&(&(&int(a, 34) * &ad) - &a2) - &d2)),
        &int(a, 864),
        edge,
    )?;
    build(edge, ShortWeierstrass::new(sw_a, sw_b))
}

/// `A = (a + 2) / b`, `D = (a - 2) / b`.
pub fn montgomery_to_twisted_edwards(curve: &Montgomery) -> Result<TwistedEdwards, CurveError> {
    let edge = Edge::new(M, T);
    let (a, b) = (curve.a(), curve.b());
    let two = int(a, 2);
    let te_a = div(&(a + &two), b, edge)?;
    let te_d = div(&(a - &two), b, edge)?;
    build(edge, TwistedEdwards::new(te_a, te_d))
}

/// `a = 2 (A + D) / (A - D)`, `b = 4 / (A - D)`.
pub fn twisted_edwards_to_montgomery(curve: &TwistedEdwards) -> Result<Montgomery, CurveError> {
    let edge = Edge::new(T, M);
    let (a, d) = (curve.a(), curve.d());
    let diff = a - d;
    let m_a = div(&(&int(a, 2) * &(a + d)), &diff, edge)?;
    let m_b = div(&int(a, 4), &diff, edge)?;
    build(edge, Montgomery::new(m_a, m_b))
}

/// `C = sqrt(1 / A)`, `D = d A`. Needs `A` to be a square.
pub fn twisted_edwards_to_edwards(curve: &TwistedEdwards) -> Result<Edwards, CurveError> {
    let edge = Edge::new(T, E);
    let (a, d) = (curve.a(), curve.d());
    let inv_a = div(&int(a, 1), a, edge)?;
    let c = sqrt(&inv_a, edge)?;
    build(edge, Edwards::new(c, d * a))
}

/// `A = 1 / C^2`, `D = C^2 d`.
pub fn edwards_to_twisted_edwards(curve: &Edwards) -> Result<TwistedEdwards, CurveError> {
    let edge = Edge::new(E, T);
    let (c, d) = (curve.c(), curve.d());
    let c2 = c.square();
    let te_a = div(&int(c, 1), &c2, edge)?;
    build(edge, TwistedEdwards::new(te_a, &c2 * d))
}

/// `a = -(1 + 14 d C^4 + C^8 d^2) / (48 C^4)`,
/// `b = (1 + C^4 d)(-1 + 34 d C^4 - C^8 d^2) / (864 C^6)`.
pub fn edwards_to_short_weierstrass(curve: &Edwards) -> Result<ShortWeierstrass, CurveError> {
    let edge = Edge::new(E, W);
    let (c, d) = (curve.c(), curve.d());
    let one = int(c, 1);
    let c4 = c.pow(4);
    let c4d = &c4 * d;
    let c8d2 = c4d.square();

    let sw_a = div(
        &-(&(&one + &(&int(c, 14) * &c4d)) + &c8d2),
        &(&int(c, 48) * &c4),
        edge,
    )?;
    let sw_b = div(
        &(&(&one + &c4d) * &(&(&(&int(c, 34) * &c4d) - &one) - &c8d2)),
        &(&int(c, 864) * &c.pow(6)),
        edge,
    )?;
    build(edge, ShortWeierstrass::new(sw_a, sw_b))
}

/// `C = t`, `D = -4a - 3 alpha^2`, for the first root `alpha` whose
/// `t = sqrt(s / (3 s alpha + 2))` exists.
pub fn short_weierstrass_to_edwards(curve: &ShortWeierstrass) -> Result<Edwards, CurveError> {
    let edge = Edge::new(W, E);
    let a = curve.a();
    for candidate in alpha_s_candidates(curve) {
        let Ok(t) = edwards_scale(&candidate) else {
            trace!("{edge}: alpha={} has no Edwards scale", candidate.alpha);
            continue;
        };
        let alpha = &candidate.alpha;
        let d = &-(&int(a, 4) * a) - &(&int(a, 3) * &alpha.square());
        if let Ok(edwards) = Edwards::new(t, d) {
            debug!("{edge}: alpha={} s={}", alpha, candidate.s);
            return Ok(edwards);
        }
    }
    Err(edge.unsupported())
}

/// `C = sqrt(b / (a + 2))`, `D = (a^2 - 4) / b^2`.
pub fn montgomery_to_edwards(curve: &Montgomery) -> Result<Edwards, CurveError> {
    let edge = Edge::new(M, E);
    let (a, b) = (curve.a(), curve.b());
    let ratio = div(b, &(a + &int(a, 2)), edge)?;
    let c = sqrt(&ratio, edge)?;
    let d = div(&(&a.square() - &int(a, 4)), &b.square(), edge)?;
    build(edge, Edwards::new(c, d))
}

/// `a = (2 + 2 C^4 d) / (1 - C^4 d)`, `b = 4 C^2 / (1 - C^4 d)`.
pub fn edwards_to_montgomery(curve: &Edwards) -> Result<Montgomery, CurveError> {
    let edge = Edge::new(E, M);
    let (c, d) = (curve.c(), curve.d());
    let c4d = &c.pow(4) * d;
    let den = &int(c, 1) - &c4d;
    let m_a = div(&(&int(c, 2) + &c4d.double()), &den, edge)?;
    let m_b = div(&(&int(c, 4) * &c.square()), &den, edge)?;
    build(edge, Montgomery::new(m_a, m_b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use field::PrimeField;

    // One curve over F_1009 in all four models.
    struct Vectors {
        w: ShortWeierstrass,
        m: Montgomery,
        t: TwistedEdwards,
        e: Edwards,
    }

    fn vectors() -> Vectors {
        let f = PrimeField::from_u64(1009).unwrap();
        Vectors {
            w: ShortWeierstrass::new(f.element(866u32), f.element(208u32)).unwrap(),
            m: Montgomery::new(f.element(32u32), f.element(733u32)).unwrap(),
            t: TwistedEdwards::new(f.element(519u32), f.element(636u32)).unwrap(),
            e: Edwards::new(f.element(480u32), f.element(141u32)).unwrap(),
        }
    }

    #[test]
    fn test_from_short_weierstrass() {
        let v = vectors();
        assert_eq!(short_weierstrass_to_montgomery(&v.w).unwrap(), v.m);
        assert_eq!(short_weierstrass_to_twisted_edwards(&v.w).unwrap(), v.t);
        assert_eq!(short_weierstrass_to_edwards(&v.w).unwrap(), v.e);
    }

    #[test]
    fn test_edwards_falls_back_to_later_root() {
        let f = PrimeField::from_u64(103).unwrap();
        // z^3 + z + 14 has roots 17, 20, 66; 3*17^2 + 1 is not a square
        let w = ShortWeierstrass::new(f.element(1u32), f.element(14u32)).unwrap();
        let candidates = alpha_s_candidates(&w);
        let alphas: Vec<_> = candidates.iter().map(|c| c.alpha.clone()).collect();
        assert_eq!(alphas, vec![f.element(20u32), f.element(66u32)]);
        assert!(edwards_scale(&candidates[0]).is_err());
        assert_eq!(edwards_scale(&candidates[1]).unwrap(), f.element(21u32));

        let e = short_weierstrass_to_edwards(&w).unwrap();
        assert_eq!(e, Edwards::new(f.element(21u32), f.element(9u32)).unwrap());
    }

    #[test]
    fn test_from_montgomery() {
        let v = vectors();
        assert_eq!(montgomery_to_short_weierstrass(&v.m).unwrap(), v.w);
        assert_eq!(montgomery_to_twisted_edwards(&v.m).unwrap(), v.t);
        assert_eq!(montgomery_to_edwards(&v.m).unwrap(), v.e);
    }

    #[test]
    fn test_from_twisted_edwards() {
        let v = vectors();
        assert_eq!(twisted_edwards_to_short_weierstrass(&v.t).unwrap(), v.w);
        assert_eq!(twisted_edwards_to_montgomery(&v.t).unwrap(), v.m);
        assert_eq!(twisted_edwards_to_edwards(&v.t).unwrap(), v.e);
    }

    #[test]
    fn test_from_edwards() {
        let v = vectors();
        assert_eq!(edwards_to_short_weierstrass(&v.e).unwrap(), v.w);
        assert_eq!(edwards_to_montgomery(&v.e).unwrap(), v.m);
        assert_eq!(edwards_to_twisted_edwards(&v.e).unwrap(), v.t);
    }

    #[test]
    fn test_non_square_is_unsupported() {
        let f = PrimeField::from_u64(101).unwrap();
        // 1/2 is not a square mod 101
        let t = TwistedEdwards::new(f.element(2u32), f.element(3u32)).unwrap();
        assert_eq!(twisted_edwards_to_edwards(&t), Err(Edge::new(T, E).unsupported()));
        // b / (a + 2) = 2
        let m = Montgomery::new(f.zero(), f.element(4u32)).unwrap();
        assert_eq!(montgomery_to_edwards(&m), Err(Edge::new(M, E).unsupported()));
    }
}
