//! Point maps: the point-level half of each directed edge.
//!
//! Each map takes the source curve, a point on it and the target curve the
//! matching parameter map produced. Maps out of the Weierstrass model read
//! the `(alpha, s)` they need back off the target parameters, so a point is
//! always sent with the same root that built the target curve.
//!
//! The identity goes to the identity, and the point of order two at the
//! Montgomery origin `(0, 0)` corresponds to `(alpha, 0)`, `(0, -1)` and
//! `(0, -c)` in the other models. Any other vanishing denominator is an
//! [`CurveError::ExceptionalPoint`].

use field::FieldElement;

use crate::affine::Affine;
use crate::edwards::Edwards;
use crate::errors::CurveError;
use crate::form::CurveForm::{
    Edwards as E, Montgomery as M, ShortWeierstrass as W, TwistedEdwards as T,
};
use crate::group::CurveModel;
use crate::montgomery::Montgomery;
use crate::projective::Projective;
use crate::sqrt::canonical_sqrt;
use crate::twisted_edwards::TwistedEdwards;
use crate::weierstrass::ShortWeierstrass;

use super::roots::AlphaS;
use super::Edge;

fn div(num: &FieldElement, den: &FieldElement, edge: Edge) -> Result<FieldElement, CurveError> {
    num.checked_div(den).map_err(|_| edge.exceptional())
}

fn int(x: &FieldElement, n: i64) -> FieldElement {
    x.field().element_from_i64(n)
}

fn affine(point: &Projective, edge: Edge) -> Result<Affine, CurveError> {
    point.to_affine().ok_or(edge.exceptional())
}

fn finite(x: FieldElement, y: FieldElement) -> Projective {
    Projective::from_affine(&Affine::new(x, y))
}

/// `alpha = A / (3B)`, `s = B`.
fn montgomery_alpha_s(target: &Montgomery, edge: Edge) -> Result<AlphaS, CurveError> {
    let (a, b) = (target.a(), target.b());
    let alpha = a
        .checked_div(&(&int(a, 3) * b))
        .map_err(|_| edge.unsupported())?;
    Ok(AlphaS { alpha, s: b.clone() })
}

/// `alpha = (A + D) / 6`, `s = 4 / (A - D)`.
fn twisted_edwards_alpha_s(target: &TwistedEdwards, edge: Edge) -> Result<AlphaS, CurveError> {
    let (a, d) = (target.a(), target.d());
    let alpha = (a + d)
        .checked_div(&int(a, 6))
        .map_err(|_| edge.unsupported())?;
    let s = int(a, 4)
        .checked_div(&(a - d))
        .map_err(|_| edge.unsupported())?;
    Ok(AlphaS { alpha, s })
}

/// `s = 1 / sqrt(-3a - D)`, `alpha = (1 / C^2 - 2 / s) / 3`.
fn edwards_alpha_s(
    source: &ShortWeierstrass,
    target: &Edwards,
    edge: Edge,
) -> Result<AlphaS, CurveError> {
    let a = source.a();
    let (c, d) = (target.c(), target.d());
    let slope = &-(&int(a, 3) * a) - d;
    let s = canonical_sqrt(&slope)
        .and_then(|root| root.inverse().map_err(|_| CurveError::NoSquareRoot))
        .map_err(|_| edge.unsupported())?;
    let inv_c2 = c.square().inverse().map_err(|_| edge.unsupported())?;
    let two_over_s = div(&int(a, 2), &s, edge)?;
    let alpha = div(&(&inv_c2 - &two_over_s), &int(a, 3), edge)?;
    Ok(AlphaS { alpha, s })
}

/// `(x, y) -> (s (x - alpha), s y)`
pub fn short_weierstrass_to_montgomery_point(
    source: &ShortWeierstrass,
    point: &Projective,
    target: &Montgomery,
) -> Result<Projective, CurveError> {
    let edge = Edge::new(W, M);
    if source.is_identity(point) {
        return Ok(target.identity());
    }
    let Affine { x, y } = affine(point, edge)?;
    let AlphaS { alpha, s } = montgomery_alpha_s(target, edge)?;
    Ok(finite(&s * &(&x - &alpha), &s * &y))
}

/// `(x, y) -> ((3x + A) / (3B), y / B)`
pub fn montgomery_to_short_weierstrass_point(
    source: &Montgomery,
    point: &Projective,
    target: &ShortWeierstrass,
) -> Result<Projective, CurveError> {
    let edge = Edge::new(M, W);
    if source.is_identity(point) {
        return Ok(target.identity());
    }
    let Affine { x, y } = affine(point, edge)?;
    let (a, b) = (source.a(), source.b());
    let u = div(&(&(&int(a, 3) * &x) + a), &(&int(a, 3) * b), edge)?;
    let v = div(&y, b, edge)?;
    Ok(finite(u, v))
}

/// `(x, y) -> ((x - alpha) / y, (s (x - alpha) - 1) / (s (x - alpha) + 1))`
pub fn short_weierstrass_to_twisted_edwards_point(
    source: &ShortWeierstrass,
    point: &Projective,
    target: &TwistedEdwards,
) -> Result<Projective, CurveError> {
    let edge = Edge::new(W, T);
    if source.is_identity(point) {
        return Ok(target.identity());
    }
    let Affine { x, y } = affine(point, edge)?;
    let AlphaS { alpha, s } = twisted_edwards_alpha_s(target, edge)?;
    let one = int(&x, 1);
    if x == alpha && y.is_zero() {
        return Ok(finite(x.field().zero(), -one));
    }
    let shifted = &x - &alpha;
    let scaled = &s * &shifted;
    let u = div(&shifted, &y, edge)?;
    let v = div(&(&scaled - &one), &(&scaled + &one), edge)?;
    Ok(finite(u, v))
}

/// `(x, y) -> ((5A + Ay - 5Dy - D) / (12 - 12y), (A + Ay - Dy - D) / (4x - 4xy))`
pub fn twisted_edwards_to_short_weierstrass_point(
    source: &TwistedEdwards,
    point: &Projective,
    target: &ShortWeierstrass,
) -> Result<Projective, CurveError> {
    let edge = Edge::new(T, W);
    if source.is_identity(point) {
        return Ok(target.identity());
    }
    let Affine { x, y } = affine(point, edge)?;
    let (a, d) = (source.a(), source.d());
    let ay = a * &y;
    let dy = d * &y;
    let u = div(
        &(&(&(&(&int(a, 5) * a) + &ay) - &(&int(a, 5) * &dy)) - d),
        &(&int(a, 12) - &(&int(a, 12) * &y)),
        edge,
    )?;
    if x.is_zero() {
        // (0, -1) is the point of order two
        return Ok(finite(u, x));
    }
    let v = div(
        &(&(&(a + &ay) - &dy) - d),
        &(&(&int(a, 4) * &x) - &(&(&int(a, 4) * &x) * &y)),
        edge,
    )?;
    Ok(finite(u, v))
}

/// `(x, y) -> (x / y, (x - 1) / (x + 1))`
pub fn montgomery_to_twisted_edwards_point(
    source: &Montgomery,
    point: &Projective,
    target: &TwistedEdwards,
) -> Result<Projective, CurveError> {
    let edge = Edge::new(M, T);
    if source.is_identity(point) {
        return Ok(target.identity());
    }
    let Affine { x, y } = affine(point, edge)?;
    let one = int(&x, 1);
    if x.is_zero() && y.is_zero() {
        return Ok(finite(x, -one));
    }
    let u = div(&x, &y, edge)?;
    let v = div(&(&x - &one), &(&x + &one), edge)?;
    Ok(finite(u, v))
}

/// `(x, y) -> ((1 + y) / (1 - y), (1 + y) / ((1 - y) x))`
pub fn twisted_edwards_to_montgomery_point(
    source: &TwistedEdwards,
    point: &Projective,
    target: &Montgomery,
) -> Result<Projective, CurveError> {
    let edge = Edge::new(T, M);
    if source.is_identity(point) {
        return Ok(target.identity());
    }
    let Affine { x, y } = affine(point, edge)?;
    if x.is_zero() {
        // (0, -1) is the point of order two
        return Ok(finite(x.clone(), x));
    }
    let one = int(&x, 1);
    let num = &one + &y;
    let den = &one - &y;
    let u = div(&num, &den, edge)?;
    let v = div(&num, &(&den * &x), edge)?;
    Ok(finite(u, v))
}

/// `(x, y) -> (x, C y)`
pub fn twisted_edwards_to_edwards_point(
    _source: &TwistedEdwards,
    point: &Projective,
    target: &Edwards,
) -> Result<Projective, CurveError> {
    let edge = Edge::new(T, E);
    let Affine { x, y } = affine(point, edge)?;
    Ok(finite(x, &y * target.c()))
}

/// `(x, y) -> (x, y / C)`
pub fn edwards_to_twisted_edwards_point(
    source: &Edwards,
    point: &Projective,
    _target: &TwistedEdwards,
) -> Result<Projective, CurveError> {
    let edge = Edge::new(E, T);
    let Affine { x, y } = affine(point, edge)?;
    let v = div(&y, source.c(), edge)?;
    Ok(finite(x, v))
}

/// `(x, y) -> ((5C + y - 5C^4 d y - C^5 d) / (12C^3 - 12 y C^2),
/// (C + y - d y C^4 - C^5 d) / (4x C^3 - 4x y C^2))`
pub fn edwards_to_short_weierstrass_point(
    source: &Edwards,
    point: &Projective,
    target: &ShortWeierstrass,
) -> Result<Projective, CurveError> {
    let edge = Edge::new(E, W);
    if source.is_identity(point) {
        return Ok(target.identity());
    }
    let Affine { x, y } = affine(point, edge)?;
    let (c, d) = (source.c(), source.d());
    let c2 = c.square();
    let c3 = &c2 * c;
    let c4d = &c.pow(4) * d;
    let c5d = &c4d * c;
    let c4dy = &c4d * &y;

    let u = div(
        &(&(&(&(&int(c, 5) * c) + &y) - &(&int(c, 5) * &c4dy)) - &c5d),
        &(&(&int(c, 12) * &c3) - &(&(&int(c, 12) * &y) * &c2)),
        edge,
    )?;
    if x.is_zero() {
        // (0, -c) is the point of order two
        return Ok(finite(u, x));
    }
    let v = div(
        &(&(&(c + &y) - &c4dy) - &c5d),
        &(&(&(&int(c, 4) * &x) * &c3) - &(&(&(&int(c, 4) * &x) * &y) * &c2)),
        edge,
    )?;
    Ok(finite(u, v))
}

/// `(x, y) -> ((x - alpha) / y, t (s (x - alpha) - 1) / (s (x - alpha) + 1))`
pub fn short_weierstrass_to_edwards_point(
    source: &ShortWeierstrass,
    point: &Projective,
    target: &Edwards,
) -> Result<Projective, CurveError> {
    let edge = Edge::new(W, E);
    if source.is_identity(point) {
        return Ok(target.identity());
    }
    let Affine { x, y } = affine(point, edge)?;
    let AlphaS { alpha, s } = edwards_alpha_s(source, target, edge)?;
    let c = target.c();
    if x == alpha && y.is_zero() {
        return Ok(finite(x.field().zero(), -c));
    }
    let one = int(&x, 1);
    let shifted = &x - &alpha;
    let scaled = &s * &shifted;
    let u = div(&shifted, &y, edge)?;
    let v = &div(&(&scaled - &one), &(&scaled + &one), edge)? * c;
    Ok(finite(u, v))
}

/// `(x, y) -> (x / y, C (x - 1) / (x + 1))`
pub fn montgomery_to_edwards_point(
    source: &Montgomery,
    point: &Projective,
    target: &Edwards,
) -> Result<Projective, CurveError> {
    let edge = Edge::new(M, E);
    if source.is_identity(point) {
        return Ok(target.identity());
    }
    let Affine { x, y } = affine(point, edge)?;
    let c = target.c();
    if x.is_zero() && y.is_zero() {
        return Ok(finite(x, -c));
    }
    let one = int(&x, 1);
    let u = div(&x, &y, edge)?;
    let v = &div(&(&x - &one), &(&x + &one), edge)? * c;
    Ok(finite(u, v))
}

/// `(x, y) -> ((C + y) / (C - y), (C + y) / ((C - y) x))`
pub fn edwards_to_montgomery_point(
    source: &Edwards,
    point: &Projective,
    target: &Montgomery,
) -> Result<Projective, CurveError> {
    let edge = Edge::new(E, M);
    if source.is_identity(point) {
        return Ok(target.identity());
    }
    let Affine { x, y } = affine(point, edge)?;
    if x.is_zero() {
        // (0, -c) is the point of order two
        return Ok(finite(x.clone(), x));
    }
    let c = source.c();
    let num = c + &y;
    let den = c - &y;
    let u = div(&num, &den, edge)?;
    let v = div(&num, &(&den * &x), edge)?;
    Ok(finite(u, v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use field::PrimeField;

    struct Fixture {
        w: ShortWeierstrass,
        m: Montgomery,
        t: TwistedEdwards,
        e: Edwards,
    }

    // y^2 = x^3 + 866x + 208 over F_1009 and its three other models.
    fn fixture() -> Fixture {
        let f = PrimeField::from_u64(1009).unwrap();
        Fixture {
            w: ShortWeierstrass::new(f.element(866u32), f.element(208u32)).unwrap(),
            m: Montgomery::new(f.element(32u32), f.element(733u32)).unwrap(),
            t: TwistedEdwards::new(f.element(519u32), f.element(636u32)).unwrap(),
            e: Edwards::new(f.element(480u32), f.element(141u32)).unwrap(),
        }
    }

    fn pt(model: &impl CurveModel, x: u32, y: u32) -> Projective {
        let field = model.field();
        finite(field.element(x), field.element(y))
    }

    #[test]
    fn test_weierstrass_images() {
        let v = fixture();
        let p = pt(&v.w, 353, 449);
        assert_eq!(
            short_weierstrass_to_montgomery_point(&v.w, &p, &v.m).unwrap(),
            pt(&v.m, 98, 183)
        );
        assert_eq!(
            short_weierstrass_to_twisted_edwards_point(&v.w, &p, &v.t).unwrap(),
            pt(&v.t, 188, 480)
        );
        assert_eq!(
            short_weierstrass_to_edwards_point(&v.w, &p, &v.e).unwrap(),
            pt(&v.e, 188, 348)
        );
    }

    #[test]
    fn test_images_back_to_weierstrass() {
        let v = fixture();
        let r = pt(&v.w, 542, 665);
        assert_eq!(
            montgomery_to_short_weierstrass_point(&v.m, &pt(&v.m, 402, 98), &v.w).unwrap(),
            r
        );
        assert_eq!(
            twisted_edwards_to_short_weierstrass_point(&v.t, &pt(&v.t, 766, 677), &v.w).unwrap(),
            r
        );
        assert_eq!(
            edwards_to_short_weierstrass_point(&v.e, &pt(&v.e, 766, 62), &v.w).unwrap(),
            r
        );
    }

    #[test]
    fn test_between_edwards_families_and_montgomery() {
        let v = fixture();
        let q_m = pt(&v.m, 915, 626);
        let q_t = pt(&v.t, 593, 435);
        let q_e = pt(&v.e, 593, 946);
        assert_eq!(montgomery_to_twisted_edwards_point(&v.m, &q_m, &v.t).unwrap(), q_t);
        assert_eq!(twisted_edwards_to_montgomery_point(&v.t, &q_t, &v.m).unwrap(), q_m);
        assert_eq!(montgomery_to_edwards_point(&v.m, &q_m, &v.e).unwrap(), q_e);
        assert_eq!(edwards_to_montgomery_point(&v.e, &q_e, &v.m).unwrap(), q_m);
        assert_eq!(twisted_edwards_to_edwards_point(&v.t, &q_t, &v.e).unwrap(), q_e);
        assert_eq!(edwards_to_twisted_edwards_point(&v.e, &q_e, &v.t).unwrap(), q_t);
    }

    #[test]
    fn test_identity_maps_to_identity() {
        let v = fixture();
        let inf = v.w.identity();
        assert_eq!(
            short_weierstrass_to_edwards_point(&v.w, &inf, &v.e).unwrap(),
            v.e.identity()
        );
        assert_eq!(
            twisted_edwards_to_short_weierstrass_point(&v.t, &v.t.identity(), &v.w).unwrap(),
            inf
        );
        assert_eq!(
            edwards_to_montgomery_point(&v.e, &v.e.identity(), &v.m).unwrap(),
            v.m.identity()
        );
        assert_eq!(
            edwards_to_twisted_edwards_point(&v.e, &v.e.identity(), &v.t).unwrap(),
            v.t.identity()
        );
    }

    #[test]
    fn test_order_two_point() {
        let v = fixture();
        let origin = pt(&v.m, 0, 0);
        let t_two = pt(&v.t, 0, 1008);
        let e_two = pt(&v.e, 0, 1009 - 480);
        let w_two = pt(&v.w, 697, 0);

        assert_eq!(montgomery_to_twisted_edwards_point(&v.m, &origin, &v.t).unwrap(), t_two);
        assert_eq!(montgomery_to_edwards_point(&v.m, &origin, &v.e).unwrap(), e_two);
        assert_eq!(montgomery_to_short_weierstrass_point(&v.m, &origin, &v.w).unwrap(), w_two);
        assert_eq!(twisted_edwards_to_montgomery_point(&v.t, &t_two, &v.m).unwrap(), origin);
        assert_eq!(edwards_to_montgomery_point(&v.e, &e_two, &v.m).unwrap(), origin);
        assert_eq!(twisted_edwards_to_short_weierstrass_point(&v.t, &t_two, &v.w).unwrap(), w_two);
        assert_eq!(edwards_to_short_weierstrass_point(&v.e, &e_two, &v.w).unwrap(), w_two);
        assert_eq!(short_weierstrass_to_montgomery_point(&v.w, &w_two, &v.m).unwrap(), origin);
        assert_eq!(short_weierstrass_to_twisted_edwards_point(&v.w, &w_two, &v.t).unwrap(), t_two);
        assert_eq!(short_weierstrass_to_edwards_point(&v.w, &w_two, &v.e).unwrap(), e_two);
    }

    #[test]
    fn test_exceptional_point() {
        let f = PrimeField::from_u64(101).unwrap();
        // (a - 2) / b = 4 is a square, so x = -1 is on the curve and
        // (x - 1) / (x + 1) has no finite value
        let m = Montgomery::new(f.element(6u32), f.one()).unwrap();
        let t = TwistedEdwards::new(f.element(8u32), f.element(4u32)).unwrap();
        let p = pt(&m, 100, 2);
        assert!(m.contains(&p));
        assert_eq!(
            montgomery_to_twisted_edwards_point(&m, &p, &t),
            Err(Edge::new(M, T).exceptional())
        );
    }
}
