use std::vec;

use field::Elements;

use crate::affine::Affine;
use crate::curve::Curve;
use crate::point::Point;
use crate::projective::Projective;

/// Iterator over every point of a curve, see [`Curve::points`].
///
/// For the Weierstrass and Montgomery models the point at infinity comes
/// first, followed by `(x, r)` and `(x, -r)` for each `x` in ascending order,
/// `r` the canonical root. For the Edwards families the field is walked by
/// `y` instead and the identity shows up in its place in that order.
/// The sequence is finite; call [`Curve::points`] again to restart it.
#[derive(Clone, Debug)]
pub struct Points {
    curve: Curve,
    values: Elements,
    infinity: Option<Projective>,
    pending: vec::IntoIter<Affine>,
}

impl Points {
    pub(crate) fn new(curve: Curve) -> Self {
        let infinity = curve
            .form()
            .has_point_at_infinity()
            .then(|| curve.identity_coords());
        let values = curve.field().elements();
        Points {
            curve,
            values,
            infinity,
            pending: Vec::new().into_iter(),
        }
    }
}

impl Iterator for Points {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if let Some(infinity) = self.infinity.take() {
            return Some(Point::from_parts(self.curve.clone(), infinity));
        }
        loop {
            if let Some(affine) = self.pending.next() {
                let coords = Projective::from_affine(&affine);
                return Some(Point::from_parts(self.curve.clone(), coords));
            }
            let t = self.values.next()?;
            self.pending = self.curve.lift(&t).into_iter();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use field::PrimeField;

    use crate::form::CurveForm;

    use super::*;

    #[test]
    fn test_weierstrass_order_of_enumeration() {
        let field = PrimeField::from_u64(101).unwrap();
        let curve =
            Curve::from_params(CurveForm::ShortWeierstrass, field.one(), field.element(2u32)).unwrap();
        let first: Vec<String> = curve.points().take(5).map(|p| p.to_string()).collect();
        assert_eq!(first, ["(0,1,0)", "(1,2,1)", "(1,99,1)", "(4,26,1)", "(4,75,1)"]);
    }

    #[test]
    fn test_twisted_edwards_order_of_enumeration() {
        let field = PrimeField::from_u64(101).unwrap();
        let curve =
            Curve::from_params(CurveForm::TwistedEdwards, field.one(), field.element(94u32)).unwrap();
        let first: Vec<String> = curve.points().take(3).map(|p| p.to_string()).collect();
        assert_eq!(first, ["(1,0,1)", "(100,0,1)", "(0,1,1)"]);
    }

    #[test]
    fn test_points_distinct_and_on_curve() {
        let field = PrimeField::from_u64(101).unwrap();
        let curve = Curve::from_params(CurveForm::Edwards, field.element(36u32), field.element(55u32))
            .unwrap();
        let mut seen = HashSet::new();
        for point in curve.points() {
            assert!(curve.contains(point.coordinates()));
            assert!(seen.insert(point));
        }
        assert_eq!(seen.len(), 104);
        assert_eq!(curve.points().filter(|p| p.is_identity()).count(), 1);
    }

    #[test]
    fn test_restartable() {
        let field = PrimeField::from_u64(13).unwrap();
        let curve =
            Curve::from_params(CurveForm::Montgomery, field.element(3u32), field.one()).unwrap();
        let first: Vec<Point> = curve.points().collect();
        let second: Vec<Point> = curve.points().collect();
        assert_eq!(first, second);
    }
}
