use core::fmt::{self, Display, Formatter};

use field::{BigUint, FieldElement, PrimeField};

use crate::affine::Affine;
use crate::birational;
use crate::edwards::Edwards;
use crate::errors::CurveError;
use crate::form::CurveForm;
use crate::group::CurveModel;
use crate::montgomery::Montgomery;
use crate::point::Point;
use crate::points::Points;
use crate::projective::Projective;
use crate::twisted_edwards::TwistedEdwards;
use crate::weierstrass::ShortWeierstrass;

/// Run `$body` with `$model` bound to the model inside any variant.
macro_rules! dispatch {
    ($curve:expr, $model:ident => $body:expr) => {
        match $curve {
            Curve::ShortWeierstrass($model) => $body,
            Curve::Montgomery($model) => $body,
            Curve::TwistedEdwards($model) => $body,
            Curve::Edwards($model) => $body,
        }
    };
}

/// An elliptic curve in one of the four supported models.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Curve {
    ShortWeierstrass(ShortWeierstrass),
    Montgomery(Montgomery),
    TwistedEdwards(TwistedEdwards),
    Edwards(Edwards),
}

impl Curve {
    /// Build a curve of the given form from its two parameters, in the order
    /// `(a, b)`, `(a, b)`, `(a, d)` or `(c, d)`.
    pub fn from_params(
        form: CurveForm,
        p1: FieldElement,
        p2: FieldElement,
    ) -> Result<Curve, CurveError> {
        Ok(match form {
            CurveForm::ShortWeierstrass => ShortWeierstrass::new(p1, p2)?.into(),
            CurveForm::Montgomery => Montgomery::new(p1, p2)?.into(),
            CurveForm::TwistedEdwards => TwistedEdwards::new(p1, p2)?.into(),
            CurveForm::Edwards => Edwards::new(p1, p2)?.into(),
        })
    }

    pub fn form(&self) -> CurveForm {
        match self {
            Curve::ShortWeierstrass(_) => CurveForm::ShortWeierstrass,
            Curve::Montgomery(_) => CurveForm::Montgomery,
            Curve::TwistedEdwards(_) => CurveForm::TwistedEdwards,
            Curve::Edwards(_) => CurveForm::Edwards,
        }
    }

    pub fn field(&self) -> &PrimeField {
        dispatch!(self, model => model.field())
    }

    pub fn params(&self) -> (&FieldElement, &FieldElement) {
        dispatch!(self, model => model.params())
    }

    /// The affine point `(x, y)`.
    pub fn point(&self, x: FieldElement, y: FieldElement) -> Result<Point, CurveError> {
        let one = self.field().one();
        self.projective_point(x, y, one)
    }

    /// The point `(X:Y:Z)`. Stored with `z = 1`, or as exactly `(0,1,0)`
    /// at infinity.
    pub fn projective_point(
        &self,
        x: FieldElement,
        y: FieldElement,
        z: FieldElement,
    ) -> Result<Point, CurveError> {
        let field = self.field();
        if [&x, &y, &z].iter().any(|c| c.field() != field) {
            return Err(CurveError::CurveMismatch);
        }
        let coords = Projective::new(x, y, z);
        if !self.contains(&coords) {
            return Err(CurveError::NotOnCurve);
        }
        let coords = match coords.to_affine() {
            Some(affine) => Projective::from_affine(&affine),
            None => self.identity_coords(),
        };
        Ok(Point::from_parts(self.clone(), coords))
    }

    /// The neutral element: `(0,1,0)` for the Weierstrass and Montgomery
    /// models, `(0,1,1)` and `(0,c,1)` for the Edwards families.
    pub fn infinity(&self) -> Point {
        Point::from_parts(self.clone(), self.identity_coords())
    }

    pub fn contains(&self, coords: &Projective) -> bool {
        dispatch!(self, model => model.contains(coords))
    }

    /// All points of the curve, lazily. See [`Points`] for the order.
    pub fn points(&self) -> Points {
        Points::new(self.clone())
    }

    /// Number of points, by enumeration.
    pub fn order(&self) -> BigUint {
        BigUint::from(self.points().count())
    }

    /// The same curve written in another model.
    pub fn to_form(&self, form: CurveForm) -> Result<Curve, CurveError> {
        birational::map_params(self, form)
    }

    pub(crate) fn identity_coords(&self) -> Projective {
        dispatch!(self, model => model.identity())
    }

    pub(crate) fn is_identity_coords(&self, coords: &Projective) -> bool {
        dispatch!(self, model => model.is_identity(coords))
    }

    pub(crate) fn negate_coords(&self, coords: &Projective) -> Projective {
        dispatch!(self, model => model.negate(coords))
    }

    pub(crate) fn add_coords(
        &self,
        p: &Projective,
        q: &Projective,
    ) -> Result<Projective, CurveError> {
        dispatch!(self, model => model.add(p, q))
    }

    pub(crate) fn double_coords(&self, p: &Projective) -> Result<Projective, CurveError> {
        dispatch!(self, model => model.double(p))
    }

    pub(crate) fn scalar_mul_coords(
        &self,
        p: &Projective,
        scalar: &BigUint,
    ) -> Result<Projective, CurveError> {
        dispatch!(self, model => model.scalar_mul(p, scalar))
    }

    pub(crate) fn lift(&self, t: &FieldElement) -> Vec<Affine> {
        dispatch!(self, model => model.lift(t))
    }
}

impl From<ShortWeierstrass> for Curve {
    fn from(curve: ShortWeierstrass) -> Self {
        Curve::ShortWeierstrass(curve)
    }
}

impl From<Montgomery> for Curve {
    fn from(curve: Montgomery) -> Self {
        Curve::Montgomery(curve)
    }
}

impl From<TwistedEdwards> for Curve {
    fn from(curve: TwistedEdwards) -> Self {
        Curve::TwistedEdwards(curve)
    }
}

impl From<Edwards> for Curve {
    fn from(curve: Edwards) -> Self {
        Curve::Edwards(curve)
    }
}

impl Display for Curve {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        dispatch!(self, model => Display::fmt(model, f))
    }
}
