//! Birational equivalences between the four curve models.
//!
//! Every directed pair of forms has a parameter map, turning a curve into
//! the equivalent curve of the target form, and a point map. Dispatch is a
//! plain `match` over the source variant and target form.

mod params;
mod points;
mod roots;

use core::fmt::{self, Display, Formatter};

use log::debug;

use crate::curve::Curve;
use crate::errors::CurveError;
use crate::form::CurveForm;
use crate::point::Point;
use crate::projective::Projective;

pub use params::{
    edwards_to_montgomery, edwards_to_short_weierstrass, edwards_to_twisted_edwards,
    montgomery_to_edwards, montgomery_to_short_weierstrass, montgomery_to_twisted_edwards,
    short_weierstrass_to_edwards, short_weierstrass_to_montgomery,
    short_weierstrass_to_twisted_edwards, twisted_edwards_to_edwards,
    twisted_edwards_to_montgomery, twisted_edwards_to_short_weierstrass,
};
pub use points::{
    edwards_to_montgomery_point, edwards_to_short_weierstrass_point,
    edwards_to_twisted_edwards_point, montgomery_to_edwards_point,
    montgomery_to_short_weierstrass_point, montgomery_to_twisted_edwards_point,
    short_weierstrass_to_edwards_point, short_weierstrass_to_montgomery_point,
    short_weierstrass_to_twisted_edwards_point, twisted_edwards_to_edwards_point,
    twisted_edwards_to_montgomery_point, twisted_edwards_to_short_weierstrass_point,
};
pub use roots::{alpha_s_candidates, find_alpha_s, AlphaS};

/// A directed pair of forms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: CurveForm,
    pub to: CurveForm,
}

impl Edge {
    pub const fn new(from: CurveForm, to: CurveForm) -> Self {
        Edge { from, to }
    }

    pub fn reverse(&self) -> Edge {
        Edge::new(self.to, self.from)
    }

    pub fn unsupported(&self) -> CurveError {
        CurveError::UnsupportedForm {
            from: self.from,
            to: self.to,
        }
    }

    pub fn exceptional(&self) -> CurveError {
        CurveError::ExceptionalPoint {
            from: self.from,
            to: self.to,
        }
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// The equivalent curve of form `to`. The same form maps to itself.
pub(crate) fn map_params(curve: &Curve, to: CurveForm) -> Result<Curve, CurveError> {
    use CurveForm as F;

    Ok(match (curve, to) {
        (Curve::ShortWeierstrass(c), F::Montgomery) => short_weierstrass_to_montgomery(c)?.into(),
        (Curve::ShortWeierstrass(c), F::TwistedEdwards) => {
            short_weierstrass_to_twisted_edwards(c)?.into()
        }
        (Curve::ShortWeierstrass(c), F::Edwards) => short_weierstrass_to_edwards(c)?.into(),
        (Curve::Montgomery(c), F::ShortWeierstrass) => montgomery_to_short_weierstrass(c)?.into(),
        (Curve::Montgomery(c), F::TwistedEdwards) => montgomery_to_twisted_edwards(c)?.into(),
        (Curve::Montgomery(c), F::Edwards) => montgomery_to_edwards(c)?.into(),
        (Curve::TwistedEdwards(c), F::ShortWeierstrass) => {
            twisted_edwards_to_short_weierstrass(c)?.into()
        }
        (Curve::TwistedEdwards(c), F::Montgomery) => twisted_edwards_to_montgomery(c)?.into(),
        (Curve::TwistedEdwards(c), F::Edwards) => twisted_edwards_to_edwards(c)?.into(),
        (Curve::Edwards(c), F::ShortWeierstrass) => edwards_to_short_weierstrass(c)?.into(),
        (Curve::Edwards(c), F::Montgomery) => edwards_to_montgomery(c)?.into(),
        (Curve::Edwards(c), F::TwistedEdwards) => edwards_to_twisted_edwards(c)?.into(),
        (Curve::ShortWeierstrass(_), F::ShortWeierstrass)
        | (Curve::Montgomery(_), F::Montgomery)
        | (Curve::TwistedEdwards(_), F::TwistedEdwards)
        | (Curve::Edwards(_), F::Edwards) => curve.clone(),
    })
}

/// Image of `point` on `domain` under the map to `codomain`. Between two
/// curves of the same form the map is the identity.
pub(crate) fn map_point(
    domain: &Curve,
    point: &Projective,
    codomain: &Curve,
) -> Result<Projective, CurveError> {
    use Curve as C;

    match (domain, codomain) {
        (C::ShortWeierstrass(s), C::Montgomery(t)) => short_weierstrass_to_montgomery_point(s, point, t),
        (C::ShortWeierstrass(s), C::TwistedEdwards(t)) => {
            short_weierstrass_to_twisted_edwards_point(s, point, t)
        }
        (C::ShortWeierstrass(s), C::Edwards(t)) => short_weierstrass_to_edwards_point(s, point, t),
        (C::Montgomery(s), C::ShortWeierstrass(t)) => montgomery_to_short_weierstrass_point(s, point, t),
        (C::Montgomery(s), C::TwistedEdwards(t)) => montgomery_to_twisted_edwards_point(s, point, t),
        (C::Montgomery(s), C::Edwards(t)) => montgomery_to_edwards_point(s, point, t),
        (C::TwistedEdwards(s), C::ShortWeierstrass(t)) => {
            twisted_edwards_to_short_weierstrass_point(s, point, t)
        }
        (C::TwistedEdwards(s), C::Montgomery(t)) => twisted_edwards_to_montgomery_point(s, point, t),
        (C::TwistedEdwards(s), C::Edwards(t)) => twisted_edwards_to_edwards_point(s, point, t),
        (C::Edwards(s), C::ShortWeierstrass(t)) => edwards_to_short_weierstrass_point(s, point, t),
        (C::Edwards(s), C::Montgomery(t)) => edwards_to_montgomery_point(s, point, t),
        (C::Edwards(s), C::TwistedEdwards(t)) => edwards_to_twisted_edwards_point(s, point, t),
        (C::ShortWeierstrass(_), C::ShortWeierstrass(_))
        | (C::Montgomery(_), C::Montgomery(_))
        | (C::TwistedEdwards(_), C::TwistedEdwards(_))
        | (C::Edwards(_), C::Edwards(_)) => Ok(point.clone()),
    }
}

/// A birational map from one curve to an equivalent curve.
///
/// The target curve is fixed when the map is built, and with it the root
/// `(alpha, s, t)` used by maps out of the Weierstrass model; every point
/// goes through that same choice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BirationalMap {
    domain: Curve,
    codomain: Curve,
}

impl BirationalMap {
    /// The map from `domain` to its equivalent curve of form `to`.
    pub fn new(domain: &Curve, to: CurveForm) -> Result<Self, CurveError> {
        let codomain = map_params(domain, to)?;
        debug!("{}: {} ~ {}", Edge::new(domain.form(), to), domain, codomain);
        Ok(BirationalMap {
            domain: domain.clone(),
            codomain,
        })
    }

    /// The map between two given curves, which must share a field. Points
    /// whose image is not on `codomain` fail with `NotOnCurve`.
    pub fn between(domain: &Curve, codomain: &Curve) -> Result<Self, CurveError> {
        if domain.field() != codomain.field() {
            return Err(CurveError::CurveMismatch);
        }
        Ok(BirationalMap {
            domain: domain.clone(),
            codomain: codomain.clone(),
        })
    }

    pub fn domain(&self) -> &Curve {
        &self.domain
    }

    pub fn codomain(&self) -> &Curve {
        &self.codomain
    }

    pub fn edge(&self) -> Edge {
        Edge::new(self.domain.form(), self.codomain.form())
    }

    /// The map in the other direction, back onto this map's domain.
    pub fn inverse(&self) -> BirationalMap {
        BirationalMap {
            domain: self.codomain.clone(),
            codomain: self.domain.clone(),
        }
    }

    pub fn map(&self, point: &Point) -> Result<Point, CurveError> {
        if point.curve() != &self.domain {
            return Err(CurveError::CurveMismatch);
        }
        let coords = point.coordinates().normalize();
        let image = map_point(&self.domain, &coords, &self.codomain)?;
        self.codomain.projective_point(image.x, image.y, image.z)
    }
}

impl Curve {
    /// The map from this curve to its equivalent of form `to`.
    pub fn map_to(&self, to: CurveForm) -> Result<BirationalMap, CurveError> {
        BirationalMap::new(self, to)
    }
}
