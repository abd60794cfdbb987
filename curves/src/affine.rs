use core::fmt::{self, Display, Formatter};

use field::FieldElement;

/// A bare affine coordinate pair `(x, y)`, not tied to any curve.
///
/// This is what the group laws and the birational point maps compute with;
/// [`crate::Point`] adds the curve and the validation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Affine {
    pub x: FieldElement,
    pub y: FieldElement,
}

impl Affine {
    pub fn new(x: FieldElement, y: FieldElement) -> Self {
        Affine { x, y }
    }
}

impl Display for Affine {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
