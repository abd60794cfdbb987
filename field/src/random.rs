use num_bigint::BigUint;
use rand::Rng;

use crate::element::FieldElement;
use crate::prime::PrimeField;

// Extra bytes sampled beyond the modulus width so the reduction bias is
// below 2^-128.
const SAMPLE_SLACK_BYTES: usize = 16;

impl PrimeField {
    /// Sample a uniformly random element.
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> FieldElement {
        let width = (self.modulus().bits() as usize).div_ceil(8) + SAMPLE_SLACK_BYTES;
        let mut bytes = vec![0u8; width];
        rng.fill(&mut bytes[..]);
        self.element(BigUint::from_bytes_le(&bytes))
    }

    /// Sample a uniformly random non-zero element.
    pub fn random_nonzero<R: Rng + ?Sized>(&self, rng: &mut R) -> FieldElement {
        loop {
            let candidate = self.random(rng);
            if !candidate.is_zero() {
                return candidate;
            }
        }
    }
}
