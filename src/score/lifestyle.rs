use super::{sanitize, BASELINE};
use crate::types::property::PropertyData;

/// Quiet units help, loud ones hurt; the downside is capped at -3.
const NOISE_FACTOR: f64 = 0.8;
const NOISE_PENALTY_FLOOR: f64 = -3.0;

pub fn lifestyle_score(property: &PropertyData) -> f64 {
    let mut score = BASELINE;
    if let Some(noise) = property.noise_level {
        score += ((5.0 - noise) * NOISE_FACTOR).max(NOISE_PENALTY_FLOOR);
    }
    if property.pet_friendly == Some(true) {
        score += 1.0;
    }
    sanitize(score)
}
