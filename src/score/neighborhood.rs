use super::sanitize;
use crate::types::property::PropertyData;

/// Thin proxy for neighborhood character: bike infrastructure coverage.
pub fn neighborhood_score(property: &PropertyData) -> f64 {
    let bike = property.bike_score.unwrap_or(50.0).clamp(0.0, 100.0);
    sanitize(bike / 10.0)
}
