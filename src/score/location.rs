use super::sanitize;
use crate::types::property::PropertyData;

const DEFAULT_ACTIVITY_SCORE: f64 = 50.0;
const DEFAULT_SAFETY_SCORE: f64 = 6.0;
const NEUTRAL_PROXIMITY: f64 = 5.0;

/// Park access decays a half point per minute, subway access a full point.
const PARK_DECAY: f64 = 0.5;
const SUBWAY_DECAY: f64 = 1.0;

pub fn location_score(property: &PropertyData) -> f64 {
    let walk = activity_score(property.walk_score);
    let transit = activity_score(property.transit_score);
    let bike = activity_score(property.bike_score);
    let park = proximity_score(property.proximity_to_park, PARK_DECAY);
    let subway = proximity_score(property.proximity_to_subway, SUBWAY_DECAY);
    let safety = property
        .safety_score
        .unwrap_or(DEFAULT_SAFETY_SCORE)
        .clamp(1.0, 10.0);

    let blended = walk * 0.30
        + transit * 0.30
        + bike * 0.10
        + park * 0.10
        + subway * 0.10
        + safety * 0.10;
    sanitize(blended)
}

/// Walk/transit/bike scores arrive on a 0-100 scale; treat them as
/// percentages of the 0-10 band.
fn activity_score(score: Option<f64>) -> f64 {
    score.unwrap_or(DEFAULT_ACTIVITY_SCORE).clamp(0.0, 100.0) / 10.0
}

fn proximity_score(minutes: Option<f64>, decay: f64) -> f64 {
    match minutes {
        Some(minutes) => (10.0 - minutes * decay).clamp(0.0, 10.0),
        None => NEUTRAL_PROXIMITY,
    }
}
