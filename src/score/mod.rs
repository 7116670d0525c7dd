pub mod amenities;
pub mod building;
pub mod lifestyle;
pub mod location;
pub mod market;
pub mod neighborhood;
pub mod price_value;
pub mod schools;
pub mod tables;

use crate::types::breakdown::ScoreBreakdown;
use crate::types::property::PropertyData;
use crate::types::weights::{ScoringContext, ScoringWeights};

pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 10.0;
pub const BASELINE: f64 = 5.0;

/// Clamp a raw sub-score into the 1-10 band. Non-finite intermediates
/// (zero square footage, zero price, degenerate bands) collapse to the
/// neutral baseline instead of poisoning the weighted sum.
pub(crate) fn sanitize(score: f64) -> f64 {
    if !score.is_finite() {
        return BASELINE;
    }
    score.clamp(MIN_SCORE, MAX_SCORE)
}

fn round_tenth(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}

/// Score a listing with the default bands and reference year.
pub fn compute_score(property: &PropertyData, weights: &ScoringWeights) -> ScoreBreakdown {
    compute_score_with(property, weights, &ScoringContext::default())
}

/// Score a listing. Sub-scores enter the weighted sum at full precision;
/// rounding happens only at the output boundary.
pub fn compute_score_with(
    property: &PropertyData,
    weights: &ScoringWeights,
    context: &ScoringContext,
) -> ScoreBreakdown {
    let price_value = price_value::price_value_score(property, context);
    let location = location::location_score(property);
    let schools = schools::schools_score(property);
    let building = building::building_score(property, context.as_of_year);
    let amenities = amenities::amenities_score(property);
    let neighborhood = neighborhood::neighborhood_score(property);
    let market_context = market::market_context_score(property);
    let lifestyle = lifestyle::lifestyle_score(property);

    let weighted = price_value * weights.price_value
        + location * weights.location
        + schools * weights.schools
        + building * weights.building
        + amenities * weights.amenities
        + neighborhood * weights.neighborhood
        + market_context * weights.market_context
        + lifestyle * weights.lifestyle;
    let overall = sanitize(weighted.round()) as u8;

    ScoreBreakdown {
        overall,
        price_value: round_tenth(price_value),
        location: round_tenth(location),
        schools: round_tenth(schools),
        building: round_tenth(building),
        amenities: round_tenth(amenities),
        neighborhood: round_tenth(neighborhood),
        market_context: round_tenth(market_context),
        lifestyle: round_tenth(lifestyle),
    }
}
