use crate::error::ScoreError;
use crate::types::weights::{Band, ScoringContext, ScoringWeights};
use serde::Deserialize;

/// Parsed `aptscore.toml`. Every table and key is optional; whatever is
/// absent falls back to the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AptConfig {
    pub weights: Option<WeightOverrides>,
    pub bands: Option<BandOverrides>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeightOverrides {
    pub price_value: Option<f64>,
    pub location: Option<f64>,
    pub schools: Option<f64>,
    pub building: Option<f64>,
    pub amenities: Option<f64>,
    pub neighborhood: Option<f64>,
    pub market_context: Option<f64>,
    pub lifestyle: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BandOverrides {
    pub price_per_sqft: Option<Band>,
    pub monthly_cost: Option<Band>,
}

impl AptConfig {
    /// Effective weights after overrides. The set is not normalized: a
    /// configuration that does not sum to 1 rescales the overall band,
    /// which is allowed.
    pub fn weights(&self) -> ScoringWeights {
        let defaults = ScoringWeights::default();
        match &self.weights {
            Some(overrides) => ScoringWeights {
                price_value: overrides.price_value.unwrap_or(defaults.price_value),
                location: overrides.location.unwrap_or(defaults.location),
                schools: overrides.schools.unwrap_or(defaults.schools),
                building: overrides.building.unwrap_or(defaults.building),
                amenities: overrides.amenities.unwrap_or(defaults.amenities),
                neighborhood: overrides.neighborhood.unwrap_or(defaults.neighborhood),
                market_context: overrides.market_context.unwrap_or(defaults.market_context),
                lifestyle: overrides.lifestyle.unwrap_or(defaults.lifestyle),
            },
            None => defaults,
        }
    }

    /// Effective scoring context after band overrides.
    pub fn context(&self, as_of_year: i32) -> ScoringContext {
        let defaults = ScoringContext::default();
        let bands = self.bands.as_ref();
        ScoringContext {
            price_per_sqft: bands
                .and_then(|bands| bands.price_per_sqft)
                .unwrap_or(defaults.price_per_sqft),
            monthly_cost: bands
                .and_then(|bands| bands.monthly_cost)
                .unwrap_or(defaults.monthly_cost),
            as_of_year,
        }
    }

    pub fn validate(&self) -> Result<(), ScoreError> {
        let weights = self.weights();
        for (name, weight) in [
            ("price_value", weights.price_value),
            ("location", weights.location),
            ("schools", weights.schools),
            ("building", weights.building),
            ("amenities", weights.amenities),
            ("neighborhood", weights.neighborhood),
            ("market_context", weights.market_context),
            ("lifestyle", weights.lifestyle),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ScoreError::ConfigParse(format!(
                    "weights.{name} must be a non-negative finite number"
                )));
            }
        }

        let context = self.context(0);
        for (name, band) in [
            ("price_per_sqft", context.price_per_sqft),
            ("monthly_cost", context.monthly_cost),
        ] {
            if !band.min.is_finite() || !band.max.is_finite() || band.min >= band.max {
                return Err(ScoreError::ConfigParse(format!(
                    "bands.{name} must satisfy min < max"
                )));
            }
        }

        Ok(())
    }
}
