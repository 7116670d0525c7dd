use serde::{Deserialize, Serialize};

/// Fractional contribution of each sub-score to the overall score.
///
/// The default set sums to 1.0. The engine does not require that: a weight
/// set summing above or below 1 rescales the overall band, and callers are
/// allowed to do that deliberately.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScoringWeights {
    pub price_value: f64,
    pub location: f64,
    pub schools: f64,
    pub building: f64,
    pub amenities: f64,
    pub neighborhood: f64,
    pub market_context: f64,
    pub lifestyle: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            price_value: 0.25,
            location: 0.20,
            schools: 0.15,
            building: 0.10,
            amenities: 0.10,
            neighborhood: 0.05,
            market_context: 0.10,
            lifestyle: 0.05,
        }
    }
}

/// An inclusive [min, max] reference band for a "reasonable" value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    /// Map a value onto the band linearly, lower value scoring higher:
    /// `min` maps to 10, `max` maps to 2. Unclamped; callers sanitize.
    pub fn value_score(&self, value: f64) -> f64 {
        10.0 - (value - self.min) / (self.max - self.min) * 8.0
    }

    pub fn scaled(&self, multiplier: f64) -> Band {
        Band {
            min: self.min * multiplier,
            max: self.max * multiplier,
        }
    }
}

/// Everything the engine needs besides the listing and the weights: the
/// configured price bands and the reference year for renovation recency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringContext {
    /// $/sqft band for the primary price-value path.
    pub price_per_sqft: Band,
    /// $/month band for the carrying-cost score.
    pub monthly_cost: Band,
    /// Reference year for "years since renovation". Pinned by default so
    /// scoring stays reproducible; the CLI passes the current year.
    pub as_of_year: i32,
}

pub const DEFAULT_AS_OF_YEAR: i32 = 2026;

impl Default for ScoringContext {
    fn default() -> Self {
        Self {
            price_per_sqft: Band {
                min: 800.0,
                max: 2000.0,
            },
            monthly_cost: Band {
                min: 300.0,
                max: 1500.0,
            },
            as_of_year: DEFAULT_AS_OF_YEAR,
        }
    }
}
