use serde::Serialize;

/// The result of one scoring call: eight sub-scores rounded to one decimal
/// plus the weighted overall rounded to an integer. Produced fresh per
/// call and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub overall: u8,
    pub price_value: f64,
    pub location: f64,
    pub schools: f64,
    pub building: f64,
    pub amenities: f64,
    pub neighborhood: f64,
    pub market_context: f64,
    pub lifestyle: f64,
}

impl ScoreBreakdown {
    pub fn sub_scores(&self) -> [(&'static str, f64); 8] {
        [
            ("price value", self.price_value),
            ("location", self.location),
            ("schools", self.schools),
            ("building", self.building),
            ("amenities", self.amenities),
            ("neighborhood", self.neighborhood),
            ("market context", self.market_context),
            ("lifestyle", self.lifestyle),
        ]
    }
}

/// Qualitative bucket for a score, used by the UI layer for labels and
/// color coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreCategory {
    Excellent,
    Good,
    Average,
    Poor,
}

impl ScoreCategory {
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            ScoreCategory::Excellent
        } else if score >= 6.5 {
            ScoreCategory::Good
        } else if score >= 5.0 {
            ScoreCategory::Average
        } else {
            ScoreCategory::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreCategory::Excellent => "Excellent",
            ScoreCategory::Good => "Good",
            ScoreCategory::Average => "Average",
            ScoreCategory::Poor => "Poor",
        }
    }
}
