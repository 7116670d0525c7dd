pub mod json;
pub mod text;

use crate::error::ScoreError;
use crate::types::breakdown::{ScoreBreakdown, ScoreCategory};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Display scale for rendered scores. `Hundred` is a pure presentation
/// transform; categories are always derived from the ten-point overall.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scale {
    #[default]
    Ten,
    Hundred,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingReport {
    pub address: String,
    pub category: ScoreCategory,
    #[serde(flatten)]
    pub breakdown: ScoreBreakdown,
}

impl ListingReport {
    pub fn new(address: &str, breakdown: ScoreBreakdown, scale: Scale) -> Self {
        let category = ScoreCategory::from_score(breakdown.overall as f64);
        Self {
            address: address.to_string(),
            category,
            breakdown: apply_scale(breakdown, scale),
        }
    }
}

fn apply_scale(breakdown: ScoreBreakdown, scale: Scale) -> ScoreBreakdown {
    match scale {
        Scale::Ten => breakdown,
        Scale::Hundred => ScoreBreakdown {
            overall: breakdown.overall * 10,
            price_value: breakdown.price_value * 10.0,
            location: breakdown.location * 10.0,
            schools: breakdown.schools * 10.0,
            building: breakdown.building * 10.0,
            amenities: breakdown.amenities * 10.0,
            neighborhood: breakdown.neighborhood * 10.0,
            market_context: breakdown.market_context * 10.0,
            lifestyle: breakdown.lifestyle * 10.0,
        },
    }
}

pub fn render(reports: &[ListingReport], format: OutputFormat) -> Result<String, ScoreError> {
    match format {
        OutputFormat::Json => json::to_json(reports).map_err(ScoreError::Json),
        OutputFormat::Text => Ok(text::to_text(reports)),
    }
}
