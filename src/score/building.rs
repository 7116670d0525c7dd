use super::{sanitize, tables};
use crate::types::property::PropertyData;

pub fn building_score(property: &PropertyData, as_of_year: i32) -> f64 {
    let age_score = (10.0 - property.building_age.max(0.0) / 15.0).clamp(1.0, 10.0);
    let type_score = tables::building_type_score(property.building_type);
    let floor_mult = floor_multiplier(property.floor, property.total_floors);

    let quality = property
        .construction_quality
        .map(tables::quality_multiplier);
    let renovation = property
        .renovation_year
        .map(|year| renovation_bonus(year, as_of_year));

    // The richer variant trusts the age signal more once quality or
    // renovation data corroborates it.
    let (age_weight, type_weight) = if quality.is_some() || renovation.is_some() {
        (0.5, 0.5)
    } else {
        (0.4, 0.6)
    };

    let mut score = (age_score * age_weight + type_score * type_weight) * floor_mult;
    if let Some(multiplier) = quality {
        score *= multiplier;
    }
    if let Some(bonus) = renovation {
        score *= bonus;
    }
    sanitize(score)
}

/// Middle floors preferred: ground floors lose 20%, top floors 10%.
fn floor_multiplier(floor: u32, total_floors: u32) -> f64 {
    if total_floors == 0 {
        return 1.0;
    }
    let position = floor as f64 / total_floors as f64;
    if position < 0.2 {
        0.8
    } else if position > 0.8 {
        0.9
    } else {
        1.0
    }
}

/// Decays linearly from 1.8 toward 1.0 over twenty years since renovation.
fn renovation_bonus(renovation_year: i32, as_of_year: i32) -> f64 {
    let years = (as_of_year - renovation_year).max(0) as f64;
    (1.8 - years * 0.04).max(1.0)
}
