//! Immutable rating tables. Loaded once, never mutated at runtime.

use crate::types::property::{
    BuildingType, ConstructionQuality, MarketTrend, OutdoorSpace, ParkingType,
};
use std::collections::HashMap;
use std::sync::OnceLock;

static SCHOOL_RATINGS: OnceLock<HashMap<&'static str, f64>> = OnceLock::new();

/// School-district ratings on the 1-10 scale, curated rather than derived.
fn school_ratings() -> &'static HashMap<&'static str, f64> {
    SCHOOL_RATINGS.get_or_init(|| {
        HashMap::from([
            ("Stuyvesant HS Zone", 10.0),
            ("Bronx Science Zone", 9.0),
            ("Brooklyn Tech Zone", 9.0),
            ("PS 6 Zone", 9.0),
            ("PS 234 Zone", 9.0),
            ("PS 321 Zone", 9.0),
            ("PS 41 Zone", 8.0),
            ("PS 87 Zone", 8.0),
            ("District 2", 8.0),
            ("District 26", 8.0),
            ("District 3", 7.0),
            ("District 15", 7.0),
            ("District 20", 6.0),
            ("District 31", 6.0),
        ])
    })
}

pub const DEFAULT_SCHOOL_RATING: f64 = 5.0;

pub fn school_rating(district: &str) -> f64 {
    school_ratings()
        .get(district.trim())
        .copied()
        .unwrap_or(DEFAULT_SCHOOL_RATING)
}

/// Construction-era value judgment as a constant per building type.
pub fn building_type_score(kind: BuildingType) -> f64 {
    match kind {
        BuildingType::Luxury => 9.0,
        BuildingType::Prewar => 8.0,
        BuildingType::Historic => 8.0,
        BuildingType::Modern => 7.0,
        BuildingType::Other => 6.0,
        BuildingType::Postwar => 5.0,
    }
}

pub fn quality_multiplier(quality: ConstructionQuality) -> f64 {
    match quality {
        ConstructionQuality::Basic => 0.8,
        ConstructionQuality::Good => 1.0,
        ConstructionQuality::Luxury => 1.25,
        ConstructionQuality::UltraLuxury => 1.5,
        ConstructionQuality::Unknown => 1.0,
    }
}

/// Scales the acceptable price band: hot markets tolerate higher asks.
pub fn trend_band_multiplier(trend: MarketTrend) -> f64 {
    match trend {
        MarketTrend::Hot => 1.2,
        MarketTrend::Warm => 1.1,
        MarketTrend::Cool => 0.9,
        MarketTrend::Cold => 0.8,
        MarketTrend::Other => 1.0,
    }
}

/// Market-context baseline keyed by trend.
pub fn trend_baseline(trend: MarketTrend) -> f64 {
    match trend {
        MarketTrend::Hot => 8.0,
        MarketTrend::Warm => 6.0,
        MarketTrend::Cool => 4.0,
        MarketTrend::Cold => 2.0,
        MarketTrend::Other => 5.0,
    }
}

pub fn parking_bonus(parking: ParkingType) -> f64 {
    match parking {
        ParkingType::Garage => 1.0,
        ParkingType::Assigned => 0.7,
        ParkingType::Street => 0.3,
        ParkingType::None | ParkingType::Other => 0.0,
    }
}

pub fn outdoor_bonus(outdoor: OutdoorSpace) -> f64 {
    match outdoor {
        OutdoorSpace::Garden => 1.2,
        OutdoorSpace::Rooftop => 1.0,
        OutdoorSpace::Terrace => 0.8,
        OutdoorSpace::Balcony => 0.5,
        OutdoorSpace::None | OutdoorSpace::Other => 0.0,
    }
}

/// Unit-level features that carry an extra premium on top of the flat
/// home-feature bonus.
pub const PREMIUM_FEATURES: [&str; 4] = [
    "fireplace",
    "private outdoor space",
    "washer/dryer",
    "central air",
];

pub fn is_premium_feature(feature: &str) -> bool {
    let normalized = feature.trim().to_lowercase();
    PREMIUM_FEATURES
        .iter()
        .any(|premium| normalized == *premium)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stuyvesant_zone_rates_ten() {
        assert_eq!(school_rating("Stuyvesant HS Zone"), 10.0);
    }

    #[test]
    fn unknown_district_rates_neutral() {
        assert_eq!(school_rating("District 99"), DEFAULT_SCHOOL_RATING);
        assert_eq!(school_rating(""), DEFAULT_SCHOOL_RATING);
    }

    #[test]
    fn building_types_rank_luxury_over_postwar() {
        assert!(building_type_score(BuildingType::Luxury) > building_type_score(BuildingType::Postwar));
        assert!(building_type_score(BuildingType::Prewar) > building_type_score(BuildingType::Postwar));
    }

    #[test]
    fn premium_feature_matching_is_case_insensitive() {
        assert!(is_premium_feature("Washer/Dryer"));
        assert!(is_premium_feature(" central air "));
        assert!(!is_premium_feature("dishwasher"));
    }

    #[test]
    fn trend_multipliers_are_ordered() {
        assert!(trend_band_multiplier(MarketTrend::Hot) > trend_band_multiplier(MarketTrend::Warm));
        assert!(trend_band_multiplier(MarketTrend::Warm) > trend_band_multiplier(MarketTrend::Cool));
        assert!(trend_band_multiplier(MarketTrend::Cool) > trend_band_multiplier(MarketTrend::Cold));
    }
}
