use super::{sanitize, tables};
use crate::types::property::{ParkingType, PropertyData};

const HOME_FEATURE_BONUS: f64 = 0.5;
const PREMIUM_FEATURE_BONUS: f64 = 0.3;

pub fn amenities_score(property: &PropertyData) -> f64 {
    // Count-based base, capped at 8 to leave headroom for bonuses.
    let mut score = (property.amenities.len() as f64 + 2.0).clamp(1.0, 8.0);

    if let Some(features) = &property.home_features {
        let premium = features
            .iter()
            .filter(|feature| tables::is_premium_feature(feature))
            .count();
        score += features.len() as f64 * HOME_FEATURE_BONUS;
        score += premium as f64 * PREMIUM_FEATURE_BONUS;
    }

    match property.parking_type {
        Some(parking) => score += tables::parking_bonus(parking),
        // A bare hasParking flag without a type is worth an assigned spot.
        None if property.has_parking == Some(true) => {
            score += tables::parking_bonus(ParkingType::Assigned)
        }
        None => {}
    }

    if let Some(outdoor) = property.outdoor_space {
        score += tables::outdoor_bonus(outdoor);
    }

    sanitize(score)
}
