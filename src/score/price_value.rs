use super::{sanitize, tables};
use crate::types::property::PropertyData;
use crate::types::weights::{Band, ScoringContext};

/// Price-per-room tiers for listings with unknown square footage, ordered
/// highest floor first. Each tier scores against its own band.
const ROOM_TIERS: [(f64, Band); 4] = [
    // luxury
    (
        1_500_000.0,
        Band {
            min: 1_500_000.0,
            max: 4_000_000.0,
        },
    ),
    // premium
    (
        750_000.0,
        Band {
            min: 750_000.0,
            max: 1_500_000.0,
        },
    ),
    // standard
    (
        350_000.0,
        Band {
            min: 350_000.0,
            max: 750_000.0,
        },
    ),
    // affordable
    (
        0.0,
        Band {
            min: 100_000.0,
            max: 350_000.0,
        },
    ),
];

pub fn price_value_score(property: &PropertyData, context: &ScoringContext) -> f64 {
    let price_score = if property.square_feet > 0.0 {
        per_area_score(property, context)
    } else {
        per_room_score(property)
    };
    let monthly_score = monthly_cost_score(property, &context.monthly_cost);
    let combined =
        (price_score + monthly_score) / 2.0 * market_time_bonus(property.days_on_market);
    sanitize(combined)
}

fn per_area_score(property: &PropertyData, context: &ScoringContext) -> f64 {
    let per_sqft = property.price / property.square_feet;
    let multiplier = property
        .market_trend
        .map(tables::trend_band_multiplier)
        .unwrap_or(1.0);
    let band = context.price_per_sqft.scaled(multiplier);
    sanitize(band.value_score(per_sqft))
}

fn per_room_score(property: &PropertyData) -> f64 {
    let rooms = property.bedrooms.max(1) as f64;
    let per_room = property.price / rooms;
    let band = room_tier_band(per_room);
    sanitize(band.value_score(per_room))
}

fn room_tier_band(per_room: f64) -> Band {
    for (floor, band) in ROOM_TIERS {
        if per_room >= floor {
            return band;
        }
    }
    ROOM_TIERS[ROOM_TIERS.len() - 1].1
}

fn monthly_cost_score(property: &PropertyData, band: &Band) -> f64 {
    let burden = property.monthly_fees + property.property_taxes.unwrap_or(0.0) / 12.0;
    sanitize(band.value_score(burden))
}

/// Longer time on market means buyer leverage, capped at +50%.
fn market_time_bonus(days_on_market: Option<u32>) -> f64 {
    match days_on_market {
        Some(days) => (1.0 + (days as f64 - 30.0) / 100.0).clamp(1.0, 1.5),
        None => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::property::MarketTrend;

    fn listing(price: f64, square_feet: f64, bedrooms: u32, monthly_fees: f64) -> PropertyData {
        PropertyData {
            price,
            square_feet,
            bedrooms,
            monthly_fees,
            ..PropertyData::default()
        }
    }

    #[test]
    fn mid_band_listing_scores_mid_range() {
        // $1250/sqft against the 800-2000 band gives 7.0; $1200/month
        // carrying cost against 300-1500 gives 4.0; 30 days on market is
        // a neutral bonus.
        let mut property = listing(1_250_000.0, 1000.0, 2, 1200.0);
        property.days_on_market = Some(30);
        let score = price_value_score(&property, &ScoringContext::default());
        assert!((score - 5.5).abs() < 1e-9);
    }

    #[test]
    fn unknown_square_footage_uses_per_room_tier() {
        // $900k/room lands in the premium tier band without panicking.
        let property = listing(900_000.0, 0.0, 1, 0.0);
        let score = price_value_score(&property, &ScoringContext::default());
        assert!(score.is_finite());
        assert!((1.0..=10.0).contains(&score));
        assert!((score - 9.2).abs() < 1e-9);
    }

    #[test]
    fn zero_bedrooms_does_not_divide_by_zero() {
        let property = listing(450_000.0, 0.0, 0, 800.0);
        let score = price_value_score(&property, &ScoringContext::default());
        assert!(score.is_finite());
        assert!((1.0..=10.0).contains(&score));
    }

    #[test]
    fn zero_price_and_area_stay_finite() {
        let property = listing(0.0, 0.0, 0, 0.0);
        let score = price_value_score(&property, &ScoringContext::default());
        assert!(score.is_finite());
        assert!((1.0..=10.0).contains(&score));
    }

    #[test]
    fn higher_price_never_scores_higher() {
        let context = ScoringContext::default();
        let mut previous = f64::INFINITY;
        for price in [600_000.0, 900_000.0, 1_400_000.0, 2_200_000.0, 3_500_000.0] {
            let score = price_value_score(&listing(price, 1000.0, 2, 900.0), &context);
            assert!(score <= previous, "price {price} should not raise the score");
            previous = score;
        }
    }

    #[test]
    fn hot_market_tolerates_higher_asks() {
        let context = ScoringContext::default();
        let mut property = listing(1_800_000.0, 1000.0, 2, 900.0);
        let base = price_value_score(&property, &context);
        property.market_trend = Some(MarketTrend::Hot);
        let hot = price_value_score(&property, &context);
        assert!(hot > base);
    }

    #[test]
    fn stale_listing_earns_market_time_bonus() {
        let context = ScoringContext::default();
        let mut property = listing(1_250_000.0, 1000.0, 2, 1200.0);
        property.days_on_market = Some(130);
        let score = price_value_score(&property, &context);
        // 5.5 * 1.5 cap
        assert!((score - 8.25).abs() < 1e-9);
    }

    #[test]
    fn fresh_listing_gets_no_bonus() {
        assert_eq!(market_time_bonus(Some(5)), 1.0);
        assert_eq!(market_time_bonus(None), 1.0);
        assert_eq!(market_time_bonus(Some(180)), 1.5);
    }
}
