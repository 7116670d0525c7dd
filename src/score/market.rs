use super::{sanitize, tables, BASELINE};
use crate::types::property::{PriceEvent, PriceHistory, PriceHistoryDetails, PropertyData};

pub fn market_context_score(property: &PropertyData) -> f64 {
    let baseline = property
        .market_trend
        .map(tables::trend_baseline)
        .unwrap_or(BASELINE);

    let history = match &property.price_history_details {
        Some(details) => rich_history_adjustment(details),
        None => simple_history_adjustment(property.price_history),
    };

    let mut score = baseline + history + days_on_market_adjustment(property.days_on_market);
    if let Some(ratio) = property.assessment_ratio {
        // Under-assessed relative to market is rewarded.
        score += ((0.8 - ratio) * 5.0).clamp(-2.0, 2.0);
    }
    sanitize(score)
}

fn simple_history_adjustment(history: Option<PriceHistory>) -> f64 {
    match history {
        Some(PriceHistory::Decreased) => 1.0,
        Some(PriceHistory::Increased) => -0.5,
        Some(PriceHistory::Stable) | Some(PriceHistory::Other) | None => 0.0,
    }
}

fn rich_history_adjustment(details: &PriceHistoryDetails) -> f64 {
    let pct = details.percentage_change;
    let mut adjustment = if pct < -10.0 {
        2.0
    } else if pct < -5.0 {
        1.0
    } else if pct > 15.0 {
        -1.5
    } else if pct > 5.0 {
        -0.5
    } else {
        0.0
    };

    if pct < 0.0 && mentions_recent_timeframe(details.time_context.as_deref()) {
        adjustment += 0.3;
    }

    match details.events.len() {
        1 => adjustment += 0.2,
        n if n > 5 => adjustment -= 0.3,
        _ => {}
    }
    if latest_events_show_reduction(&details.events) {
        adjustment += 0.8;
    }

    adjustment
}

fn mentions_recent_timeframe(time_context: Option<&str>) -> bool {
    let Some(context) = time_context else {
        return false;
    };
    let lowered = context.to_lowercase();
    ["recent", "this week", "this month", "days ago"]
        .iter()
        .any(|marker| lowered.contains(marker))
}

fn latest_events_show_reduction(events: &[PriceEvent]) -> bool {
    events.iter().rev().take(2).any(|event| {
        let lowered = event.event.to_lowercase();
        lowered.contains("price reduction") || lowered.contains("reduced")
    })
}

fn days_on_market_adjustment(days_on_market: Option<u32>) -> f64 {
    match days_on_market {
        // Stale listing, negotiation room.
        Some(days) if days > 90 => 0.5,
        // Fresh and competitively priced.
        Some(days) if days < 7 => 0.3,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::property::MarketTrend;

    fn details(percentage_change: f64) -> PriceHistoryDetails {
        PriceHistoryDetails {
            percentage_change,
            ..PriceHistoryDetails::default()
        }
    }

    #[test]
    fn no_market_data_is_neutral() {
        assert_eq!(market_context_score(&PropertyData::default()), 5.0);
    }

    #[test]
    fn deep_cut_and_stale_listing_stack() {
        let property = PropertyData {
            price_history_details: Some(details(-15.0)),
            days_on_market: Some(120),
            ..PropertyData::default()
        };
        // 5 + 2.0 + 0.5
        assert!((market_context_score(&property) - 7.5).abs() < 1e-9);
    }

    #[test]
    fn stacked_boosts_clamp_at_ten() {
        let property = PropertyData {
            market_trend: Some(MarketTrend::Hot),
            price_history_details: Some(details(-15.0)),
            days_on_market: Some(120),
            assessment_ratio: Some(0.4),
            ..PropertyData::default()
        };
        assert_eq!(market_context_score(&property), 10.0);
    }

    #[test]
    fn simple_mode_uses_direction_flag() {
        let mut property = PropertyData {
            price_history: Some(PriceHistory::Decreased),
            ..PropertyData::default()
        };
        assert!((market_context_score(&property) - 6.0).abs() < 1e-9);

        property.price_history = Some(PriceHistory::Increased);
        assert!((market_context_score(&property) - 4.5).abs() < 1e-9);

        property.price_history = Some(PriceHistory::Stable);
        assert_eq!(market_context_score(&property), 5.0);
    }

    #[test]
    fn rich_mode_overrides_simple_flag() {
        let property = PropertyData {
            price_history: Some(PriceHistory::Increased),
            price_history_details: Some(details(-7.0)),
            ..PropertyData::default()
        };
        // Details win: +1.0 for the -10..-5 tier, not -0.5.
        assert!((market_context_score(&property) - 6.0).abs() < 1e-9);
    }

    #[test]
    fn recent_negative_change_gets_extra_bump() {
        let mut with_context = details(-7.0);
        with_context.time_context = Some("reduced this month".to_string());
        let property = PropertyData {
            price_history_details: Some(with_context),
            ..PropertyData::default()
        };
        // 5 + 1.0 + 0.3
        assert!((market_context_score(&property) - 6.3).abs() < 1e-9);
    }

    #[test]
    fn recent_bump_skipped_for_positive_change() {
        let mut with_context = details(8.0);
        with_context.time_context = Some("raised this month".to_string());
        let property = PropertyData {
            price_history_details: Some(with_context),
            ..PropertyData::default()
        };
        // 5 - 0.5, no recency bump
        assert!((market_context_score(&property) - 4.5).abs() < 1e-9);
    }

    #[test]
    fn event_count_heuristics() {
        let event = |label: &str| PriceEvent {
            date: "2025-05-01".to_string(),
            price: 1_000_000.0,
            event: label.to_string(),
        };

        let mut single = details(0.0);
        single.events = vec![event("Listed")];
        let property = PropertyData {
            price_history_details: Some(single),
            ..PropertyData::default()
        };
        assert!((market_context_score(&property) - 5.2).abs() < 1e-9);

        let mut churned = details(0.0);
        churned.events = (0..7).map(|_| event("Relisted")).collect();
        let property = PropertyData {
            price_history_details: Some(churned),
            ..PropertyData::default()
        };
        assert!((market_context_score(&property) - 4.7).abs() < 1e-9);
    }

    #[test]
    fn reduction_in_latest_events_is_detected() {
        let event = |label: &str| PriceEvent {
            date: "2025-05-01".to_string(),
            price: 1_000_000.0,
            event: label.to_string(),
        };
        let mut history = details(0.0);
        history.events = vec![event("Listed"), event("Open house"), event("Price reduction")];
        let property = PropertyData {
            price_history_details: Some(history),
            ..PropertyData::default()
        };
        // +0.8 for the reduction in the last two events
        assert!((market_context_score(&property) - 5.8).abs() < 1e-9);
    }

    #[test]
    fn under_assessed_listing_is_rewarded() {
        let property = PropertyData {
            assessment_ratio: Some(0.6),
            ..PropertyData::default()
        };
        assert!((market_context_score(&property) - 6.0).abs() < 1e-9);

        let over = PropertyData {
            assessment_ratio: Some(1.5),
            ..PropertyData::default()
        };
        // (0.8 - 1.5) * 5 clamps at -2
        assert!((market_context_score(&over) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn cold_trend_lowers_the_baseline() {
        let property = PropertyData {
            market_trend: Some(MarketTrend::Cold),
            ..PropertyData::default()
        };
        assert_eq!(market_context_score(&property), 2.0);
    }
}
