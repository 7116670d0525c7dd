use serde::{Deserialize, Serialize};

/// A single residential listing as produced by the upstream extraction
/// layer. Field names follow the camelCase JSON it emits.
///
/// Numeric fields are expected non-negative; `square_feet == 0` means the
/// area is unknown and triggers the per-room price fallback. Missing
/// optional fields are substituted with neutral defaults at scoring time,
/// never rejected.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyData {
    pub address: String,
    pub price: f64,
    pub monthly_fees: f64,
    pub property_taxes: Option<f64>,
    /// Assessed value divided by market value, usually below 1.
    pub assessment_ratio: Option<f64>,
    pub square_feet: f64,
    pub bedrooms: u32,
    /// Half baths count as 0.5.
    pub bathrooms: f64,
    pub floor: u32,
    pub total_floors: u32,
    pub building_age: f64,
    pub building_type: BuildingType,
    pub construction_quality: Option<ConstructionQuality>,
    pub renovation_year: Option<i32>,
    pub school_district: String,
    pub walk_score: Option<f64>,
    pub transit_score: Option<f64>,
    pub bike_score: Option<f64>,
    /// Minutes to the nearest park.
    pub proximity_to_park: Option<f64>,
    /// Minutes to the nearest subway station.
    pub proximity_to_subway: Option<f64>,
    /// 1-10, higher is safer.
    pub safety_score: Option<f64>,
    /// Building-level amenities, de-duplicated by the caller.
    pub amenities: Vec<String>,
    /// Unit-level features.
    pub home_features: Option<Vec<String>>,
    pub has_parking: Option<bool>,
    pub parking_type: Option<ParkingType>,
    pub outdoor_space: Option<OutdoorSpace>,
    pub days_on_market: Option<u32>,
    pub price_history: Option<PriceHistory>,
    pub price_history_details: Option<PriceHistoryDetails>,
    pub market_trend: Option<MarketTrend>,
    /// 1-10, 1 is quiet.
    pub noise_level: Option<f64>,
    pub pet_friendly: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildingType {
    Prewar,
    Postwar,
    Modern,
    Luxury,
    Historic,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConstructionQuality {
    Basic,
    Good,
    Luxury,
    UltraLuxury,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParkingType {
    Garage,
    Assigned,
    Street,
    None,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutdoorSpace {
    Garden,
    Rooftop,
    Terrace,
    Balcony,
    None,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceHistory {
    Increased,
    Decreased,
    Stable,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketTrend {
    Hot,
    Warm,
    Cool,
    Cold,
    #[serde(other)]
    Other,
}

/// Richer price-history payload when the upstream extractor found a
/// listing timeline rather than a single direction flag.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceHistoryDetails {
    pub percentage_change: f64,
    /// Free-text timeframe, e.g. "reduced this month".
    pub time_context: Option<String>,
    pub analysis: Option<String>,
    /// Ordered oldest-first.
    pub events: Vec<PriceEvent>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceEvent {
    pub date: String,
    pub price: f64,
    pub event: String,
}
