use super::tables;
use crate::types::property::PropertyData;

/// Straight table lookup; school quality is externally curated, not
/// derived.
pub fn schools_score(property: &PropertyData) -> f64 {
    tables::school_rating(&property.school_district)
}
