use super::ListingReport;

/// A single listing renders as an object, a batch as an array.
pub fn to_json(reports: &[ListingReport]) -> Result<String, serde_json::Error> {
    match reports {
        [single] => serde_json::to_string_pretty(single),
        many => serde_json::to_string_pretty(many),
    }
}
