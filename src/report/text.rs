use super::ListingReport;

pub fn to_text(reports: &[ListingReport]) -> String {
    let mut output = String::new();
    for (index, report) in reports.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        output.push_str(&format!("{}\n", report.address));
        output.push_str(&format!(
            "  overall: {} ({})\n",
            report.breakdown.overall,
            report.category.label()
        ));
        for (name, value) in report.breakdown.sub_scores() {
            output.push_str(&format!("  {name}: {value:.1}\n"));
        }
    }
    if reports.is_empty() {
        output.push_str("no listings scored\n");
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Scale;
    use crate::types::breakdown::ScoreBreakdown;

    #[test]
    fn text_report_lists_all_sub_scores() {
        let report = ListingReport::new(
            "245 E 19th St Apt 4C",
            ScoreBreakdown {
                overall: 7,
                price_value: 5.5,
                location: 7.6,
                schools: 8.0,
                building: 7.2,
                amenities: 4.0,
                neighborhood: 7.0,
                market_context: 5.0,
                lifestyle: 5.0,
            },
            Scale::Ten,
        );
        let rendered = to_text(&[report]);
        assert!(rendered.contains("245 E 19th St Apt 4C"));
        assert!(rendered.contains("overall: 7 (Good)"));
        assert!(rendered.contains("price value: 5.5"));
        assert!(rendered.contains("market context: 5.0"));
    }

    #[test]
    fn empty_batch_renders_placeholder() {
        assert!(to_text(&[]).contains("no listings scored"));
    }
}
