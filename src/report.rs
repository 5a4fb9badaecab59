//! Report rendering
//!
//! Text and JSON output for a protein recommendation.

use crate::models::ProteinRecommendation;

const REPORT_TITLE: &str = "Protein Intake Recommendation";

/// Render the plain text report, one decimal place per value
pub fn render_text(recommendation: &ProteinRecommendation) -> String {
    let mut out = String::new();
    out.push_str(REPORT_TITLE);
    out.push('\n');
    out.push_str(&"-".repeat(REPORT_TITLE.len()));
    out.push('\n');
    out.push_str(&format!("Minimum: {:.1} g/day\n", recommendation.min_protein));
    out.push_str(&format!("Optimal: {:.1} g/day\n", recommendation.optimal));
    out.push_str(&format!("Maximum: {:.1} g/day\n", recommendation.max_protein));
    out.push_str(&format!("Per Meal: {:.1} g\n", recommendation.per_meal));
    out
}

/// Console report: a blank line followed by the text report
pub fn render_report(recommendation: &ProteinRecommendation) -> String {
    format!("\n{}", render_text(recommendation))
}

/// Serialize the recommendation as pretty-printed JSON
pub fn render_json(recommendation: &ProteinRecommendation) -> serde_json::Result<String> {
    serde_json::to_string_pretty(recommendation)
}
