use crate::error::Result;
use crate::report::ScorecardSummary;

pub fn render_scorecard_json(summary: &ScorecardSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}
