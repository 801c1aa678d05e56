pub mod csv;
pub mod json;
pub mod text;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::model::dimension::Dimension;
use crate::model::tier::Tier;
use crate::scoring::aggregate::{ScoreSummary, compute_scores};
use crate::scoring::classify::classify_benchmark;
use crate::scoring::distribution::{QuestionDistribution, build_all_distributions};
use crate::scoring::normalize::quality_failure_rate_percent;
use crate::store::SurveyRecord;

#[derive(Debug, Clone, Serialize)]
pub struct DimensionReport {
    pub dimension: Dimension,
    pub score: f64,
    pub unit: &'static str,
    pub tier: Option<Tier>,
}

/// Everything a scorecard renderer needs, computed once.
#[derive(Debug, Clone, Serialize)]
pub struct ScorecardSummary {
    pub tool_name: String,
    pub tool_version: String,
    pub survey_id: String,
    pub team_name: String,
    pub n_responses: usize,
    pub scores: ScoreSummary,
    /// Display-only implied change-failure rate for the Quality mean.
    pub quality_failure_rate_percent: f64,
    pub dimensions: Vec<DimensionReport>,
    pub distributions: Vec<QuestionDistribution>,
}

pub fn build_summary(catalog: &Catalog, record: &SurveyRecord) -> Result<ScorecardSummary> {
    let scores = compute_scores(catalog, &record.responses);

    let dimensions = Dimension::all()
        .iter()
        .map(|&dim| {
            let score = dimension_score(&scores, dim);
            DimensionReport {
                dimension: dim,
                score,
                unit: dim.unit(),
                tier: classify_benchmark(catalog, dim, score),
            }
        })
        .collect();

    Ok(ScorecardSummary {
        tool_name: "core4-scorecard".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        survey_id: record.survey_id.clone(),
        team_name: record.team_name.clone(),
        n_responses: record.responses.len(),
        scores,
        quality_failure_rate_percent: quality_failure_rate_percent(scores.quality),
        dimensions,
        distributions: build_all_distributions(catalog, &record.responses)?,
    })
}

fn dimension_score(scores: &ScoreSummary, dimension: Dimension) -> f64 {
    match dimension {
        Dimension::Speed => scores.speed,
        Dimension::Quality => scores.quality,
        Dimension::Impact => scores.impact,
        Dimension::Effectiveness => scores.effectiveness,
    }
}

pub fn format_score(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}
