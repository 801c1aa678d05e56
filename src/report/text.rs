use crate::report::{ScorecardSummary, format_score};

pub fn render_scorecard_text(summary: &ScorecardSummary) -> String {
    let mut out = String::new();

    out.push_str("Core 4 Team Effectiveness Scorecard\n");
    out.push_str("===================================\n\n");

    out.push_str("1. Survey\n");
    out.push_str(&format!("Team: {}\n", summary.team_name));
    out.push_str(&format!("Survey: {}\n", summary.survey_id));
    out.push_str(&format!("Responses: {}\n\n", summary.n_responses));

    out.push_str("2. Dimension scores\n");
    for dim in &summary.dimensions {
        let tier = match dim.tier {
            Some(t) => format!(" [{}, {}]", t.name(), t.label()),
            None => " [no benchmark]".to_string(),
        };
        out.push_str(&format!(
            "{}: {} {}{}\n",
            dim.dimension.name(),
            format_score(dim.score),
            dim.unit,
            tier
        ));
    }
    out.push_str(&format!(
        "Implied change-failure rate: {}%\n\n",
        format_score(summary.quality_failure_rate_percent)
    ));

    out.push_str("3. Overall favorability\n");
    out.push_str(&format!(
        "Overall: {}% of individual answers favorable\n",
        format_score(summary.scores.overall)
    ));
    out.push_str(&format!("{}\n\n", overall_statement(summary.scores.overall)));

    out.push_str("4. Response distributions\n");
    for dist in &summary.distributions {
        out.push_str(&format!("{}:\n", dist.title));
        for bucket in &dist.buckets {
            out.push_str(&format!("  {}  {}\n", bucket.count, bucket.label));
        }
    }

    out
}

fn overall_statement(overall: f64) -> &'static str {
    if overall >= 80.0 {
        "Conclusion: the team reports a strongly favorable experience."
    } else if overall >= 60.0 {
        "Conclusion: the team reports a mostly favorable experience."
    } else if overall >= 40.0 {
        "Conclusion: the team reports a mixed experience."
    } else {
        "Conclusion: the team reports an unfavorable experience."
    }
}
