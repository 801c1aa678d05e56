//! CSV export: one row per response, responses in submission order,
//! answer columns in catalog insertion order with effectiveness
//! sub-questions expanded in place.

use crate::catalog::Catalog;
use crate::report::format_score;
use crate::scoring::normalize::{self, Rating};
use crate::store::SurveyRecord;

pub fn render_csv(catalog: &Catalog, record: &SurveyRecord) -> String {
    let mut out = String::new();

    // Flattened answer keys in catalog insertion order.
    let columns = catalog.required_keys();

    let mut header = vec![
        "response_number".to_string(),
        "team".to_string(),
        "created_at".to_string(),
    ];
    for key in &columns {
        header.push((*key).to_string());
    }
    out.push_str(&header.join(","));
    out.push('\n');

    for response in &record.responses {
        let mut row = vec![
            response.response_number.to_string(),
            csv_field(&response.team_name),
            response.created_at.to_rfc3339(),
        ];
        for key in &columns {
            row.push(answer_cell(catalog, response.ratings.get(*key).copied(), key));
        }
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

fn answer_cell(catalog: &Catalog, raw: Option<f64>, key: &str) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    let question = match catalog.question_for_answer(key) {
        Some(q) => q,
        None => return String::new(),
    };
    match normalize::resolve(question, raw) {
        Rating::NotApplicable => "N/A".to_string(),
        Rating::Value(v) => format_score(v),
    }
}

fn csv_field(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/csv.rs"]
mod tests;
