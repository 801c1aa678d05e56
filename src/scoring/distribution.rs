use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::model::dimension::Dimension;
use crate::model::question::Question;
use crate::model::response::Response;
use crate::scoring::normalize::{self, Rating};

pub const NA_BUCKET_ID: &str = "na";
pub const NA_BUCKET_LABEL: &str = "N/A";

const RATING_BUCKET_IDS: [&str; 5] = ["1", "2", "3", "4", "5"];

// Band labels for the Speed question's rebucketed continuous values.
const SPEED_BAND_LABELS: [&str; 5] = [
    "up to 1.5 per week",
    "1.5 to 3.5 per week",
    "3.5 to 5.5 per week",
    "5.5 to 7.5 per week",
    "more than 7.5 per week",
];

/// One answer bucket: a stable identifier, a display label, and how many
/// responses fell in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub id: &'static str,
    pub label: &'static str,
    pub count: usize,
}

/// Chart-ready distribution for one question (or one effectiveness
/// sub-question): buckets 1-5 in ascending order plus a pooled N/A
/// bucket covering both historical sentinel spellings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionDistribution {
    pub question_key: &'static str,
    pub title: &'static str,
    pub buckets: Vec<Bucket>,
}

/// Rebucket a continuous throughput value into its 1-5 display band.
/// Thresholds are inclusive upper bounds matching the catalog's option
/// boundaries.
pub fn speed_band(raw: f64) -> usize {
    if raw <= 1.5 {
        1
    } else if raw <= 3.5 {
        2
    } else if raw <= 5.5 {
        3
    } else if raw <= 7.5 {
        4
    } else {
        5
    }
}

/// Build the distribution(s) for one root question key. Scale questions
/// yield a single table; the Effectiveness root yields one table per
/// sub-question, never a pooled one.
pub fn build_distribution(
    catalog: &Catalog,
    responses: &[Response],
    question_key: &str,
) -> Result<Vec<QuestionDistribution>> {
    let question = catalog.require(question_key)?;

    if question.is_effectiveness() {
        return Ok(question
            .sub_questions()
            .iter()
            .map(|sub| QuestionDistribution {
                question_key: sub.key,
                title: sub.title,
                buckets: count_buckets(question, responses, sub.key),
            })
            .collect());
    }

    Ok(vec![QuestionDistribution {
        question_key: question.key,
        title: question.title,
        buckets: count_buckets(question, responses, question.key),
    }])
}

/// Distributions for every catalog question in insertion order.
pub fn build_all_distributions(
    catalog: &Catalog,
    responses: &[Response],
) -> Result<Vec<QuestionDistribution>> {
    let mut out = Vec::new();
    for question in catalog.questions() {
        out.extend(build_distribution(catalog, responses, question.key)?);
    }
    Ok(out)
}

fn count_buckets(question: &Question, responses: &[Response], answer_key: &str) -> Vec<Bucket> {
    let mut counts = [0usize; 5];
    let mut na = 0usize;

    for response in responses {
        let Some(&raw) = response.ratings.get(answer_key) else {
            continue;
        };
        match normalize::resolve(question, raw) {
            Rating::NotApplicable => na += 1,
            Rating::Value(v) => {
                let band = if question.dimension == Dimension::Speed {
                    speed_band(v)
                } else {
                    (v.round() as i64).clamp(1, 5) as usize
                };
                counts[band - 1] += 1;
            }
        }
    }

    let mut buckets = Vec::with_capacity(6);
    for (idx, &count) in counts.iter().enumerate() {
        buckets.push(Bucket {
            id: RATING_BUCKET_IDS[idx],
            label: bucket_label(question, idx + 1),
            count,
        });
    }
    buckets.push(Bucket {
        id: NA_BUCKET_ID,
        label: NA_BUCKET_LABEL,
        count: na,
    });
    buckets
}

fn bucket_label(question: &Question, band: usize) -> &'static str {
    if question.dimension == Dimension::Speed {
        return SPEED_BAND_LABELS[band - 1];
    }
    question
        .options()
        .iter()
        .find(|o| o.value == band as f64)
        .map(|o| o.label)
        .unwrap_or("")
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/distribution.rs"]
mod tests;
