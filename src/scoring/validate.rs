use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::catalog::Catalog;
use crate::model::dimension::Dimension;
use crate::model::question::Question;
use crate::scoring::normalize::{LEGACY_NA_SENTINEL, NA_SENTINEL};

/// One user-facing reason a ratings map is not submittable.
#[derive(Debug, Clone, PartialEq)]
pub enum RatingIssue {
    MissingAnswer { key: String },
    OutOfDomain { key: String, value: f64 },
    UnknownKey { key: String },
}

impl fmt::Display for RatingIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingIssue::MissingAnswer { key } => write!(f, "missing answer for {key}"),
            RatingIssue::OutOfDomain { key, value } => {
                write!(f, "value {value} is outside the valid domain of {key}")
            }
            RatingIssue::UnknownKey { key } => write!(f, "unknown question key {key}"),
        }
    }
}

/// All issues found in one ratings map. Collected in full rather than
/// failing on the first, so the user can fix the whole form at once.
#[derive(Debug, Clone, Error, PartialEq)]
pub struct ValidationError {
    pub issues: Vec<RatingIssue>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid ratings: ")?;
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

/// Check a ratings map against the catalog's submission contract: every
/// required key answered (including every effectiveness sub-key) and
/// every value inside its question's domain.
pub fn validate_ratings(
    catalog: &Catalog,
    ratings: &BTreeMap<String, f64>,
) -> Result<(), ValidationError> {
    let mut issues = Vec::new();

    for key in catalog.required_keys() {
        match ratings.get(key) {
            None => issues.push(RatingIssue::MissingAnswer {
                key: key.to_string(),
            }),
            Some(&value) => {
                let question = catalog
                    .question_for_answer(key)
                    .expect("required key always maps to a question");
                if !in_domain(question, value) {
                    issues.push(RatingIssue::OutOfDomain {
                        key: key.to_string(),
                        value,
                    });
                }
            }
        }
    }

    for key in ratings.keys() {
        if catalog.question_for_answer(key).is_none() {
            issues.push(RatingIssue::UnknownKey { key: key.clone() });
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { issues })
    }
}

fn in_domain(question: &Question, value: f64) -> bool {
    if value == NA_SENTINEL {
        return true;
    }
    match question.dimension {
        // Continuous slider: anything in [0.5, 9.0]. 9.0 is a real
        // answer here, not a sentinel.
        Dimension::Speed => (0.5..=9.0).contains(&value),
        // Ordinal 1-5, plus the legacy 9 sentinel.
        Dimension::Quality | Dimension::Impact | Dimension::Effectiveness => {
            value == LEGACY_NA_SENTINEL
                || (value.fract() == 0.0 && (1.0..=5.0).contains(&value))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/validate.rs"]
mod tests;
