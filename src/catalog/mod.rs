pub mod defs;

use crate::error::ScorecardError;
use crate::model::dimension::Dimension;
use crate::model::question::{Benchmarks, Question};

/// Immutable question catalog, built once at startup and passed
/// explicitly to every scoring function.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    questions: &'static [Question],
}

impl Catalog {
    pub fn core4() -> Self {
        Self {
            questions: defs::core4_questions(),
        }
    }

    /// Root questions in insertion order.
    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    pub fn question(&self, key: &str) -> Option<&'static Question> {
        self.questions.iter().find(|q| q.key == key)
    }

    /// Lookup of a key every caller expects to exist. A miss is a
    /// programming error and surfaces loudly instead of being absorbed.
    pub fn require(&self, key: &str) -> Result<&'static Question, ScorecardError> {
        self.question(key).ok_or_else(|| ScorecardError::UnknownQuestion {
            key: key.to_string(),
        })
    }

    /// Root question keys in insertion order.
    pub fn question_keys(&self) -> Vec<&'static str> {
        self.questions.iter().map(|q| q.key).collect()
    }

    /// Every key a submittable ratings map must answer: each scale
    /// question plus each effectiveness sub-question. The effectiveness
    /// root itself is a container and takes no answer.
    pub fn required_keys(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        for q in self.questions {
            if q.is_effectiveness() {
                keys.extend(q.sub_questions().iter().map(|s| s.key));
            } else {
                keys.push(q.key);
            }
        }
        keys
    }

    /// The root question an answer key belongs to, whether the key is a
    /// scale question or one of the effectiveness sub-keys.
    pub fn question_for_answer(&self, key: &str) -> Option<&'static Question> {
        if let Some(q) = self.question(key) {
            if q.is_effectiveness() {
                // The root is not directly answerable.
                return None;
            }
            return Some(q);
        }
        self.questions
            .iter()
            .find(|q| q.sub_questions().iter().any(|s| s.key == key))
    }

    pub fn benchmarks_for(&self, dimension: Dimension) -> Option<Benchmarks> {
        self.questions
            .iter()
            .find(|q| q.dimension == dimension)
            .and_then(|q| q.benchmarks)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/catalog/tests.rs"]
mod tests;
