use crate::model::dimension::Dimension;
use serde::Serialize;

/// One selectable answer for a question.
#[derive(Debug, Clone, Copy)]
pub struct AnswerOption {
    pub value: f64,
    pub label: &'static str,
}

/// External percentile thresholds for one dimension's root question.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Benchmarks {
    pub p90: f64,
    pub p75: f64,
    pub p50: f64,
}

/// An independently answered item under the Effectiveness root question.
/// Sub-questions never carry their own benchmarks; they inherit the root's.
#[derive(Debug, Clone, Copy)]
pub struct SubQuestion {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub enum QuestionKind {
    /// A single-answer question: discrete 1-5 ordinal or a continuous
    /// slider domain expressed through its option values.
    Scale { options: &'static [AnswerOption] },
    /// The Effectiveness root: a container whose sub-questions are each
    /// answered individually.
    Effectiveness {
        options: &'static [AnswerOption],
        sub_questions: &'static [SubQuestion],
    },
}

/// One survey item, fixed at catalog-build time.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub dimension: Dimension,
    pub benchmarks: Option<Benchmarks>,
    pub kind: QuestionKind,
}

impl Question {
    pub fn is_effectiveness(&self) -> bool {
        matches!(self.kind, QuestionKind::Effectiveness { .. })
    }

    pub fn options(&self) -> &'static [AnswerOption] {
        match self.kind {
            QuestionKind::Scale { options } => options,
            QuestionKind::Effectiveness { options, .. } => options,
        }
    }

    /// Empty for scale questions.
    pub fn sub_questions(&self) -> &'static [SubQuestion] {
        match self.kind {
            QuestionKind::Scale { .. } => &[],
            QuestionKind::Effectiveness { sub_questions, .. } => sub_questions,
        }
    }
}
