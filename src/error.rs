use thiserror::Error;

use crate::scoring::validate::ValidationError;

/// Process exit codes: 0 success, 1 generic failure, 2 usage/validation,
/// 3 data/store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    Failure = 1,
    Usage = 2,
    Data = 3,
}

impl From<ExitStatus> for i32 {
    fn from(code: ExitStatus) -> i32 {
        code as i32
    }
}

#[derive(Error, Debug)]
pub enum ScorecardError {
    /// Incomplete or out-of-domain ratings, caught before any
    /// persistence attempt. Surfaced to the user, never fatal.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Lookup of a question key the fixed catalog does not contain.
    /// A programming error; fails loudly rather than being absorbed.
    #[error("unknown question key: {key}")]
    UnknownQuestion { key: String },

    #[error("survey not found: {survey_id}")]
    SurveyNotFound { survey_id: String },

    #[error("survey already exists: {survey_id}")]
    SurveyExists { survey_id: String },

    #[error("invalid rating argument: {0} (expected key=value)")]
    InvalidRatingArg(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScorecardError {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            ScorecardError::Validation(_) | ScorecardError::InvalidRatingArg(_) => {
                ExitStatus::Usage
            }
            ScorecardError::SurveyNotFound { .. } | ScorecardError::SurveyExists { .. } => {
                ExitStatus::Data
            }
            ScorecardError::UnknownQuestion { .. }
            | ScorecardError::Io(_)
            | ScorecardError::Json(_) => ExitStatus::Failure,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScorecardError>;
