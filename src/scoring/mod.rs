pub mod aggregate;
pub mod classify;
pub mod distribution;
pub mod normalize;
pub mod validate;

pub use aggregate::{ScoreSummary, compute_scores};
pub use classify::{classify, classify_benchmark};
pub use distribution::{Bucket, QuestionDistribution, build_all_distributions, build_distribution};
pub use normalize::Rating;
pub use validate::{RatingIssue, ValidationError, validate_ratings};
