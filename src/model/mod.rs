pub mod dimension;
pub mod question;
pub mod response;
pub mod tier;

pub use dimension::Dimension;
pub use question::{AnswerOption, Benchmarks, Question, QuestionKind, SubQuestion};
pub use response::Response;
pub use tier::Tier;
