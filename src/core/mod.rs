pub mod evaluator;
pub mod examples;
pub mod prompts;
pub mod session;

pub use crate::domain::model::{EvaluationMode, ExamplePair, LearnMode, SessionSummary};
pub use crate::domain::ports::{DocumentLoader, Evaluator, PageExtractor};
pub use crate::utils::error::Result;
