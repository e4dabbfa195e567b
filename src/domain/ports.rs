use crate::domain::model::EvaluationMode;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Turns a local path or a URL to a résumé into plain text.
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    async fn load_document(&self, location: &str) -> Result<String>;
}

/// Renders a job posting and returns the visible body text.
#[async_trait]
pub trait PageExtractor: Send + Sync {
    async fn extract_page_text(&self, url: &str) -> Result<String>;
}

/// Sends a prompt for `mode` to the model and returns its validated reply.
#[async_trait]
pub trait Evaluator: Send + Sync {
    async fn evaluate(&self, text: &str, example: &str, mode: EvaluationMode) -> Result<String>;
}
