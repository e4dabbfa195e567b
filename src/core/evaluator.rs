use crate::adapters::llm::ChatClient;
use crate::core::prompts::strip_json_fences;
use crate::domain::model::EvaluationMode;
use crate::domain::ports::Evaluator;
use crate::utils::error::Result;
use async_trait::async_trait;
use tracing::{debug, info};

/// Builds the prompt for a mode, calls the model once and validates the reply.
#[derive(Clone)]
pub struct PromptEngine {
    client: ChatClient,
    model: String,
}

impl PromptEngine {
    pub fn new(client: ChatClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Evaluator for PromptEngine {
    async fn evaluate(&self, text: &str, example: &str, mode: EvaluationMode) -> Result<String> {
        let prompt = mode.instruction(text, example);
        let response_format = mode.response_format();

        info!("Requesting {} evaluation from {}", mode, self.model);
        debug!("Prompt length: {} characters", prompt.len());

        let raw = self
            .client
            .complete(&self.model, &prompt, &response_format)
            .await?;

        let reply = strip_json_fences(&raw);
        mode.validate_reply(reply)?;
        Ok(reply.to_string())
    }
}
