//! OpenAI-compatible chat-completion client (OpenRouter by default).
//!
//! One request per call; there is no retry loop.

use crate::config::settings::LlmSettings;
use crate::utils::error::CheckerError;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

const APP_TITLE: &str = "cv-checker";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("authentication rejected (status {status}): {message}")]
    Unauthorized { status: u16, message: String },

    #[error("rate limited: {message}")]
    RateLimited { message: String },

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("model returned empty content")]
    EmptyContent,
}

impl From<LlmError> for CheckerError {
    fn from(err: LlmError) -> Self {
        CheckerError::RemoteEvaluation {
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: &'a serde_json::Value,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
    /// Some providers report upstream failures inside a 200 body.
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

impl ChatResponse {
    /// Text of the first choice, if any.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}

#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    completions_url: String,
    api_key: String,
}

impl ChatClient {
    pub fn new(settings: &LlmSettings, api_key: &str) -> Result<Self, LlmError> {
        let mut builder = Client::builder();
        if let Some(secs) = settings.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            completions_url: format!("{}/chat/completions", settings.base_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
        })
    }

    /// Sends one user message constrained by `response_format` and returns the reply text.
    pub async fn complete(
        &self,
        model: &str,
        prompt: &str,
        response_format: &serde_json::Value,
    ) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            response_format,
        };

        debug!("POST {} (model: {})", self.completions_url, model);

        let response = self
            .client
            .post(&self.completions_url)
            .bearer_auth(&self.api_key)
            .header("X-Title", APP_TITLE)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            warn!("Chat completion returned {}: {}", status, message);

            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LlmError::Unauthorized {
                    status: status.as_u16(),
                    message,
                },
                StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimited { message },
                _ => LlmError::Api {
                    status: status.as_u16(),
                    message,
                },
            });
        }

        let chat_response: ChatResponse = response.json().await?;

        if let Some(error) = chat_response.error {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: error.message,
            });
        }

        if let Some(usage) = &chat_response.usage {
            debug!(
                "Chat completion succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        match chat_response.text() {
            Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
            _ => Err(LlmError::EmptyContent),
        }
    }
}
