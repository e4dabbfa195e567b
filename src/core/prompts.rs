// Prompt templates, output schemas and reply validation for each evaluation mode.

use crate::domain::model::{Comparison, EvaluationMode, JobRequirements};
use crate::utils::error::{CheckerError, Result};
use regex::{Captures, Regex};
use serde_json::{json, Value};
use std::sync::OnceLock;

const SCHEMA_NAME: &str = "Output";

const EXTRACT_TEMPLATE: &str = "Please follow the example below exactly as shown and do not add any extra information or details.
If the text is not in English, translate it to English first. Then parse me Responsibilities and Requirements from the following text:

Example:

{example}

Now, given the following job description, extract the 'Responsibilities' and 'Requirements' in the same format as the example above:

{text}";

const COMPARE_TEMPLATE: &str = "Please follow the example below exactly as shown and do not add any extra information or details.
Only include the similar keywords that are in both job description and CV, and only include the keywords that are in the job description but not in the CV.

Example:

{example}

Now, given the following **Job Description** and **CV**, compare in the same format as the example above:

{text}";

pub const SEMANTIC_SIMILARITY_FIELD: &str = "The Semantic Similarity Percentage";
pub const SIMILAR_KEYWORDS_FIELD: &str = "Similar keywords";
pub const DIFFERENT_KEYWORDS_FIELD: &str = "Different keywords";
pub const KEYWORD_SIMILARITY_FIELD: &str = "Similarity percentage of the keywords";

fn string_list(description: &str) -> Value {
    json!({
        "type": "array",
        "items": { "type": "string" },
        "description": description
    })
}

// Range is checked in `validate_reply`; not every provider accepts bounds in strict mode.
fn percentage(description: &str) -> Value {
    json!({
        "type": "number",
        "description": description
    })
}

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{(example|text)\}").expect("template pattern is valid"))
}

impl EvaluationMode {
    /// Builds the user message. An empty `example` yields a zero-shot prompt.
    /// Placeholders are filled in one pass, so braces inside the inserted text stay literal.
    pub fn instruction(&self, text: &str, example: &str) -> String {
        let template = match self {
            EvaluationMode::Extract => EXTRACT_TEMPLATE,
            EvaluationMode::Compare => COMPARE_TEMPLATE,
        };
        placeholder_regex()
            .replace_all(template, |caps: &Captures| match &caps[1] {
                "example" => example,
                _ => text,
            })
            .into_owned()
    }

    pub fn schema(&self) -> Value {
        match self {
            EvaluationMode::Extract => json!({
                "type": "object",
                "properties": {
                    "Requirements": string_list("Requirement for the job"),
                    "Responsibilities": string_list("Future responsibilities in the job")
                },
                "required": ["Requirements", "Responsibilities"],
                "additionalProperties": false
            }),
            EvaluationMode::Compare => json!({
                "type": "object",
                "properties": {
                    SEMANTIC_SIMILARITY_FIELD: percentage("the value is in Percentage"),
                    SIMILAR_KEYWORDS_FIELD: string_list("Similar keywords between the job and CV"),
                    DIFFERENT_KEYWORDS_FIELD: string_list("Different keywords between the job and CV"),
                    KEYWORD_SIMILARITY_FIELD: percentage("the value is in Percentage")
                },
                "required": [
                    SEMANTIC_SIMILARITY_FIELD,
                    SIMILAR_KEYWORDS_FIELD,
                    DIFFERENT_KEYWORDS_FIELD,
                    KEYWORD_SIMILARITY_FIELD
                ],
                "additionalProperties": false
            }),
        }
    }

    /// The `response_format` object sent with the chat request.
    pub fn response_format(&self) -> Value {
        json!({
            "type": "json_schema",
            "json_schema": {
                "name": SCHEMA_NAME,
                "strict": true,
                "schema": self.schema()
            }
        })
    }

    /// Checks that `reply` parses into this mode's reply shape.
    pub fn validate_reply(&self, reply: &str) -> Result<()> {
        match self {
            EvaluationMode::Extract => {
                self.parse_reply::<JobRequirements>(reply)?;
            }
            EvaluationMode::Compare => {
                let comparison = self.parse_reply::<Comparison>(reply)?;
                for (field, value) in [
                    (SEMANTIC_SIMILARITY_FIELD, comparison.semantic_similarity),
                    (KEYWORD_SIMILARITY_FIELD, comparison.keyword_similarity),
                ] {
                    if !(0.0..=100.0).contains(&value) {
                        return Err(self.violation(format!(
                            "'{}' must be between 0 and 100, got {}",
                            field, value
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    fn parse_reply<T: serde::de::DeserializeOwned>(&self, reply: &str) -> Result<T> {
        serde_json::from_str(reply).map_err(|e| self.violation(e))
    }

    fn violation(&self, message: impl ToString) -> CheckerError {
        CheckerError::SchemaViolation {
            mode: self.to_string(),
            message: message.to_string(),
        }
    }
}

/// Strips ```json ... ``` or ``` ... ``` fences some models wrap around JSON.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));

    match inner {
        Some(stripped) => {
            let stripped = stripped.trim_start();
            stripped
                .strip_suffix("```")
                .map(str::trim)
                .unwrap_or(stripped)
        }
        None => text,
    }
}

/// Input for the compare step: the extracted job requirements followed by the CV.
pub fn comparison_input(job_description: &str, cv_text: &str) -> String {
    format!("Job Description:\n{}\nCV:\n{}", job_description, cv_text)
}
