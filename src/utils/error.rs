use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("Failed to load document '{location}': {message}")]
    DocumentLoad { location: String, message: String },

    #[error("Failed to extract page text from '{url}': {message}")]
    PageExtraction { url: String, message: String },

    #[error("Remote evaluation failed: {message}")]
    RemoteEvaluation { message: String },

    #[error("Model reply does not match the {mode} schema: {message}")]
    SchemaViolation { mode: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CheckerError {
    pub fn document(location: impl Into<String>, message: impl ToString) -> Self {
        Self::DocumentLoad {
            location: location.into(),
            message: message.to_string(),
        }
    }

    pub fn page(url: impl Into<String>, message: impl ToString) -> Self {
        Self::PageExtraction {
            url: url.into(),
            message: message.to_string(),
        }
    }

    pub fn remote(message: impl ToString) -> Self {
        Self::RemoteEvaluation {
            message: message.to_string(),
        }
    }

    pub fn config(message: impl ToString) -> Self {
        Self::Configuration {
            message: message.to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::DocumentLoad { location, .. } => {
                format!("Could not read the CV at '{}'", location)
            }
            Self::PageExtraction { url, .. } => {
                format!("Could not read the job posting at '{}'", url)
            }
            Self::RemoteEvaluation { .. } => "The model service did not return a result".to_string(),
            Self::SchemaViolation { mode, .. } => {
                format!("The model returned a malformed {} result", mode)
            }
            Self::Configuration { message } => message.clone(),
            Self::InvalidConfigValue { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            Self::MissingConfig { field } => format!("Missing setting '{}'", field),
            Self::Io(e) => format!("File operation failed: {}", e),
            Self::Serialization(e) => format!("Malformed JSON: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::DocumentLoad { .. } => {
                "Check that the CV path exists or that the URL points to a PDF or text file"
            }
            Self::PageExtraction { .. } => {
                "Check the link and that Chrome/Chromium is installed, then try again"
            }
            Self::RemoteEvaluation { .. } => {
                "Check OPENROUTER_API_KEY, the network connection and the provider's rate limits"
            }
            Self::SchemaViolation { .. } => "Try again or choose a different --model_type",
            Self::Configuration { .. } | Self::InvalidConfigValue { .. } => {
                "Review the command line flags and cv-checker.toml"
            }
            Self::MissingConfig { .. } => "Set the value in cv-checker.toml or the environment",
            Self::Io(_) => "Check file permissions and available disk space",
            Self::Serialization(_) => "Regenerate the file with the write-examples tool",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Configuration { .. }
            | Self::InvalidConfigValue { .. }
            | Self::MissingConfig { .. } => 2,
            Self::DocumentLoad { .. } => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckerError>;
