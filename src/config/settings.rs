use crate::utils::error::{CheckerError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";
pub const BASE_URL_ENV: &str = "OPENROUTER_BASE_URL";

/// Runtime settings, read once at startup from an optional TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub llm: LlmSettings,
    pub browser: BrowserSettings,
    pub files: FileSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    /// No timeout when unset.
    pub request_timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserSettings {
    pub settle_delay_ms: u64,
    pub element_timeout_seconds: u64,
    pub chrome_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSettings {
    pub models_file: String,
    pub examples_file: String,
    pub download_dir: String,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            request_timeout_seconds: None,
        }
    }
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            settle_delay_ms: 2000,
            element_timeout_seconds: 30,
            chrome_path: None,
        }
    }
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            models_file: "free_model_names.txt".to_string(),
            examples_file: "examples.json".to_string(),
            download_dir: ".".to_string(),
        }
    }
}

impl Settings {
    /// Loads `path` when it exists, otherwise starts from defaults. Environment
    /// variables fill in the API key and base URL the file leaves open.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_env(path, |name| std::env::var(name).ok())
    }

    /// Like [`Settings::load`], resolving variables through `env`.
    pub fn load_with_env<P, F>(path: P, env: F) -> Result<Self>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();
        let mut settings = if path.exists() {
            tracing::debug!("Loading settings from {}", path.display());
            let content = std::fs::read_to_string(path)?;
            Self::parse_toml(&content, &env)?
        } else {
            tracing::debug!("No settings file at {}, using defaults", path.display());
            Self::default()
        };
        settings.apply_env_overrides(&env);
        Ok(settings)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse_toml(content, &|name: &str| std::env::var(name).ok())
    }

    fn parse_toml(content: &str, env: &dyn Fn(&str) -> Option<String>) -> Result<Self> {
        let processed_content = substitute_env_vars(content, env);

        toml::from_str(&processed_content).map_err(|e| CheckerError::Configuration {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// A literal key in the file wins; an empty or unresolved one falls back to
    /// `OPENROUTER_API_KEY`. `OPENROUTER_BASE_URL` always wins when set.
    fn apply_env_overrides(&mut self, env: &dyn Fn(&str) -> Option<String>) {
        let key_is_unset = match self.llm.api_key.as_deref() {
            None => true,
            Some(key) => key.trim().is_empty() || is_unresolved_placeholder(key),
        };
        if key_is_unset {
            self.llm.api_key = env(API_KEY_ENV);
        }

        if let Some(base_url) = env(BASE_URL_ENV) {
            self.llm.base_url = base_url;
        }
    }

    pub fn api_key(&self) -> Result<&str> {
        let key = validation::validate_required_field("llm.api_key", &self.llm.api_key)?;
        validation::validate_non_empty_string("llm.api_key", key)?;
        Ok(key.as_str())
    }

    pub fn models_file(&self) -> &Path {
        Path::new(&self.files.models_file)
    }

    pub fn examples_file(&self) -> &Path {
        Path::new(&self.files.examples_file)
    }

    pub fn download_dir(&self) -> &Path {
        Path::new(&self.files.download_dir)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("llm.base_url", &self.llm.base_url)?;
        self.api_key()?;

        if let Some(timeout) = self.llm.request_timeout_seconds {
            validation::validate_at_least("llm.request_timeout_seconds", timeout, 1)?;
        }

        validation::validate_range("browser.settle_delay_ms", self.browser.settle_delay_ms, 0, 60_000)?;
        validation::validate_at_least(
            "browser.element_timeout_seconds",
            self.browser.element_timeout_seconds,
            1,
        )?;

        validation::validate_path("files.models_file", &self.files.models_file)?;
        validation::validate_path("files.examples_file", &self.files.examples_file)?;
        validation::validate_path("files.download_dir", &self.files.download_dir)?;

        Ok(())
    }
}

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid"))
}

/// Replaces `${VAR}` with the variable's value; unknown variables are left as-is.
fn substitute_env_vars(content: &str, env: &dyn Fn(&str) -> Option<String>) -> String {
    placeholder_regex()
        .replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            env(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
        })
        .into_owned()
}

fn is_unresolved_placeholder(value: &str) -> bool {
    placeholder_regex().is_match(value)
}
