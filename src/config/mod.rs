pub mod models;
pub mod settings;

#[cfg(feature = "cli")]
use crate::domain::model::LearnMode;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "cv-checker")]
#[command(about = "Compare a CV with job advertisements using LLM models")]
pub struct CliConfig {
    /// Path or URL of the CV (PDF, text or markdown)
    #[arg(long)]
    pub cv: String,

    /// Whether prompts include a worked example
    #[arg(long = "learn_mode", alias = "learn-mode", value_enum, default_value_t = LearnMode::OneShot)]
    pub learn_mode: LearnMode,

    /// Model identifier, must be listed in the model list file
    #[arg(long = "model_type", alias = "model-type", default_value = models::DEFAULT_MODEL)]
    pub model_type: String,

    /// Settings file; defaults are used when it does not exist
    #[arg(long, default_value = "cv-checker.toml")]
    pub config: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("cv", &self.cv)?;
        validation::validate_path("cv", &self.cv)?;
        validation::validate_non_empty_string("model_type", &self.model_type)?;
        validation::validate_path("config", &self.config)?;
        Ok(())
    }
}
