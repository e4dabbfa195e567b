pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{browser::HeadlessBrowserExtractor, document::FileDocumentLoader, llm::ChatClient};
pub use config::{models::ModelCatalog, settings::Settings};
pub use core::{evaluator::PromptEngine, session::Session};
pub use utils::error::{CheckerError, Result};
