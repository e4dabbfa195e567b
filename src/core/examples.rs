//! Worked examples for one-shot prompting, kept in a small JSON file.

use crate::domain::model::{ExamplePair, LearnMode};
use crate::utils::error::Result;
use std::path::Path;
use tracing::{debug, info};

const INFO_EXAMPLE: &str = include_str!("../../assets/info_example.txt");
const COMPARE_EXAMPLE: &str = include_str!("../../assets/compare_example.txt");

/// The built-in example pair shipped with the tool.
pub fn default_examples() -> ExamplePair {
    ExamplePair {
        info: INFO_EXAMPLE.to_string(),
        compare: COMPARE_EXAMPLE.to_string(),
    }
}

pub fn empty_examples() -> ExamplePair {
    ExamplePair::default()
}

/// Writes the built-in pair to `path` as pretty JSON and returns it.
pub fn write_examples<P: AsRef<Path>>(path: P) -> Result<ExamplePair> {
    let path = path.as_ref();
    let examples = default_examples();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(&examples)?)?;

    info!("Wrote examples to {}", path.display());
    Ok(examples)
}

pub fn load_examples<P: AsRef<Path>>(path: P) -> Result<ExamplePair> {
    let path = path.as_ref();
    debug!("Loading examples from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Zero-shot never touches the disk. One-shot creates the file first if missing.
pub fn examples_for<P: AsRef<Path>>(mode: LearnMode, path: P) -> Result<ExamplePair> {
    match mode {
        LearnMode::ZeroShot => Ok(empty_examples()),
        LearnMode::OneShot => {
            let path = path.as_ref();
            if !path.exists() {
                info!("{} not found, creating it from the built-in examples", path.display());
                write_examples(path)?;
            }
            load_examples(path)
        }
    }
}
