use crate::utils::error::{CheckerError, Result};
use std::path::Path;

pub const DEFAULT_MODEL: &str = "google/gemma-3-27b-it:free";

/// Allow-list of model identifiers, one per line. Blank lines and `#` comments are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelCatalog {
    names: Vec<String>,
}

impl ModelCatalog {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CheckerError::Configuration {
            message: format!("Cannot read model list {}: {}", path.display(), e),
        })?;
        Ok(Self::parse(&content))
    }

    pub fn parse(content: &str) -> Self {
        let names = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect();
        Self { names }
    }

    pub fn contains(&self, model: &str) -> bool {
        self.names.iter().any(|name| name == model)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn ensure_allowed(&self, model: &str) -> Result<()> {
        if self.contains(model) {
            return Ok(());
        }
        Err(CheckerError::Configuration {
            message: format!(
                "Unknown model '{}'. Choose one of: {}",
                model,
                self.names.join(", ")
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_skips_blank_lines_and_comments() {
        let catalog = ModelCatalog::parse(
            "# free tier\ngoogle/gemma-3-27b-it:free\n\n  deepseek/deepseek-r1:free  \n",
        );
        assert_eq!(
            catalog.names(),
            &[
                "google/gemma-3-27b-it:free".to_string(),
                "deepseek/deepseek-r1:free".to_string()
            ]
        );
    }

    #[test]
    fn test_unknown_model_is_configuration_error() {
        let catalog = ModelCatalog::parse("google/gemma-3-27b-it:free\n");
        assert!(catalog.ensure_allowed(DEFAULT_MODEL).is_ok());

        match catalog.ensure_allowed("openai/gpt-4o") {
            Err(CheckerError::Configuration { message }) => {
                assert!(message.contains("openai/gpt-4o"));
                assert!(message.contains(DEFAULT_MODEL));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"model-a\nmodel-b\n").unwrap();

        let catalog = ModelCatalog::from_file(temp_file.path()).unwrap();
        assert!(catalog.contains("model-b"));
        assert!(!catalog.contains("model-c"));
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let result = ModelCatalog::from_file("/definitely/not/here/models.txt");
        assert!(matches!(result, Err(CheckerError::Configuration { .. })));
    }
}
