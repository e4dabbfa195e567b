use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether prompts carry a worked example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum LearnMode {
    #[cfg_attr(feature = "cli", value(name = "zero-shot"))]
    ZeroShot,
    #[default]
    #[cfg_attr(feature = "cli", value(name = "one-shot"))]
    OneShot,
}

impl fmt::Display for LearnMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LearnMode::ZeroShot => write!(f, "zero-shot"),
            LearnMode::OneShot => write!(f, "one-shot"),
        }
    }
}

/// The worked examples used for one-shot prompting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamplePair {
    pub info: String,
    pub compare: String,
}

impl ExamplePair {
    pub fn for_mode(&self, mode: EvaluationMode) -> &str {
        match mode {
            EvaluationMode::Extract => &self.info,
            EvaluationMode::Compare => &self.compare,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationMode {
    /// Pull responsibilities and requirements out of a job posting.
    Extract,
    /// Score a job description against a CV.
    Compare,
}

impl fmt::Display for EvaluationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationMode::Extract => write!(f, "extract"),
            EvaluationMode::Compare => write!(f, "compare"),
        }
    }
}

/// Reply shape for [`EvaluationMode::Extract`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobRequirements {
    #[serde(rename = "Requirements")]
    pub requirements: Vec<String>,
    #[serde(rename = "Responsibilities")]
    pub responsibilities: Vec<String>,
}

/// Reply shape for [`EvaluationMode::Compare`]. Percentages are 0..=100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Comparison {
    #[serde(rename = "The Semantic Similarity Percentage")]
    pub semantic_similarity: f64,
    #[serde(rename = "Similar keywords")]
    pub similar_keywords: Vec<String>,
    #[serde(rename = "Different keywords")]
    pub different_keywords: Vec<String>,
    #[serde(rename = "Similarity percentage of the keywords")]
    pub keyword_similarity: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub postings_processed: usize,
    pub postings_failed: usize,
}
