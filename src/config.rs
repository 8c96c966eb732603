//! Configuration for the classifiers, language models and tokenizer.
//!
//! Every section has defaults matching the reference hyperparameters, so an
//! empty JSON object is a valid configuration file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::classification::logistic_regression::LogisticRegressionConfig;
use crate::error::Result;
use crate::language_model::NgramConfig;

/// Tokenizer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Custom regex pattern; `None` uses the default review grammar.
    pub pattern: Option<String>,
    /// Lowercase the text before tokenization.
    pub lowercase: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            pattern: None,
            lowercase: true,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexistatConfig {
    /// Tokenizer configuration.
    pub tokenizer: TokenizerConfig,
    /// Logistic regression hyperparameters.
    pub logistic_regression: LogisticRegressionConfig,
    /// N-gram language model configuration.
    pub language_model: NgramConfig,
}

impl LexistatConfig {
    /// Load configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
