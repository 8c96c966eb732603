//! Analyzer trait and the tokenizer + filter pipeline.
//!
//! ```text
//! Raw Text → Analyzer → Token Stream
//!             ↓
//!     CharFilter 1 … CharFilter N
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use crate::analysis::char_filter::{CharFilter, LowercaseCharFilter};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{Filter, StopFilter};
use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer};
use crate::config::TokenizerConfig;
use crate::error::Result;

/// Trait for analyzers that turn raw text into a token stream.
pub trait Analyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    fn name(&self) -> &'static str;

    /// Analyze `text` and keep only the text of tokens that were not stopped.
    fn analyze_to_strings(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .analyze(text)?
            .filter(|token| !token.is_stopped())
            .map(|token| token.text)
            .collect())
    }
}

/// An analyzer built from text filters, one tokenizer and token filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    char_filters: Vec<Arc<dyn CharFilter>>,
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field(
                "char_filters",
                &self.char_filters.iter().map(|stage| stage.name()).collect::<Vec<_>>(),
            )
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|stage| stage.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl PipelineAnalyzer {
    /// Pipeline with `tokenizer` and no filters.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            char_filters: Vec::new(),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Lowercase the text, then apply the default regex tokenizer.
    pub fn standard() -> Result<Self> {
        Ok(Self::new(Arc::new(RegexTokenizer::new()?)).add_char_filter(Arc::new(LowercaseCharFilter)))
    }

    /// Standard pipeline with English stop words removed.
    pub fn without_stop_words() -> Result<Self> {
        Ok(Self::standard()?.add_filter(Arc::new(StopFilter::new())))
    }

    /// Build a pipeline from tokenizer configuration.
    pub fn from_config(config: &TokenizerConfig) -> Result<Self> {
        let tokenizer = match &config.pattern {
            Some(pattern) => RegexTokenizer::with_pattern(pattern)?,
            None => RegexTokenizer::new()?,
        };
        let mut analyzer = Self::new(Arc::new(tokenizer));
        if config.lowercase {
            analyzer = analyzer.add_char_filter(Arc::new(LowercaseCharFilter));
        }
        Ok(analyzer)
    }

    /// Append a text filter; these run in insertion order before tokenizing.
    pub fn add_char_filter(mut self, filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(filter);
        self
    }

    /// Append a token filter; these run in insertion order after tokenizing.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let text = self
            .char_filters
            .iter()
            .fold(Cow::Borrowed(text), |text, stage| match text {
                Cow::Borrowed(borrowed) => stage.filter(borrowed),
                Cow::Owned(owned) => Cow::Owned(stage.filter(&owned).into_owned()),
            });

        self.filters
            .iter()
            .try_fold(self.tokenizer.tokenize(&text)?, |stream, stage| {
                stage.filter(stream)
            })
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_pipeline() {
        let analyzer = PipelineAnalyzer::standard().unwrap();
        let tokens = analyzer.analyze_to_strings("GREAT Movie, loved it!").unwrap();
        assert_eq!(tokens, vec!["great", "movie", ",", "loved", "it"]);
    }

    #[test]
    fn test_standard_pipeline_lowercases_before_splitting() {
        let analyzer = PipelineAnalyzer::standard().unwrap();

        let tokens = analyzer.analyze_to_strings("so did I.").unwrap();
        assert_eq!(tokens, vec!["so", "did", "i", "."]);

        let tokens = analyzer.analyze_to_strings("the U.S. film").unwrap();
        assert_eq!(tokens, vec!["the", "u", ".", "s", ".", "film"]);
    }

    #[test]
    fn test_pipeline_without_stop_words() {
        let analyzer = PipelineAnalyzer::without_stop_words().unwrap();
        let tokens = analyzer.analyze_to_strings("It was not the worst film").unwrap();
        assert_eq!(tokens, vec!["worst", "film"]);
        assert_eq!(analyzer.char_filters().len(), 1);
        assert_eq!(analyzer.filters().len(), 1);
    }

    #[test]
    fn test_pipeline_from_config() {
        let config = TokenizerConfig {
            pattern: Some(r"\S+".to_string()),
            lowercase: false,
        };
        let analyzer = PipelineAnalyzer::from_config(&config).unwrap();
        let tokens = analyzer.analyze_to_strings("Keep CASE, please").unwrap();
        assert_eq!(tokens, vec!["Keep", "CASE,", "please"]);
        assert!(analyzer.filters().is_empty());
        assert!(analyzer.char_filters().is_empty());
        assert_eq!(analyzer.tokenizer().name(), "regex");
    }
}
