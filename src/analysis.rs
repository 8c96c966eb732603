//! Text analysis: turns raw review text into token sequences.
//!
//! The classifiers and language models only ever see `Vec<String>` sentences.
//! This module produces them by lowercasing the text, splitting it with a
//! regex tokenizer and then running a chain of token filters:
//!
//! ```text
//! Raw Text → LowercaseCharFilter → RegexTokenizer → (StopFilter) → Vec<String>
//! ```
//!
//! # Examples
//!
//! ```
//! use lexistat::analysis::tokenize;
//!
//! let tokens = tokenize("I didn't like it... at all!").unwrap();
//! assert_eq!(tokens, vec!["i", "didn't", "like", "it", "...", "at", "all"]);
//! ```

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::error::Result;

/// Lowercase and tokenize `text` with the default pipeline.
pub fn tokenize(text: &str) -> Result<Vec<String>> {
    PipelineAnalyzer::standard()?.analyze_to_strings(text)
}

/// Tokenize every line of a corpus with the default pipeline.
pub fn tokenize_all<S: AsRef<str>>(texts: &[S]) -> Result<Vec<Vec<String>>> {
    let analyzer = PipelineAnalyzer::standard()?;
    texts
        .iter()
        .map(|text| analyzer.analyze_to_strings(text.as_ref()))
        .collect()
}
