//! Splitting raw review text into tokens.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// First stage of the analysis pipeline.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Short identifier shown in the analyzer's `Debug` output.
    fn name(&self) -> &'static str;
}

pub mod regex;

pub use self::regex::RegexTokenizer;
