//! Stream-to-stream token transformations applied after tokenization.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A stage of the analysis pipeline that rewrites, drops or marks tokens.
pub trait Filter: Send + Sync {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Short identifier shown in the analyzer's `Debug` output.
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod stop;

pub use lowercase::LowercaseFilter;
pub use stop::{StopFilter, StopMode};
