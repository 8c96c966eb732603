//! Lowercase filter.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Lowercases the text of every token that is not stopped.
///
/// ```
/// use lexistat::analysis::token::Token;
/// use lexistat::analysis::token_filter::{Filter, LowercaseFilter};
///
/// let tokens = vec![Token::new("GREAT", 0), Token::new("Film", 1)];
/// let lowered: Vec<String> = LowercaseFilter::new()
///     .filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .map(|token| token.text)
///     .collect();
///
/// assert_eq!(lowered, vec!["great", "film"]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    pub fn new() -> Self {
        LowercaseFilter
    }
}

fn lowercase(mut token: Token) -> Token {
    if token.is_stopped() {
        return token;
    }
    if token.text.is_ascii() {
        token.text.make_ascii_lowercase();
    } else {
        token.text = token.text.to_lowercase();
    }
    token
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(lowercase)))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
