//! Tokens produced by the review tokenizer.
//!
//! Every [`Token`] carries the [`TokenKind`] the tokenizer matched it as, so
//! filters can treat words and punctuation differently.
//!
//! # Examples
//!
//! ```
//! use lexistat::analysis::token::{Token, TokenKind};
//!
//! let token = Token::matched("$12.50", TokenKind::Number, 3, 10..16);
//! assert_eq!(token.text, "$12.50");
//! assert_eq!(token.span, 10..16);
//! assert!(!token.kind.is_word());
//! ```

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Lexical class of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Dotted capital abbreviation such as `U.S.`
    Abbreviation,
    /// Number with optional currency sign and percent, e.g. `$12.50`, `40%`
    Number,
    /// Word, possibly with inner hyphens or apostrophes
    Word,
    /// `...`
    Ellipsis,
    /// A single punctuation mark
    Punctuation,
    /// Matched by a custom pattern without kind information
    Other,
}

impl TokenKind {
    /// Capture group names recognised in tokenizer patterns.
    pub const GROUPS: [(&'static str, TokenKind); 5] = [
        ("abbreviation", TokenKind::Abbreviation),
        ("number", TokenKind::Number),
        ("word", TokenKind::Word),
        ("ellipsis", TokenKind::Ellipsis),
        ("punctuation", TokenKind::Punctuation),
    ];

    /// Words and abbreviations carry lexical content.
    pub fn is_word(self) -> bool {
        matches!(self, TokenKind::Word | TokenKind::Abbreviation)
    }
}

/// One token of a review.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    /// Index in the tokenizer output.
    pub position: usize,
    /// Byte range in the input text.
    pub span: Range<usize>,
    /// Set by filters that keep a token but exclude it from output.
    pub stopped: bool,
}

impl Token {
    /// Token of unknown kind with an empty span, mostly for tests.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Self::matched(text, TokenKind::Other, position, 0..0)
    }

    /// Token as produced by a tokenizer match.
    pub fn matched<S: Into<String>>(
        text: S,
        kind: TokenKind,
        position: usize,
        span: Range<usize>,
    ) -> Self {
        Token {
            text: text.into(),
            kind,
            position,
            span,
            stopped: false,
        }
    }

    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Boxed iterator passed between the tokenizer and each filter.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_defaults() {
        let token = Token::new("hello", 4);
        assert_eq!(token.kind, TokenKind::Other);
        assert_eq!(token.position, 4);
        assert!(token.span.is_empty());
        assert!(!token.is_stopped());
        assert!(token.stop().is_stopped());
    }

    #[test]
    fn test_kind_is_word() {
        assert!(TokenKind::Word.is_word());
        assert!(TokenKind::Abbreviation.is_word());
        assert!(!TokenKind::Ellipsis.is_word());
        assert!(!TokenKind::Number.is_word());
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&TokenKind::Punctuation).unwrap();
        assert_eq!(json, "\"punctuation\"");
    }
}
