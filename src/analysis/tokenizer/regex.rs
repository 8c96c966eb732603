//! Regex tokenizer for review text.

use regex::{Captures, Regex};

use super::Tokenizer;
use crate::analysis::token::{Token, TokenKind, TokenStream};
use crate::error::{LexistatError, Result};

/// Default token grammar for English review text.
///
/// Alternatives are tried left to right at each position, and each one is a
/// named group so matches can be tagged with their [`TokenKind`]. Characters
/// matched by no alternative (whitespace, `!`, ...) are dropped.
pub const DEFAULT_PATTERN: &str = r#"(?x)
    (?P<abbreviation>(?:[A-Z]\.)+)
    |(?P<number>\$?\d+(?:\.\d+)?%?)
    |(?P<word>\w+(?:[-']\w+)*)
    |(?P<ellipsis>\.\.\.)
    |(?P<punctuation>[.,;"'?():-_`])
"#;

/// Tokenizer that emits every match of a regular expression.
///
/// Patterns may use the group names in [`TokenKind::GROUPS`] to classify
/// matches; otherwise tokens get [`TokenKind::Other`].
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    regex: Regex,
    kinds: Vec<(usize, TokenKind)>,
}

impl RegexTokenizer {
    /// Tokenizer for [`DEFAULT_PATTERN`].
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_PATTERN)
    }

    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| LexistatError::analysis(format!("Invalid regex pattern: {e}")))?;

        let kinds = regex
            .capture_names()
            .enumerate()
            .filter_map(|(index, name)| {
                let name = name?;
                TokenKind::GROUPS
                    .iter()
                    .find(|(group, _)| *group == name)
                    .map(|&(_, kind)| (index, kind))
            })
            .collect();

        Ok(RegexTokenizer { regex, kinds })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    fn kind_of(&self, captures: &Captures<'_>) -> TokenKind {
        self.kinds
            .iter()
            .find(|(index, _)| captures.get(*index).is_some())
            .map_or(TokenKind::Other, |&(_, kind)| kind)
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::new().expect("default pattern is valid")
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        for captures in self.regex.captures_iter(text) {
            let Some(matched) = captures.get(0) else {
                continue;
            };
            tokens.push(Token::matched(
                matched.as_str(),
                self.kind_of(&captures),
                tokens.len(),
                matched.range(),
            ));
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(tokenizer: &RegexTokenizer, input: &str) -> Vec<(String, TokenKind)> {
        tokenizer
            .tokenize(input)
            .unwrap()
            .map(|token| (token.text, token.kind))
            .collect()
    }

    #[test]
    fn test_default_pattern_token_classes() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens = tokenize(&tokenizer, "The U.S. price rose 40% to $12.50...");

        let texts: Vec<&str> = tokens.iter().map(|(text, _)| text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["The", "U.S.", "price", "rose", "40%", "to", "$12.50", "..."]
        );
        assert_eq!(tokens[1].1, TokenKind::Abbreviation);
        assert_eq!(tokens[4].1, TokenKind::Number);
        assert_eq!(tokens[5].1, TokenKind::Word);
        assert_eq!(tokens[7].1, TokenKind::Ellipsis);
    }

    #[test]
    fn test_hyphens_apostrophes_and_punctuation() {
        let tokenizer = RegexTokenizer::new().unwrap();
        assert_eq!(
            tokenize(&tokenizer, "well-made, isn't it?"),
            vec![
                ("well-made".to_string(), TokenKind::Word),
                (",".to_string(), TokenKind::Punctuation),
                ("isn't".to_string(), TokenKind::Word),
                ("it".to_string(), TokenKind::Word),
                ("?".to_string(), TokenKind::Punctuation),
            ]
        );
    }

    #[test]
    fn test_positions_and_spans() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("loved it!").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].span, 0..5);
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].span, 6..8);
    }

    #[test]
    fn test_custom_pattern_without_groups() {
        let tokenizer = RegexTokenizer::with_pattern(r"\S+").unwrap();
        assert_eq!(
            tokenize(&tokenizer, "so-so film!"),
            vec![
                ("so-so".to_string(), TokenKind::Other),
                ("film!".to_string(), TokenKind::Other),
            ]
        );
        assert_eq!(tokenizer.pattern(), r"\S+");
    }

    #[test]
    fn test_invalid_pattern() {
        let err = RegexTokenizer::with_pattern("(unclosed").unwrap_err();
        assert!(matches!(err, LexistatError::Analysis(_)));
    }
}
