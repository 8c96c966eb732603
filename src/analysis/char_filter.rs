//! Text normalization applied before the tokenizer sees the input.
//!
//! Token spans index into the filtered text, not the raw input.

use std::borrow::Cow;

/// Rewrites raw text ahead of tokenization.
pub trait CharFilter: Send + Sync {
    fn filter<'a>(&self, input: &'a str) -> Cow<'a, str>;

    /// Short identifier shown in the analyzer's `Debug` output.
    fn name(&self) -> &'static str;
}

/// Lowercases the whole input.
///
/// Running this before the default pattern means the uppercase abbreviation
/// branch never matches, so "U.S." splits into letters and periods and a
/// sentence-final "I." yields `i` and `.`.
///
/// ```
/// use lexistat::analysis::char_filter::{CharFilter, LowercaseCharFilter};
///
/// assert_eq!(LowercaseCharFilter.filter("Great MOVIE"), "great movie");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct LowercaseCharFilter;

impl CharFilter for LowercaseCharFilter {
    fn filter<'a>(&self, input: &'a str) -> Cow<'a, str> {
        if input.chars().any(char::is_uppercase) {
            Cow::Owned(input.to_lowercase())
        } else {
            Cow::Borrowed(input)
        }
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_borrows_when_unchanged() {
        assert!(matches!(
            LowercaseCharFilter.filter("already lower, 42%"),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn test_lowercase_non_ascii() {
        assert_eq!(LowercaseCharFilter.filter("ÉTÉ Was Fine"), "été was fine");
    }
}
