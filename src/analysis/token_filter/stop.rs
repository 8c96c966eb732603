//! Stop-word filter.
//!
//! Function words (pronouns, auxiliaries, articles, prepositions and their
//! contractions) carry little sentiment, so the filtered feature extractor
//! and the `without_stop_words` analyzer drop them.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default English stop words.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can't", "cannot", "could", "couldn't", "did", "didn't", "do", "does",
    "doesn't", "doing", "don't", "down", "during", "each", "few", "for", "from", "further", "had",
    "hadn't", "has", "hasn't", "have", "haven't", "having", "he", "he'd", "he'll", "he's", "her",
    "here", "here's", "hers", "herself", "him", "himself", "his", "how", "how's", "i", "i'd",
    "i'll", "i'm", "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself",
    "let's", "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of", "off",
    "on", "once", "only", "or", "other", "ought", "our", "ours", "ourselves", "out", "over", "own",
    "same", "shan't", "she", "she'd", "she'll", "she's", "should", "shouldn't", "so", "some",
    "such", "than", "that", "that's", "the", "their", "theirs", "them", "themselves", "then",
    "there", "there's", "these", "they", "they'd", "they'll", "they're", "they've", "this",
    "those", "through", "to", "too", "under", "until", "up", "very", "was", "wasn't", "we", "we'd",
    "we'll", "we're", "we've", "were", "weren't", "what", "what's", "when", "when's", "where",
    "where's", "which", "while", "who", "who's", "whom", "why", "why's", "with", "won't", "would",
    "wouldn't", "you", "you'd", "you'll", "you're", "you've", "your", "yours", "yourself",
    "yourselves",
];

static ENGLISH_STOP_WORDS_SET: LazyLock<Arc<HashSet<String>>> = LazyLock::new(|| {
    Arc::new(ENGLISH_STOP_WORDS.iter().map(|word| word.to_string()).collect())
});

/// What happens to a token that is a stop word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StopMode {
    /// Drop it from the stream.
    #[default]
    Remove,
    /// Keep it but mark it stopped.
    Mark,
}

/// Removes (or marks) tokens whose text is in a stop-word set.
///
/// Matching is exact, so lowercase the text (or the tokens) first.
///
/// ```
/// use lexistat::analysis::token::Token;
/// use lexistat::analysis::token_filter::{Filter, StopFilter};
///
/// let tokens = vec![
///     Token::new("the", 0),
///     Token::new("plot", 1),
///     Token::new("was", 2),
///     Token::new("dull", 3),
/// ];
/// let kept: Vec<String> = StopFilter::new()
///     .filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .map(|token| token.text)
///     .collect();
///
/// assert_eq!(kept, vec!["plot", "dull"]);
/// ```
#[derive(Clone, Debug)]
pub struct StopFilter {
    words: Arc<HashSet<String>>,
    mode: StopMode,
}

impl StopFilter {
    /// Filter for [`ENGLISH_STOP_WORDS`].
    pub fn new() -> Self {
        StopFilter {
            words: Arc::clone(&ENGLISH_STOP_WORDS_SET),
            mode: StopMode::Remove,
        }
    }

    /// Filter for a custom word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            words: Arc::new(words.into_iter().map(Into::into).collect()),
            mode: StopMode::Remove,
        }
    }

    pub fn with_mode(mut self, mode: StopMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> StopMode {
        self.mode
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let words = Arc::clone(&self.words);
        let mode = self.mode;

        Ok(Box::new(tokens.filter_map(move |token| {
            if token.is_stopped() || !words.contains(&token.text) {
                return Some(token);
            }
            match mode {
                StopMode::Remove => None,
                StopMode::Mark => Some(token.stop()),
            }
        })))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
