//! N-gram language models with `<UNK>` substitution and add-one smoothing.
//!
//! Sentences are token sequences. Tokens seen fewer than
//! [`NgramConfig::min_frequency`] times in training collapse to `<UNK>`, and
//! every sentence gets a trailing `<STOP>`.
//!
//! # Example
//!
//! ```
//! use lexistat::language_model::NgramModel;
//!
//! let train = vec![vec!["a", "a", "b"], vec!["a", "c"]];
//! let mut model = NgramModel::unigram();
//! model.fit(&train).unwrap();
//!
//! // "a" occurs three times and is kept; "b" and "c" become <UNK>
//! assert_eq!(model.vocabulary().unwrap().size(), 3);
//! let p = model.mle(&["<UNK>"]).unwrap();
//! assert!((p - 3.0 / 8.0).abs() < 1e-12);
//! ```

mod ngram;
mod vocabulary;

use serde::{Deserialize, Serialize};

pub use ngram::{NgramModel, NgramOrder};
pub use vocabulary::{NgramVocabulary, STOP, STOP_ID, UNK, UNK_ID};

/// N-gram model settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NgramConfig {
    /// Minimum training frequency for a token to keep its own vocabulary entry.
    pub min_frequency: usize,
}

impl Default for NgramConfig {
    fn default() -> Self {
        NgramConfig { min_frequency: 3 }
    }
}
