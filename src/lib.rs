//! # Lexistat
//!
//! Classic statistical NLP models for Rust: bag-of-words sentiment
//! classification and smoothed n-gram language modeling.
//!
//! ## Features
//!
//! - Regex tokenizer with lowercase and stop-word filters
//! - Unigram bag-of-words feature extraction
//! - Naive Bayes and L2-regularized logistic regression classifiers
//! - Unigram, bigram and trigram language models with `<UNK>` handling
//! - Add-one smoothed MLE and perplexity

pub mod analysis;
pub mod classification;
pub mod cli;
pub mod config;
pub mod error;
pub mod feature;
pub mod language_model;

pub mod prelude {
    pub use crate::analysis::tokenize;
    pub use crate::classification::{
        BinaryClassifier, ClassificationMetrics, ClassifierKind, LogisticRegressionClassifier,
        NaiveBayesClassifier,
    };
    pub use crate::error::{LexistatError, Result};
    pub use crate::feature::{FeatureExtractor, UnigramFeature};
    pub use crate::language_model::{NgramModel, NgramOrder};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
