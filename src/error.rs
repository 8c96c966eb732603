//! Error types for the Lexistat library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`LexistatError`] enum. Shape problems with feature matrices, label
//! problems, and numeric degeneracies each get their own variant so callers
//! can tell a bad input apart from a computation that cannot proceed.
//!
//! # Examples
//!
//! ```
//! use lexistat::error::{LexistatError, Result};
//!
//! fn check_order(n: usize) -> Result<usize> {
//!     if (1..=3).contains(&n) {
//!         Ok(n)
//!     } else {
//!         Err(LexistatError::invalid_argument(format!("unsupported order {n}")))
//!     }
//! }
//!
//! assert!(check_order(2).is_ok());
//! assert!(matches!(check_order(4), Err(LexistatError::InvalidArgument(_))));
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lexistat operations.
///
/// This enum uses the `thiserror` crate for the `Error` implementation and
/// provides constructor helpers for the string-carrying variants.
#[derive(Error, Debug)]
pub enum LexistatError {
    /// I/O errors (reading corpora, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed JSON configuration
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Bad tokenizer pattern or a failing filter
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Rows of a feature matrix do not share one width
    #[error("Inconsistent feature dimension at row {row}: expected {expected}, found {found}")]
    InconsistentDimension {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Input width differs from the width the model was fitted on
    #[error("Feature dimension mismatch: model has {expected} features, input has {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// Feature matrix and label sequence disagree on sample count
    #[error("Length mismatch: {samples} feature rows but {labels} labels")]
    LengthMismatch { samples: usize, labels: usize },

    /// A label outside {0, 1}
    #[error("Invalid label {label} at index {index}: labels must be 0 or 1")]
    InvalidLabel { index: usize, label: u8 },

    /// A class has no training samples
    #[error("Class {label} has no training samples")]
    EmptyClass { label: u8 },

    /// Fit was called with no samples or sentences
    #[error("Training set is empty")]
    EmptyTrainingSet,

    /// Perplexity was requested over a test set with nothing to score
    #[error("Test set contains no scorable tokens")]
    EmptyTestSet,

    /// A model was used before fit
    #[error("Model not fitted: {0}")]
    NotFitted(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Numeric failure (non-finite intermediate, zero denominator)
    #[error("Computation error: {0}")]
    Computation(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexistatError.
pub type Result<T> = std::result::Result<T, LexistatError>;

impl LexistatError {
    // Constructors for the message-carrying variants.

    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexistatError::Analysis(msg.into())
    }

    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexistatError::InvalidArgument(msg.into())
    }

    pub fn not_fitted<S: Into<String>>(msg: S) -> Self {
        LexistatError::NotFitted(msg.into())
    }

    pub fn computation<S: Into<String>>(msg: S) -> Self {
        LexistatError::Computation(msg.into())
    }
}
