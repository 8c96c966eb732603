//! Feature extraction: tokenized sentences to dense count vectors.
//!
//! # Architecture
//!
//! - `FeatureExtractor` trait: common fit/transform interface
//! - `UnigramFeature`: bag-of-words counts, optionally skipping stop words
//! - `Vocabulary`: first-seen ordered token → column index mapping
//! - `ExtractorKind`: tagged selection of an extractor variant
//!
//! # Example
//!
//! ```
//! use lexistat::feature::{FeatureExtractor, UnigramFeature};
//!
//! let train = vec![
//!     vec!["good".to_string(), "movie".to_string()],
//!     vec!["bad".to_string(), "movie".to_string()],
//! ];
//! let mut extractor = UnigramFeature::new();
//! extractor.fit(&train);
//!
//! let x = extractor.transform_list(&train);
//! assert_eq!(x.shape(), &[2, 3]);
//! assert_eq!(x.row(1).to_vec(), vec![0.0, 1.0, 1.0]);
//! ```

mod extractor;
mod unigram;
mod vocabulary;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::{LexistatError, Result};

pub use extractor::FeatureExtractor;
pub use unigram::UnigramFeature;
pub use vocabulary::Vocabulary;

/// Available feature extractor variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractorKind {
    /// Every token becomes a column.
    Unigram,
    /// Stop words are dropped before indexing.
    FilteredUnigram,
}

impl ExtractorKind {
    /// Create an unfitted extractor of this kind.
    pub fn build(self) -> Box<dyn FeatureExtractor> {
        match self {
            ExtractorKind::Unigram => Box::new(UnigramFeature::new()),
            ExtractorKind::FilteredUnigram => Box::new(UnigramFeature::with_stop_words()),
        }
    }
}

/// Stack row vectors into an N×D matrix, rejecting ragged input.
///
/// An empty slice yields a 0×0 matrix.
pub fn matrix_from_rows(rows: &[Vec<f64>]) -> Result<Array2<f64>> {
    let width = rows.first().map_or(0, Vec::len);
    let mut data = Vec::with_capacity(rows.len() * width);

    for (row, values) in rows.iter().enumerate() {
        if values.len() != width {
            return Err(LexistatError::InconsistentDimension {
                row,
                expected: width,
                found: values.len(),
            });
        }
        data.extend_from_slice(values);
    }

    Array2::from_shape_vec((rows.len(), width), data)
        .map_err(|e| LexistatError::computation(format!("Failed to shape feature matrix: {e}")))
}
