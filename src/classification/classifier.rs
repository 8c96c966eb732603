//! Binary classifier trait definition and shared input checks.

use std::any::Any;

use ndarray::Array2;

use crate::error::{LexistatError, Result};

/// Binary classifier trait.
///
/// Labels are `0` (negative) or `1` (positive). Calling `fit` again replaces
/// whatever was learned before.
pub trait BinaryClassifier: Send + Sync {
    /// Train on an N×D feature matrix and N labels.
    fn fit(&mut self, x: &Array2<f64>, y: &[u8]) -> Result<()>;

    /// Predict one label per row of `x`.
    fn predict(&self, x: &Array2<f64>) -> Result<Vec<u8>>;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;

    /// Access the concrete type, e.g. to reach model-specific diagnostics.
    fn as_any(&self) -> &dyn Any;
}

/// Check sample/label agreement, non-emptiness and label range.
pub(crate) fn validate_training_set(x: &Array2<f64>, y: &[u8]) -> Result<()> {
    if x.nrows() != y.len() {
        return Err(LexistatError::LengthMismatch {
            samples: x.nrows(),
            labels: y.len(),
        });
    }
    if y.is_empty() {
        return Err(LexistatError::EmptyTrainingSet);
    }
    if let Some((index, &label)) = y.iter().enumerate().find(|(_, label)| **label > 1) {
        return Err(LexistatError::InvalidLabel { index, label });
    }
    Ok(())
}

/// Check that `x` has the width the model was fitted on.
pub(crate) fn check_width(expected: usize, x: &Array2<f64>) -> Result<()> {
    if x.ncols() != expected {
        return Err(LexistatError::DimensionMismatch {
            expected,
            found: x.ncols(),
        });
    }
    Ok(())
}
