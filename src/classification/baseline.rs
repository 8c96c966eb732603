//! Majority-free baseline classifier.

use std::any::Any;

use ndarray::Array2;

use super::classifier::{BinaryClassifier, validate_training_set};
use crate::error::Result;

/// Predicts label 0 for every sample.
///
/// Useful as the accuracy floor a real model has to beat.
#[derive(Debug, Clone, Default)]
pub struct AlwaysPredictZero;

impl AlwaysPredictZero {
    pub fn new() -> Self {
        AlwaysPredictZero
    }
}

impl BinaryClassifier for AlwaysPredictZero {
    fn fit(&mut self, x: &Array2<f64>, y: &[u8]) -> Result<()> {
        validate_training_set(x, y)
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Vec<u8>> {
        Ok(vec![0; x.nrows()])
    }

    fn name(&self) -> &str {
        "always_zero"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
