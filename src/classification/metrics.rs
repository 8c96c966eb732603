//! Evaluation metrics for binary predictions.

use serde::{Deserialize, Serialize};

use crate::error::{LexistatError, Result};

/// Confusion matrix for binary classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    /// True positives
    pub tp: usize,
    /// True negatives
    pub tn: usize,
    /// False positives
    pub fp: usize,
    /// False negatives
    pub fn_: usize,
}

impl ConfusionMatrix {
    /// Count outcomes from gold and predicted labels.
    pub fn from_labels(y_true: &[u8], y_pred: &[u8]) -> Result<Self> {
        if y_true.len() != y_pred.len() {
            return Err(LexistatError::LengthMismatch {
                samples: y_pred.len(),
                labels: y_true.len(),
            });
        }

        let mut cm = ConfusionMatrix::default();
        for (&t, &p) in y_true.iter().zip(y_pred) {
            match (t == 1, p == 1) {
                (true, true) => cm.tp += 1,
                (false, false) => cm.tn += 1,
                (false, true) => cm.fp += 1,
                (true, false) => cm.fn_ += 1,
            }
        }
        Ok(cm)
    }

    pub fn total(&self) -> usize {
        self.tp + self.tn + self.fp + self.fn_
    }
}

/// Accuracy, precision, recall and F1 for one set of predictions.
///
/// Ratios with a zero denominator are reported as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationMetrics {
    pub confusion_matrix: ConfusionMatrix,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

impl ClassificationMetrics {
    pub fn calculate(y_true: &[u8], y_pred: &[u8]) -> Result<Self> {
        let cm = ConfusionMatrix::from_labels(y_true, y_pred)?;

        let accuracy = ratio(cm.tp + cm.tn, cm.total());
        let precision = ratio(cm.tp, cm.tp + cm.fp);
        let recall = ratio(cm.tp, cm.tp + cm.fn_);
        let f1 = if precision + recall == 0.0 {
            0.0
        } else {
            2.0 * precision * recall / (precision + recall)
        };

        Ok(ClassificationMetrics {
            confusion_matrix: cm,
            accuracy,
            precision,
            recall,
            f1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confusion_matrix() {
        let cm = ConfusionMatrix::from_labels(&[1, 1, 0, 0, 1], &[1, 0, 0, 1, 1]).unwrap();
        assert_eq!(cm.tp, 2);
        assert_eq!(cm.tn, 1);
        assert_eq!(cm.fp, 1);
        assert_eq!(cm.fn_, 1);
        assert_eq!(cm.total(), 5);
    }

    #[test]
    fn test_metrics() {
        let metrics = ClassificationMetrics::calculate(&[1, 1, 0, 0], &[1, 0, 0, 0]).unwrap();
        assert_eq!(metrics.accuracy, 0.75);
        assert_eq!(metrics.precision, 1.0);
        assert_eq!(metrics.recall, 0.5);
        assert!((metrics.f1 - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_all_negative_predictions() {
        let metrics = ClassificationMetrics::calculate(&[1, 0], &[0, 0]).unwrap();
        assert_eq!(metrics.precision, 0.0);
        assert_eq!(metrics.f1, 0.0);
    }

    #[test]
    fn test_length_mismatch() {
        assert!(ClassificationMetrics::calculate(&[1, 0], &[1]).is_err());
    }
}
