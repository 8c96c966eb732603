//! Binary sentiment classifiers over dense feature matrices.
//!
//! All classifiers implement [`BinaryClassifier`]: `fit` on an N×D matrix
//! with N labels in {0, 1}, then `predict` labels for new rows of width D.
//! Naive Bayes additionally exposes log-odds diagnostics through
//! [`NaiveBayesClassifier::explain`].
//!
//! # Example
//!
//! ```
//! use lexistat::classification::{BinaryClassifier, NaiveBayesClassifier};
//! use ndarray::array;
//!
//! let x = array![[1.0, 0.0], [0.0, 1.0]];
//! let mut classifier = NaiveBayesClassifier::new();
//! classifier.fit(&x, &[1, 0]).unwrap();
//!
//! assert_eq!(classifier.predict(&array![[1.0, 0.0]]).unwrap(), vec![1]);
//! ```

mod baseline;
mod classifier;
pub mod logistic_regression;
pub mod metrics;
pub mod naive_bayes;

use serde::{Deserialize, Serialize};

pub use baseline::AlwaysPredictZero;
pub use classifier::BinaryClassifier;
pub use logistic_regression::{
    LogisticRegressionClassifier, LogisticRegressionConfig, ModelParameters, TrainingStats,
};
pub use metrics::{ClassificationMetrics, ConfusionMatrix};
pub use naive_bayes::{ClassStatistics, FeatureRatio, LogOddsReport, NaiveBayesClassifier};

/// Available classifier variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassifierKind {
    /// Multinomial Naive Bayes with add-one smoothing.
    NaiveBayes,
    /// L2-regularized logistic regression trained by gradient descent.
    LogisticRegression,
    /// Baseline that always predicts the negative class.
    AlwaysZero,
}

impl ClassifierKind {
    /// Create an unfitted classifier of this kind.
    pub fn build(self, config: &LogisticRegressionConfig) -> Box<dyn BinaryClassifier> {
        match self {
            ClassifierKind::NaiveBayes => Box::new(NaiveBayesClassifier::new()),
            ClassifierKind::LogisticRegression => {
                Box::new(LogisticRegressionClassifier::with_config(config.clone()))
            }
            ClassifierKind::AlwaysZero => Box::new(AlwaysPredictZero::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifier_kind_build() {
        let config = LogisticRegressionConfig::default();
        assert_eq!(ClassifierKind::NaiveBayes.build(&config).name(), "naive_bayes");
        assert_eq!(
            ClassifierKind::LogisticRegression.build(&config).name(),
            "logistic_regression"
        );
        assert_eq!(ClassifierKind::AlwaysZero.build(&config).name(), "always_zero");
    }

    #[test]
    fn test_downcast_to_naive_bayes() {
        let config = LogisticRegressionConfig::default();
        let classifier = ClassifierKind::NaiveBayes.build(&config);
        assert!(
            classifier
                .as_any()
                .downcast_ref::<NaiveBayesClassifier>()
                .is_some()
        );

        let classifier = ClassifierKind::AlwaysZero.build(&config);
        assert!(
            classifier
                .as_any()
                .downcast_ref::<NaiveBayesClassifier>()
                .is_none()
        );
    }
}
