//! Multinomial Naive Bayes with add-one smoothing.
//!
//! Training accumulates, per class, the smoothed count `trunc(x) + 1` of every
//! (sample, feature) cell, so features absent from a sample still contribute
//! one pseudo-count. Prediction scores a row by summing, over the features
//! present in it, the base-2 log of
//!
//! ```text
//! P(f | c) · P(c) / P(f)
//! ```
//!
//! and picks the class with the larger sum. Ties go to the negative class.

use std::any::Any;

use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use super::classifier::{BinaryClassifier, check_width, validate_training_set};
use crate::error::{LexistatError, Result};

/// Number of entries kept at each end of a [`LogOddsReport`].
pub const REPORT_SIZE: usize = 10;

/// Smoothed per-class feature counts learned by [`NaiveBayesClassifier`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassStatistics {
    /// Smoothed count of each feature over positive samples.
    pub positive_features: Vec<u64>,
    /// Smoothed count of each feature over negative samples.
    pub negative_features: Vec<u64>,
    /// Sum of `positive_features`.
    pub positive_total: u64,
    /// Sum of `negative_features`.
    pub negative_total: u64,
    /// Sum over both classes.
    pub total: u64,
    /// Number of positive training samples.
    pub positive_samples: usize,
    /// Number of negative training samples.
    pub negative_samples: usize,
}

impl ClassStatistics {
    fn with_features(feature_count: usize) -> Self {
        ClassStatistics {
            positive_features: vec![0; feature_count],
            negative_features: vec![0; feature_count],
            positive_total: 0,
            negative_total: 0,
            total: 0,
            positive_samples: 0,
            negative_samples: 0,
        }
    }

    /// Feature dimension the statistics were collected over.
    pub fn feature_count(&self) -> usize {
        self.positive_features.len()
    }

    /// Fraction of training samples labeled positive.
    pub fn positive_prior(&self) -> f64 {
        self.positive_samples as f64 / (self.positive_samples + self.negative_samples) as f64
    }

    /// Fraction of training samples labeled negative.
    pub fn negative_prior(&self) -> f64 {
        self.negative_samples as f64 / (self.positive_samples + self.negative_samples) as f64
    }
}

/// Ratio of a feature's positive to negative log-probability term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRatio {
    pub ratio: f64,
    pub feature: usize,
}

/// Predictions together with the extreme log-odds ratios seen while scoring.
///
/// `bottom` holds the smallest distinct ratios in ascending order and `top`
/// the largest ones, also ascending, so the most positive-leaning feature is
/// `top.last()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogOddsReport {
    pub bottom: Vec<FeatureRatio>,
    pub top: Vec<FeatureRatio>,
    pub labels: Vec<u8>,
}

/// Naive Bayes sentiment classifier.
#[derive(Debug, Clone, Default)]
pub struct NaiveBayesClassifier {
    statistics: Option<ClassStatistics>,
}

impl NaiveBayesClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Learned statistics, or `None` before fit.
    pub fn statistics(&self) -> Option<&ClassStatistics> {
        self.statistics.as_ref()
    }

    pub fn is_fitted(&self) -> bool {
        self.statistics.is_some()
    }

    /// Predict `x` and report the most extreme per-feature log-odds ratios.
    pub fn explain(&self, x: &Array2<f64>) -> Result<LogOddsReport> {
        let (labels, mut ratios) = self.score(x, true)?;

        ratios.sort_by(|a, b| {
            a.ratio
                .total_cmp(&b.ratio)
                .then_with(|| a.feature.cmp(&b.feature))
        });
        ratios.dedup();

        let bottom = ratios[..ratios.len().min(REPORT_SIZE)].to_vec();
        let top = ratios[ratios.len().saturating_sub(REPORT_SIZE)..].to_vec();

        Ok(LogOddsReport {
            bottom,
            top,
            labels,
        })
    }

    fn score(&self, x: &Array2<f64>, collect_ratios: bool) -> Result<(Vec<u8>, Vec<FeatureRatio>)> {
        let stats = self
            .statistics
            .as_ref()
            .ok_or_else(|| LexistatError::not_fitted("naive bayes classifier"))?;
        check_width(stats.feature_count(), x)?;

        let positive_prior = stats.positive_prior();
        let negative_prior = stats.negative_prior();
        let positive_total = stats.positive_total as f64;
        let negative_total = stats.negative_total as f64;
        let total = stats.total as f64;

        let mut labels = Vec::with_capacity(x.nrows());
        let mut ratios = Vec::new();

        for (row_index, row) in x.rows().into_iter().enumerate() {
            let mut positive_score = 0.0;
            let mut negative_score = 0.0;

            for (feature, &value) in row.iter().enumerate() {
                check_count(row_index, value)?;
                if value == 0.0 {
                    continue;
                }
                let positive = stats.positive_features[feature] as f64;
                let negative = stats.negative_features[feature] as f64;
                let evidence = (positive + negative) / total;

                let positive_term = (positive / positive_total * positive_prior / evidence).log2();
                let negative_term = (negative / negative_total * negative_prior / evidence).log2();
                positive_score += positive_term;
                negative_score += negative_term;

                if collect_ratios {
                    let ratio = positive_term / negative_term;
                    if ratio.is_finite() {
                        ratios.push(FeatureRatio { ratio, feature });
                    } else {
                        log::trace!("skipping non-finite log-odds ratio for feature {feature}");
                    }
                }
            }

            labels.push(u8::from(positive_score > negative_score));
        }

        Ok((labels, ratios))
    }
}

fn check_count(row_index: usize, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(LexistatError::invalid_argument(format!(
            "feature value {value} at row {row_index} must be a non-negative count"
        )))
    }
}

fn add_count(counter: &mut u64, amount: u64) -> Result<()> {
    *counter = counter
        .checked_add(amount)
        .ok_or_else(|| LexistatError::computation("naive bayes feature count overflowed u64"))?;
    Ok(())
}

/// Add one row's smoothed counts into a class bucket.
fn accumulate(
    row_index: usize,
    row: ArrayView1<'_, f64>,
    features: &mut [u64],
    class_total: &mut u64,
    total: &mut u64,
) -> Result<()> {
    for (slot, &value) in features.iter_mut().zip(row.iter()) {
        check_count(row_index, value)?;
        // `as` saturates, so anything at or past u64::MAX cannot take the +1.
        let smoothed = (value.trunc() as u64).checked_add(1).ok_or_else(|| {
            LexistatError::computation(format!(
                "feature value {value} at row {row_index} is too large to count"
            ))
        })?;
        add_count(slot, smoothed)?;
        add_count(class_total, smoothed)?;
        add_count(total, smoothed)?;
    }
    Ok(())
}

impl BinaryClassifier for NaiveBayesClassifier {
    fn fit(&mut self, x: &Array2<f64>, y: &[u8]) -> Result<()> {
        self.statistics = None;
        validate_training_set(x, y)?;

        let mut stats = ClassStatistics::with_features(x.ncols());
        for (row_index, (row, &label)) in x.rows().into_iter().zip(y).enumerate() {
            if label == 1 {
                stats.positive_samples += 1;
                accumulate(
                    row_index,
                    row,
                    &mut stats.positive_features,
                    &mut stats.positive_total,
                    &mut stats.total,
                )?;
            } else {
                stats.negative_samples += 1;
                accumulate(
                    row_index,
                    row,
                    &mut stats.negative_features,
                    &mut stats.negative_total,
                    &mut stats.total,
                )?;
            }
        }

        if stats.positive_samples == 0 {
            return Err(LexistatError::EmptyClass { label: 1 });
        }
        if stats.negative_samples == 0 {
            return Err(LexistatError::EmptyClass { label: 0 });
        }

        log::info!(
            "naive bayes fitted on {} samples ({} positive, {} negative) with {} features",
            y.len(),
            stats.positive_samples,
            stats.negative_samples,
            stats.feature_count()
        );

        self.statistics = Some(stats);
        Ok(())
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Vec<u8>> {
        self.score(x, false).map(|(labels, _)| labels)
    }

    fn name(&self) -> &str {
        "naive_bayes"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
