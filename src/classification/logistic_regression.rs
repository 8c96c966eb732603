//! L2-regularized logistic regression trained with full-batch gradient descent.

use std::any::Any;
use std::time::Instant;

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use super::classifier::{BinaryClassifier, check_width, validate_training_set};
use crate::error::{LexistatError, Result};

/// Hyperparameters for [`LogisticRegressionClassifier`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogisticRegressionConfig {
    /// Gradient descent step size.
    pub learning_rate: f64,
    /// Number of full passes over the training set.
    pub epochs: usize,
    /// L2 penalty applied to the weights (not the bias).
    pub l2_lambda: f64,
}

impl Default for LogisticRegressionConfig {
    fn default() -> Self {
        LogisticRegressionConfig {
            learning_rate: 0.15,
            epochs: 2500,
            l2_lambda: 0.001,
        }
    }
}

impl LogisticRegressionConfig {
    fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(LexistatError::invalid_argument(format!(
                "learning rate must be positive, got {}",
                self.learning_rate
            )));
        }
        if !self.l2_lambda.is_finite() || self.l2_lambda < 0.0 {
            return Err(LexistatError::invalid_argument(format!(
                "l2 lambda must be non-negative, got {}",
                self.l2_lambda
            )));
        }
        Ok(())
    }
}

/// Learned weights and bias.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelParameters {
    pub weights: Array1<f64>,
    pub bias: f64,
}

/// Loss history and timing of the last training run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingStats {
    /// Regularized loss before each epoch's update.
    pub losses: Vec<f64>,
    pub epochs: usize,
    pub training_time_ms: u64,
}

impl TrainingStats {
    pub fn final_loss(&self) -> Option<f64> {
        self.losses.last().copied()
    }
}

/// Logistic regression sentiment classifier.
#[derive(Debug, Clone, Default)]
pub struct LogisticRegressionClassifier {
    config: LogisticRegressionConfig,
    parameters: Option<ModelParameters>,
    training_stats: Option<TrainingStats>,
}

/// Numerically stable logistic function.
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// `ln(1 + e^z)` without overflow.
fn softplus(z: f64) -> f64 {
    z.max(0.0) + (-z.abs()).exp().ln_1p()
}

/// Mean binary cross-entropy on logits plus `λ/2 · ‖w‖²`.
fn regularized_loss(
    logits: &Array1<f64>,
    targets: &Array1<f64>,
    weights: &Array1<f64>,
    l2_lambda: f64,
) -> f64 {
    let n = logits.len() as f64;
    let data_loss = logits
        .iter()
        .zip(targets.iter())
        .map(|(&z, &y)| softplus(z) - y * z)
        .sum::<f64>()
        / n;
    data_loss + l2_lambda / 2.0 * weights.dot(weights)
}

impl LogisticRegressionClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LogisticRegressionConfig) -> Self {
        LogisticRegressionClassifier {
            config,
            parameters: None,
            training_stats: None,
        }
    }

    pub fn config(&self) -> &LogisticRegressionConfig {
        &self.config
    }

    /// Learned parameters, or `None` before fit.
    pub fn parameters(&self) -> Option<&ModelParameters> {
        self.parameters.as_ref()
    }

    /// Statistics from the last call to [`train`](Self::train).
    pub fn training_stats(&self) -> Option<&TrainingStats> {
        self.training_stats.as_ref()
    }

    /// Run gradient descent from zero weights and return the learned parameters.
    pub fn train(&mut self, x: &Array2<f64>, y: &[u8]) -> Result<&ModelParameters> {
        self.parameters = None;
        self.training_stats = None;
        validate_training_set(x, y)?;
        self.config.validate()?;

        let start = Instant::now();
        let n = x.nrows() as f64;
        let learning_rate = self.config.learning_rate;
        let l2_lambda = self.config.l2_lambda;
        let targets: Array1<f64> = y.iter().map(|&label| f64::from(label)).collect();

        let mut weights = Array1::<f64>::zeros(x.ncols());
        let mut bias = 0.0;
        let mut losses = Vec::with_capacity(self.config.epochs);

        for epoch in 0..self.config.epochs {
            let logits = x.dot(&weights) + bias;
            let loss = regularized_loss(&logits, &targets, &weights, l2_lambda);
            if !loss.is_finite() {
                return Err(LexistatError::computation(format!(
                    "loss became non-finite at epoch {}",
                    epoch + 1
                )));
            }

            let errors = logits.mapv(sigmoid) - &targets;
            let weight_gradient = x.t().dot(&errors) / n + &weights * l2_lambda;
            let bias_gradient = errors.sum() / n;

            weights.scaled_add(-learning_rate, &weight_gradient);
            bias -= learning_rate * bias_gradient;

            log::debug!("epoch {}: loss = {loss:.6}", epoch + 1);
            losses.push(loss);
        }

        let training_time_ms = start.elapsed().as_millis() as u64;
        log::info!(
            "logistic regression trained for {} epochs in {training_time_ms} ms, final loss {:?}",
            self.config.epochs,
            losses.last()
        );

        self.training_stats = Some(TrainingStats {
            losses,
            epochs: self.config.epochs,
            training_time_ms,
        });
        Ok(&*self.parameters.insert(ModelParameters { weights, bias }))
    }

    /// Probability of the positive class for each row.
    pub fn predict_proba(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        let parameters = self
            .parameters
            .as_ref()
            .ok_or_else(|| LexistatError::not_fitted("logistic regression classifier"))?;
        check_width(parameters.weights.len(), x)?;

        Ok((x.dot(&parameters.weights) + parameters.bias).mapv(sigmoid))
    }
}

impl BinaryClassifier for LogisticRegressionClassifier {
    fn fit(&mut self, x: &Array2<f64>, y: &[u8]) -> Result<()> {
        self.train(x, y).map(|_| ())
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Vec<u8>> {
        Ok(self
            .predict_proba(x)?
            .iter()
            .map(|&p| u8::from(p > 0.5))
            .collect())
    }

    fn name(&self) -> &str {
        "logistic_regression"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
