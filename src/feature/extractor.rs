//! Feature extractor trait definition.

use ndarray::{Array1, Array2};
use rayon::prelude::*;

use super::vocabulary::Vocabulary;

/// Feature extractor trait.
///
/// An extractor learns a vocabulary from a training corpus and then maps any
/// tokenized sentence to a vector whose width equals that vocabulary's size.
pub trait FeatureExtractor: Send + Sync {
    /// Build the vocabulary from tokenized training sentences.
    ///
    /// Any previous vocabulary is discarded.
    fn fit(&mut self, sentences: &[Vec<String>]) -> &Vocabulary;

    /// Map one tokenized sentence to a count vector.
    fn transform(&self, sentence: &[String]) -> Array1<f64>;

    /// The vocabulary learned by the last `fit`.
    fn vocabulary(&self) -> &Vocabulary;

    /// Get the name of this extractor for debugging and logging.
    fn name(&self) -> &str;

    /// Transform every sentence and stack the vectors as rows, in input order.
    fn transform_list(&self, sentences: &[Vec<String>]) -> Array2<f64> {
        let rows: Vec<Array1<f64>> = sentences
            .par_iter()
            .map(|sentence| self.transform(sentence))
            .collect();

        let mut matrix = Array2::zeros((sentences.len(), self.vocabulary().len()));
        for (mut row, vector) in matrix.rows_mut().into_iter().zip(rows) {
            row.assign(&vector);
        }
        matrix
    }
}
