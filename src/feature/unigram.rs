//! Unigram bag-of-words feature extraction.

use ndarray::Array1;

use super::extractor::FeatureExtractor;
use super::vocabulary::Vocabulary;
use crate::analysis::token_filter::StopFilter;

/// Unigram count features.
///
/// Tokens are lowercased and trimmed before indexing and lookup. Tokens not
/// in the vocabulary are ignored by `transform`; there is no unknown bucket.
#[derive(Debug, Clone, Default)]
pub struct UnigramFeature {
    /// Learned vocabulary.
    vocabulary: Vocabulary,
    /// Words excluded from the vocabulary, if any.
    stop_filter: Option<StopFilter>,
}

impl UnigramFeature {
    /// Plain bag-of-words extractor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extractor that never indexes the default English stop words.
    pub fn with_stop_words() -> Self {
        Self::with_stop_filter(StopFilter::new())
    }

    /// Extractor that never indexes the words of `stop_filter`.
    pub fn with_stop_filter(stop_filter: StopFilter) -> Self {
        Self {
            vocabulary: Vocabulary::new(),
            stop_filter: Some(stop_filter),
        }
    }

    fn normalize(token: &str) -> String {
        token.trim().to_lowercase()
    }

    fn is_stop_word(&self, token: &str) -> bool {
        self.stop_filter
            .as_ref()
            .is_some_and(|filter| filter.is_stop_word(token))
    }
}

impl FeatureExtractor for UnigramFeature {
    fn fit(&mut self, sentences: &[Vec<String>]) -> &Vocabulary {
        let mut vocabulary = Vocabulary::new();

        for token in sentences.iter().flatten() {
            let token = Self::normalize(token);
            if !self.is_stop_word(&token) {
                vocabulary.insert(&token);
            }
        }

        log::info!(
            "{} vocabulary built: {} terms from {} sentences",
            self.name(),
            vocabulary.len(),
            sentences.len()
        );
        self.vocabulary = vocabulary;
        &self.vocabulary
    }

    fn transform(&self, sentence: &[String]) -> Array1<f64> {
        let mut features = Array1::<f64>::zeros(self.vocabulary.len());

        for token in sentence {
            if let Some(idx) = self.vocabulary.get(&Self::normalize(token)) {
                features[idx] += 1.0;
            }
        }

        features
    }

    fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    fn name(&self) -> &str {
        if self.stop_filter.is_some() {
            "filtered_unigram"
        } else {
            "unigram"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_fit_first_seen_order() {
        let train = vec![sentence(&["I", "love", "nlp"]), sentence(&["I", "like", "python"])];
        let mut extractor = UnigramFeature::new();
        let vocabulary = extractor.fit(&train);

        assert_eq!(vocabulary.terms(), &sentence(&["i", "love", "nlp", "like", "python"]));
    }

    #[test]
    fn test_transform_counts_and_ignores_unknown() {
        let train = vec![sentence(&["i", "love", "nlp"]), sentence(&["i", "like", "python"])];
        let mut extractor = UnigramFeature::new();
        extractor.fit(&train);

        let features = extractor.transform(&sentence(&["I", "love", "love", "rust"]));
        assert_eq!(features.to_vec(), vec![1.0, 2.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_transform_sum_equals_in_vocabulary_tokens() {
        let corpora = vec![
            sentence(&["a", "b", "a", "c"]),
            sentence(&["the", "film", "was", "the", "best"]),
            sentence(&["solo"]),
            sentence(&[]),
        ];

        for words in corpora {
            let mut extractor = UnigramFeature::new();
            extractor.fit(std::slice::from_ref(&words));
            let features = extractor.transform(&words);
            assert_eq!(features.sum(), words.len() as f64);
        }

        // With stop words removed, only the indexed tokens are counted.
        let words = sentence(&["the", "film", "was", "the", "best"]);
        let mut extractor = UnigramFeature::with_stop_words();
        extractor.fit(std::slice::from_ref(&words));
        assert_eq!(extractor.transform(&words).sum(), 2.0);
    }

    #[test]
    fn test_filtered_variant_skips_stop_words() {
        let train = vec![sentence(&["this", "movie", "is", "not", "good"])];
        let mut extractor = UnigramFeature::with_stop_words();
        extractor.fit(&train);

        assert_eq!(extractor.vocabulary().terms(), &sentence(&["movie", "good"]));
        assert_eq!(extractor.name(), "filtered_unigram");
    }

    #[test]
    fn test_empty_training_set() {
        let mut extractor = UnigramFeature::new();
        assert!(extractor.fit(&[]).is_empty());

        assert_eq!(extractor.transform(&sentence(&["anything"])).len(), 0);
        let matrix = extractor.transform_list(&[sentence(&["a"]), sentence(&["b"])]);
        assert_eq!(matrix.shape(), &[2, 0]);
    }

    #[test]
    fn test_transform_list_keeps_row_order() {
        let train = vec![sentence(&["good"]), sentence(&["bad"]), sentence(&["good", "good"])];
        let mut extractor = UnigramFeature::new();
        extractor.fit(&train);

        let matrix = extractor.transform_list(&train);
        assert_eq!(matrix.shape(), &[3, 2]);
        assert_eq!(matrix.row(0).to_vec(), vec![1.0, 0.0]);
        assert_eq!(matrix.row(1).to_vec(), vec![0.0, 1.0]);
        assert_eq!(matrix.row(2).to_vec(), vec![2.0, 0.0]);
    }

    #[test]
    fn test_refit_replaces_vocabulary() {
        let mut extractor = UnigramFeature::new();
        extractor.fit(&[sentence(&["old", "words"])]);
        extractor.fit(&[sentence(&["new"])]);

        assert_eq!(extractor.vocabulary().terms(), &sentence(&["new"]));
    }
}
