//! Unigram, bigram and trigram models over [`NgramVocabulary`] ids.

use std::fmt;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use super::NgramConfig;
use super::vocabulary::NgramVocabulary;
use crate::error::{LexistatError, Result};

/// Window width of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NgramOrder {
    Unigram,
    Bigram,
    Trigram,
}

impl NgramOrder {
    /// Window width `n`.
    pub fn n(self) -> usize {
        match self {
            NgramOrder::Unigram => 1,
            NgramOrder::Bigram => 2,
            NgramOrder::Trigram => 3,
        }
    }

    pub fn from_n(n: usize) -> Result<Self> {
        match n {
            1 => Ok(NgramOrder::Unigram),
            2 => Ok(NgramOrder::Bigram),
            3 => Ok(NgramOrder::Trigram),
            _ => Err(LexistatError::invalid_argument(format!(
                "n-gram order must be 1, 2 or 3, got {n}"
            ))),
        }
    }
}

impl fmt::Display for NgramOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NgramOrder::Unigram => "unigram",
            NgramOrder::Bigram => "bigram",
            NgramOrder::Trigram => "trigram",
        };
        write!(f, "{name}")
    }
}

/// Everything learned by a single fit.
#[derive(Debug, Clone)]
struct NgramCounts {
    vocabulary: NgramVocabulary,
    ngrams: AHashMap<Vec<u32>, u64>,
    contexts: AHashMap<Vec<u32>, u64>,
    total_words: u64,
    total_sentences: u64,
}

/// Add-one smoothed n-gram language model.
#[derive(Debug, Clone)]
pub struct NgramModel {
    order: NgramOrder,
    config: NgramConfig,
    counts: Option<NgramCounts>,
}

impl NgramModel {
    pub fn new(order: NgramOrder, config: NgramConfig) -> Self {
        NgramModel {
            order,
            config,
            counts: None,
        }
    }

    pub fn unigram() -> Self {
        Self::new(NgramOrder::Unigram, NgramConfig::default())
    }

    pub fn bigram() -> Self {
        Self::new(NgramOrder::Bigram, NgramConfig::default())
    }

    pub fn trigram() -> Self {
        Self::new(NgramOrder::Trigram, NgramConfig::default())
    }

    pub fn order(&self) -> NgramOrder {
        self.order
    }

    pub fn config(&self) -> &NgramConfig {
        &self.config
    }

    pub fn is_fitted(&self) -> bool {
        self.counts.is_some()
    }

    /// Vocabulary learned by the last fit.
    pub fn vocabulary(&self) -> Option<&NgramVocabulary> {
        self.counts.as_ref().map(|counts| &counts.vocabulary)
    }

    /// Training tokens seen, excluding `<STOP>`.
    pub fn total_words(&self) -> u64 {
        self.counts.as_ref().map_or(0, |counts| counts.total_words)
    }

    pub fn total_sentences(&self) -> u64 {
        self.counts.as_ref().map_or(0, |counts| counts.total_sentences)
    }

    fn fitted(&self) -> Result<&NgramCounts> {
        self.counts
            .as_ref()
            .ok_or_else(|| LexistatError::not_fitted(format!("{} model", self.order)))
    }

    /// Build the vocabulary and count every window of width n.
    pub fn fit<S: AsRef<str>>(&mut self, sentences: &[Vec<S>]) -> Result<()> {
        if sentences.is_empty() {
            return Err(LexistatError::EmptyTrainingSet);
        }

        let n = self.order.n();
        let vocabulary = NgramVocabulary::build(sentences, self.config.min_frequency);
        let mut counts = NgramCounts {
            vocabulary,
            ngrams: AHashMap::new(),
            contexts: AHashMap::new(),
            total_words: 0,
            total_sentences: 0,
        };

        for sentence in sentences {
            counts.total_words += sentence.len() as u64;
            counts.total_sentences += 1;

            let ids = counts.vocabulary.process(sentence);
            for window in ids.windows(n) {
                *counts.ngrams.entry(window.to_vec()).or_insert(0) += 1;
                if n > 1 {
                    *counts.contexts.entry(window[..n - 1].to_vec()).or_insert(0) += 1;
                }
            }
        }

        log::info!(
            "{} model fitted on {} sentences ({} tokens): vocabulary size {}, {} distinct n-grams",
            self.order,
            counts.total_sentences,
            counts.total_words,
            counts.vocabulary.size(),
            counts.ngrams.len()
        );

        self.counts = Some(counts);
        Ok(())
    }

    fn check_arity(&self, len: usize) -> Result<()> {
        if len != self.order.n() {
            return Err(LexistatError::invalid_argument(format!(
                "{} model expects {} tokens, got {len}",
                self.order,
                self.order.n()
            )));
        }
        Ok(())
    }

    /// Raw training count of an n-gram after `<UNK>` substitution.
    pub fn count(&self, ngram: &[&str]) -> Result<u64> {
        let counts = self.fitted()?;
        self.check_arity(ngram.len())?;

        let ids: Vec<u32> = ngram.iter().map(|token| counts.vocabulary.id(token)).collect();
        Ok(counts.ngrams.get(&ids).copied().unwrap_or(0))
    }

    /// Add-one smoothed probability of an n-gram.
    ///
    /// Tokens outside the vocabulary are treated as `<UNK>`.
    pub fn mle(&self, ngram: &[&str]) -> Result<f64> {
        let counts = self.fitted()?;
        self.check_arity(ngram.len())?;

        let ids: Vec<u32> = ngram.iter().map(|token| counts.vocabulary.id(token)).collect();
        Ok(smoothed_probability(counts, &ids))
    }

    /// Perplexity of the model over `sentences`.
    ///
    /// Each sentence is mapped through the training vocabulary and closed with
    /// `<STOP>`; the average is taken over the windows actually scored.
    pub fn perplexity<S: AsRef<str>>(&self, sentences: &[Vec<S>]) -> Result<f64> {
        let counts = self.fitted()?;
        let n = self.order.n();

        let mut log_probability = 0.0;
        let mut scored: u64 = 0;

        for sentence in sentences {
            let ids = counts.vocabulary.process(sentence);
            for window in ids.windows(n) {
                let probability = smoothed_probability(counts, window);
                if probability > 0.0 {
                    log_probability += probability.log2();
                    scored += 1;
                } else {
                    log::warn!("skipping n-gram {window:?} with probability {probability}");
                }
            }
        }

        if scored == 0 {
            return Err(LexistatError::EmptyTestSet);
        }

        let perplexity = (-log_probability / scored as f64).exp2();
        log::debug!("{} perplexity {perplexity:.4} over {scored} n-grams", self.order);
        Ok(perplexity)
    }
}

fn smoothed_probability(counts: &NgramCounts, ids: &[u32]) -> f64 {
    let count = counts.ngrams.get(ids).copied().unwrap_or(0) as f64;
    let vocabulary_size = counts.vocabulary.size() as f64;

    let denominator = if ids.len() == 1 {
        counts.total_words as f64
    } else {
        counts
            .contexts
            .get(&ids[..ids.len() - 1])
            .copied()
            .unwrap_or(0) as f64
    };

    (count + 1.0) / (denominator + vocabulary_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language_model::{STOP, UNK};

    fn corpus() -> Vec<Vec<&'static str>> {
        vec![
            vec!["the", "cat", "sat"],
            vec!["the", "cat", "ran"],
            vec!["the", "dog", "sat"],
            vec!["a", "cat", "sat"],
        ]
    }

    #[test]
    fn test_unigram_rare_tokens_collapse() {
        let mut model = NgramModel::unigram();
        model.fit(&[vec!["a", "a", "b"], vec!["a", "c"]]).unwrap();

        // only "a" reaches the threshold
        assert_eq!(model.vocabulary().unwrap().size(), 3);
        assert_eq!(model.total_words(), 5);
        assert_eq!(model.total_sentences(), 2);
        assert_eq!(model.count(&["a"]).unwrap(), 3);
        assert_eq!(model.count(&[UNK]).unwrap(), 2);
        assert_eq!(model.count(&[STOP]).unwrap(), 2);
        assert!((model.mle(&[UNK]).unwrap() - 3.0 / 8.0).abs() < 1e-12);
        assert!((model.mle(&["a"]).unwrap() - 4.0 / 8.0).abs() < 1e-12);
        assert!((model.mle(&["b"]).unwrap() - 3.0 / 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_unigram_all_rare() {
        let mut model = NgramModel::unigram();
        model.fit(&[vec!["a", "b", "a"], vec!["c", "d"]]).unwrap();

        assert_eq!(model.vocabulary().unwrap().size(), 2);
        assert_eq!(model.count(&[UNK]).unwrap(), 5);
        assert!((model.mle(&[UNK]).unwrap() - 6.0 / 7.0).abs() < 1e-12);
        assert!((model.mle(&[STOP]).unwrap() - 3.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_bigram_counts() {
        let mut model = NgramModel::bigram();
        model.fit(&corpus()).unwrap();

        // kept: the, cat, sat
        assert_eq!(model.vocabulary().unwrap().size(), 5);
        assert_eq!(model.count(&["the", "cat"]).unwrap(), 2);
        assert_eq!(model.count(&["cat", "sat"]).unwrap(), 2);
        assert_eq!(model.count(&["sat", STOP]).unwrap(), 3);
        assert_eq!(model.count(&["dog", "sat"]).unwrap(), 1);
        assert_eq!(model.count(&[UNK, "cat"]).unwrap(), 1);

        // "cat" starts 3 windows: (cat, sat) x2 and (cat, <UNK>)
        let expected = (2.0 + 1.0) / (3.0 + 5.0);
        assert!((model.mle(&["cat", "sat"]).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_trigram_has_no_start_padding() {
        let mut model = NgramModel::trigram();
        model.fit(&corpus()).unwrap();

        assert_eq!(model.count(&["the", "cat", "sat"]).unwrap(), 1);
        assert_eq!(model.count(&["cat", "sat", STOP]).unwrap(), 2);
        assert_eq!(model.count(&[STOP, "the", "cat"]).unwrap(), 0);
    }

    #[test]
    fn test_wrong_arity() {
        let mut model = NgramModel::bigram();
        model.fit(&corpus()).unwrap();
        assert!(matches!(
            model.mle(&["the"]),
            Err(LexistatError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_not_fitted() {
        let model = NgramModel::trigram();
        assert!(matches!(
            model.mle(&["a", "b", "c"]),
            Err(LexistatError::NotFitted(_))
        ));
        assert!(matches!(
            model.perplexity(&corpus()),
            Err(LexistatError::NotFitted(_))
        ));
    }

    #[test]
    fn test_empty_training_set() {
        let mut model = NgramModel::unigram();
        let empty: Vec<Vec<&str>> = Vec::new();
        assert!(matches!(model.fit(&empty), Err(LexistatError::EmptyTrainingSet)));
    }

    #[test]
    fn test_empty_test_set() {
        let mut model = NgramModel::bigram();
        model.fit(&corpus()).unwrap();

        let empty: Vec<Vec<&str>> = Vec::new();
        assert!(matches!(model.perplexity(&empty), Err(LexistatError::EmptyTestSet)));

        // a trigram window never fits inside an empty sentence plus <STOP>
        let mut trigram = NgramModel::trigram();
        trigram.fit(&corpus()).unwrap();
        assert!(matches!(
            trigram.perplexity(&[Vec::<&str>::new()]),
            Err(LexistatError::EmptyTestSet)
        ));
    }

    #[test]
    fn test_unigram_perplexity_scores_every_stop() {
        let mut model = NgramModel::unigram();
        model.fit(&[vec!["a", "a", "b"], vec!["a", "c"]]).unwrap();

        // four <UNK> windows and two <STOP> windows, each with probability 3/8
        let perplexity = model
            .perplexity(&[vec!["x", "y", "z"], vec!["w"]])
            .unwrap();
        assert!((perplexity - 8.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_order_from_n() {
        assert_eq!(NgramOrder::from_n(2).unwrap(), NgramOrder::Bigram);
        assert!(NgramOrder::from_n(4).is_err());
        assert_eq!(NgramOrder::Trigram.to_string(), "trigram");
    }
}
