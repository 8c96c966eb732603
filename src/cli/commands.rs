//! Command implementations for Lexistat CLI.

use std::time::Instant;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::classification::{
    ClassificationMetrics, ClassifierKind, FeatureRatio, LogisticRegressionClassifier,
    NaiveBayesClassifier,
};
use crate::cli::args::*;
use crate::cli::data::{read_labeled, read_sentences};
use crate::cli::output::*;
use crate::config::LexistatConfig;
use crate::error::Result;
use crate::feature::{ExtractorKind, Vocabulary};
use crate::language_model::{NgramModel, NgramOrder};

/// Execute a CLI command.
pub fn execute_command(args: LexistatArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => LexistatConfig::from_file(path)?,
        None => LexistatConfig::default(),
    };

    match &args.command {
        Command::Classify(classify_args) => classify(classify_args, &config, &args),
        Command::Perplexity(perplexity_args) => perplexity(perplexity_args, &config, &args),
    }
}

/// Train a classifier on one labeled file and evaluate on another.
fn classify(args: &ClassifyArgs, config: &LexistatConfig, cli_args: &LexistatArgs) -> Result<()> {
    let start_time = Instant::now();

    let train = read_labeled(&args.train)?;
    let test = read_labeled(&args.test)?;

    let analyzer = PipelineAnalyzer::from_config(&config.tokenizer)?;
    let train_tokens = analyze_all(&analyzer, &train.texts)?;
    let test_tokens = analyze_all(&analyzer, &test.texts)?;

    let mut extractor = ExtractorKind::from(args.features).build();
    extractor.fit(&train_tokens);
    let x_train = extractor.transform_list(&train_tokens);
    let x_test = extractor.transform_list(&test_tokens);

    let mut classifier = ClassifierKind::from(args.classifier).build(&config.logistic_regression);
    classifier.fit(&x_train, &train.labels)?;

    let train_metrics =
        ClassificationMetrics::calculate(&train.labels, &classifier.predict(&x_train)?)?;
    let test_metrics =
        ClassificationMetrics::calculate(&test.labels, &classifier.predict(&x_test)?)?;

    let final_loss = classifier
        .as_any()
        .downcast_ref::<LogisticRegressionClassifier>()
        .and_then(|lr| lr.training_stats())
        .and_then(|stats| stats.final_loss());

    let (top_features, bottom_features) =
        match classifier.as_any().downcast_ref::<NaiveBayesClassifier>() {
            Some(naive_bayes) => {
                let report = naive_bayes.explain(&x_test)?;
                let vocabulary = extractor.vocabulary();
                (
                    Some(rank_features(&report.top, vocabulary)),
                    Some(rank_features(&report.bottom, vocabulary)),
                )
            }
            None => (None, None),
        };

    output_result(
        "Classification finished",
        &ClassificationResult {
            classifier: classifier.name().to_string(),
            features: extractor.name().to_string(),
            vocabulary_size: extractor.vocabulary().len(),
            train_samples: train.len(),
            test_samples: test.len(),
            train: train_metrics,
            test: test_metrics,
            final_loss,
            top_features,
            bottom_features,
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Fit an n-gram model and score both corpora.
fn perplexity(
    args: &PerplexityArgs,
    config: &LexistatConfig,
    cli_args: &LexistatArgs,
) -> Result<()> {
    let start_time = Instant::now();

    let train = read_sentences(&args.train)?;
    let test = read_sentences(&args.test)?;

    let order = NgramOrder::from_n(usize::from(args.order))?;
    let mut model = NgramModel::new(order, config.language_model.clone());
    model.fit(&train)?;

    let train_perplexity = model.perplexity(&train)?;
    let test_perplexity = model.perplexity(&test)?;

    output_result(
        "Perplexity evaluation finished",
        &PerplexityResult {
            order: order.to_string(),
            vocabulary_size: model.vocabulary().map_or(0, |vocabulary| vocabulary.size()),
            train_sentences: train.len(),
            test_sentences: test.len(),
            train_perplexity,
            test_perplexity,
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

fn analyze_all(analyzer: &PipelineAnalyzer, texts: &[String]) -> Result<Vec<Vec<String>>> {
    texts
        .iter()
        .map(|text| analyzer.analyze_to_strings(text))
        .collect()
}

fn rank_features(ratios: &[FeatureRatio], vocabulary: &Vocabulary) -> Vec<RankedFeature> {
    ratios
        .iter()
        .map(|ratio| RankedFeature {
            term: vocabulary
                .term(ratio.feature)
                .map_or_else(|| format!("#{}", ratio.feature), str::to_string),
            ratio: ratio.ratio,
        })
        .collect()
}
