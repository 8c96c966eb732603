//! Criterion benchmarks for Lexistat.
//!
//! Covers the hot paths of both pipelines:
//! - Tokenization
//! - Feature extraction
//! - Classifier training and prediction
//! - N-gram fitting and perplexity

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use lexistat::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use lexistat::classification::{
    BinaryClassifier, LogisticRegressionClassifier, LogisticRegressionConfig, NaiveBayesClassifier,
};
use lexistat::feature::{FeatureExtractor, UnigramFeature};
use lexistat::language_model::NgramModel;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const WORDS: &[&str] = &[
    "the", "movie", "was", "great", "terrible", "acting", "plot", "boring", "wonderful", "and",
    "a", "story", "awful", "loved", "hated", "film", "it", "not", "very", "good", "bad", "scene",
    "music", "ending", "characters", "slow", "funny", "dull", "brilliant", "mess",
];

/// Generate random sentences with labels for benchmarking.
fn generate_corpus(count: usize, seed: u64) -> (Vec<Vec<String>>, Vec<u8>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut sentences = Vec::with_capacity(count);
    let mut labels = Vec::with_capacity(count);

    for i in 0..count {
        let length = rng.random_range(5..30);
        let sentence = (0..length)
            .map(|_| WORDS[rng.random_range(0..WORDS.len())].to_string())
            .collect();
        sentences.push(sentence);
        labels.push((i % 2) as u8);
    }

    (sentences, labels)
}

/// Benchmark text analysis and tokenization.
fn bench_tokenization(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenization");

    let analyzer = PipelineAnalyzer::standard().unwrap();
    let (sentences, _) = generate_corpus(100, 1);
    let texts: Vec<String> = sentences.iter().map(|s| s.join(" ")).collect();

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("analyze_batch", |b| {
        b.iter(|| {
            for text in &texts {
                let tokens = analyzer.analyze_to_strings(black_box(text));
                let _ = black_box(tokens);
            }
        })
    });

    group.finish();
}

/// Benchmark classifier training and prediction.
fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");
    group.sample_size(20);

    let (sentences, labels) = generate_corpus(1000, 2);
    let mut extractor = UnigramFeature::new();
    extractor.fit(&sentences);
    let x = extractor.transform_list(&sentences);

    group.bench_function("unigram_transform_list", |b| {
        b.iter(|| black_box(extractor.transform_list(black_box(&sentences))))
    });

    group.bench_function("naive_bayes_fit", |b| {
        b.iter(|| {
            let mut classifier = NaiveBayesClassifier::new();
            classifier.fit(black_box(&x), black_box(&labels)).unwrap();
            black_box(classifier)
        })
    });

    let mut naive_bayes = NaiveBayesClassifier::new();
    naive_bayes.fit(&x, &labels).unwrap();
    group.bench_function("naive_bayes_explain", |b| {
        b.iter(|| black_box(naive_bayes.explain(black_box(&x)).unwrap()))
    });

    group.bench_function("logistic_regression_100_epochs", |b| {
        b.iter(|| {
            let mut classifier =
                LogisticRegressionClassifier::with_config(LogisticRegressionConfig {
                    epochs: 100,
                    ..Default::default()
                });
            classifier.fit(black_box(&x), black_box(&labels)).unwrap();
            black_box(classifier)
        })
    });

    group.finish();
}

/// Benchmark n-gram model fitting and evaluation.
fn bench_language_model(c: &mut Criterion) {
    let mut group = c.benchmark_group("language_model");

    let (train, _) = generate_corpus(2000, 3);
    let (test, _) = generate_corpus(200, 4);

    group.bench_function("trigram_fit", |b| {
        b.iter(|| {
            let mut model = NgramModel::trigram();
            model.fit(black_box(&train)).unwrap();
            black_box(model)
        })
    });

    let mut model = NgramModel::bigram();
    model.fit(&train).unwrap();
    group.throughput(Throughput::Elements(test.len() as u64));
    group.bench_function("bigram_perplexity", |b| {
        b.iter(|| black_box(model.perplexity(black_box(&test)).unwrap()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_tokenization,
    bench_classification,
    bench_language_model
);
criterion_main!(benches);
