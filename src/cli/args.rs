//! Command line argument parsing for Lexistat CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::classification::ClassifierKind;
use crate::feature::ExtractorKind;

/// Lexistat - sentiment classification and n-gram language modeling
#[derive(Parser, Debug, Clone)]
#[command(name = "lexistat")]
#[command(about = "Bag-of-words sentiment classifiers and n-gram language models")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexistatArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexistatArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n + 1,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train a sentiment classifier and evaluate it on a test set
    Classify(ClassifyArgs),

    /// Fit an n-gram language model and report perplexity
    Perplexity(PerplexityArgs),
}

/// Arguments for sentiment classification
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Training file, one `<label>\t<text>` per line
    #[arg(long, value_name = "TRAIN_FILE")]
    pub train: PathBuf,

    /// Test file, same format as the training file
    #[arg(long, value_name = "TEST_FILE")]
    pub test: PathBuf,

    /// Classifier to train
    #[arg(short = 'm', long, default_value = "naive-bayes")]
    pub classifier: ClassifierArg,

    /// Feature extractor
    #[arg(long, default_value = "unigram")]
    pub features: FeatureArg,
}

/// Arguments for language model evaluation
#[derive(Parser, Debug, Clone)]
pub struct PerplexityArgs {
    /// Training file, one whitespace-tokenized sentence per line
    #[arg(long, value_name = "TRAIN_FILE")]
    pub train: PathBuf,

    /// Test file, same format as the training file
    #[arg(long, value_name = "TEST_FILE")]
    pub test: PathBuf,

    /// N-gram order
    #[arg(short = 'n', long, default_value = "1", value_parser = clap::value_parser!(u8).range(1..=3))]
    pub order: u8,
}

/// Classifiers available in CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassifierArg {
    /// Multinomial Naive Bayes
    NaiveBayes,
    /// L2-regularized logistic regression
    LogisticRegression,
    /// Always predict the negative class
    AlwaysZero,
}

impl From<ClassifierArg> for ClassifierKind {
    fn from(arg: ClassifierArg) -> Self {
        match arg {
            ClassifierArg::NaiveBayes => ClassifierKind::NaiveBayes,
            ClassifierArg::LogisticRegression => ClassifierKind::LogisticRegression,
            ClassifierArg::AlwaysZero => ClassifierKind::AlwaysZero,
        }
    }
}

/// Feature extractors available in CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureArg {
    /// Bag of words over every token
    Unigram,
    /// Bag of words without English stop words
    FilteredUnigram,
}

impl From<FeatureArg> for ExtractorKind {
    fn from(arg: FeatureArg) -> Self {
        match arg {
            FeatureArg::Unigram => ExtractorKind::Unigram,
            FeatureArg::FilteredUnigram => ExtractorKind::FilteredUnigram,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
