//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::classification::ClassificationMetrics;
use crate::cli::args::{LexistatArgs, OutputFormat};
use crate::error::Result;

/// A feature with its Naive Bayes log-odds ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedFeature {
    pub term: String,
    pub ratio: f64,
}

/// Result structure for a classification run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub classifier: String,
    pub features: String,
    pub vocabulary_size: usize,
    pub train_samples: usize,
    pub test_samples: usize,
    pub train: ClassificationMetrics,
    pub test: ClassificationMetrics,
    pub final_loss: Option<f64>,
    pub top_features: Option<Vec<RankedFeature>>,
    pub bottom_features: Option<Vec<RankedFeature>>,
    pub duration_ms: u64,
}

/// Result structure for a perplexity run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerplexityResult {
    pub order: String,
    pub vocabulary_size: usize,
    pub train_sentences: usize,
    pub test_sentences: usize,
    pub train_perplexity: f64,
    pub test_perplexity: f64,
    pub duration_ms: u64,
}

/// Results that know how to print themselves for humans.
pub trait HumanOutput {
    fn print_human(&self);
}

impl HumanOutput for ClassificationResult {
    fn print_human(&self) {
        println!("Classification Results:");
        println!("═══════════════════════");
        println!("Classifier: {}", self.classifier);
        println!("Features: {} ({} terms)", self.features, self.vocabulary_size);
        println!("Samples: {} train / {} test", self.train_samples, self.test_samples);
        if let Some(loss) = self.final_loss {
            println!("Final training loss: {loss:.6}");
        }

        print_metrics("Train", &self.train);
        print_metrics("Test", &self.test);

        if let Some(top) = &self.top_features {
            print_features("Most positive features", top.iter().rev());
        }
        if let Some(bottom) = &self.bottom_features {
            print_features("Most negative features", bottom.iter());
        }

        println!();
        println!("Total time: {}ms", self.duration_ms);
    }
}

impl HumanOutput for PerplexityResult {
    fn print_human(&self) {
        println!("Language Model Results:");
        println!("═══════════════════════");
        println!("Model: {}", self.order);
        println!("Vocabulary size: {}", self.vocabulary_size);
        println!(
            "Sentences: {} train / {} test",
            self.train_sentences, self.test_sentences
        );
        println!("Train perplexity: {:.4}", self.train_perplexity);
        println!("Test perplexity: {:.4}", self.test_perplexity);
        println!();
        println!("Total time: {}ms", self.duration_ms);
    }
}

fn print_metrics(label: &str, metrics: &ClassificationMetrics) {
    let cm = &metrics.confusion_matrix;
    println!();
    println!("{label}:");
    println!("─────");
    println!("  Accuracy:  {:.4}", metrics.accuracy);
    println!("  Precision: {:.4}", metrics.precision);
    println!("  Recall:    {:.4}", metrics.recall);
    println!("  F1:        {:.4}", metrics.f1);
    println!(
        "  TP {} / TN {} / FP {} / FN {}",
        cm.tp, cm.tn, cm.fp, cm.fn_
    );
}

fn print_features<'a>(title: &str, features: impl Iterator<Item = &'a RankedFeature>) {
    println!();
    println!("{title}:");
    for feature in features {
        println!("  {:<20} {:.4}", feature.term, feature.ratio);
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &LexistatArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.print_human();
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LexistatArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
