//! Corpus file loading for the CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, anyhow};

/// Review texts with their sentiment labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabeledCorpus {
    pub texts: Vec<String>,
    pub labels: Vec<u8>,
}

impl LabeledCorpus {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Read `<label>\t<text>` lines. Blank lines are skipped.
pub fn read_labeled<P: AsRef<Path>>(path: P) -> anyhow::Result<LabeledCorpus> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;

    let mut corpus = LabeledCorpus::default();
    for (line_num, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("failed to read {}", path.display()))?;
        if line.trim().is_empty() {
            continue;
        }

        let (label, text) = line.split_once('\t').ok_or_else(|| {
            anyhow!(
                "{}:{}: expected `<label>\\t<text>`",
                path.display(),
                line_num + 1
            )
        })?;
        let label = match label.trim() {
            "0" => 0,
            "1" => 1,
            other => {
                return Err(anyhow!(
                    "{}:{}: label must be 0 or 1, got {other:?}",
                    path.display(),
                    line_num + 1
                ));
            }
        };

        corpus.labels.push(label);
        corpus.texts.push(text.to_string());
    }

    log::info!("loaded {} labeled samples from {}", corpus.len(), path.display());
    Ok(corpus)
}

/// Read one whitespace-tokenized sentence per line. Blank lines are skipped.
pub fn read_sentences<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Vec<String>>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;

    let mut sentences = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.with_context(|| format!("failed to read {}", path.display()))?;
        let tokens: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        if !tokens.is_empty() {
            sentences.push(tokens);
        }
    }

    log::info!("loaded {} sentences from {}", sentences.len(), path.display());
    Ok(sentences)
}
