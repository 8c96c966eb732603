//! Token → column index mapping for bag-of-words features.

use ahash::AHashMap;

/// Vocabulary in first-seen order.
///
/// Indices are dense: the n-th distinct token inserted gets index n.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Terms by index.
    terms: Vec<String>,
    /// Term -> index.
    index: AHashMap<String, usize>,
}

impl Vocabulary {
    /// Create an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `term` if unseen and return its index.
    pub fn insert(&mut self, term: &str) -> usize {
        if let Some(&idx) = self.index.get(term) {
            return idx;
        }
        let idx = self.terms.len();
        self.terms.push(term.to_string());
        self.index.insert(term.to_string(), idx);
        idx
    }

    /// Index of `term`, if present.
    pub fn get(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Term at `index`, if present.
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    /// Check if `term` is present.
    pub fn contains(&self, term: &str) -> bool {
        self.index.contains_key(term)
    }

    /// All terms in index order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_order() {
        let mut vocabulary = Vocabulary::new();
        assert_eq!(vocabulary.insert("love"), 0);
        assert_eq!(vocabulary.insert("nlp"), 1);
        assert_eq!(vocabulary.insert("love"), 0);

        assert_eq!(vocabulary.len(), 2);
        assert_eq!(vocabulary.get("nlp"), Some(1));
        assert_eq!(vocabulary.get("python"), None);
        assert_eq!(vocabulary.term(0), Some("love"));
        assert_eq!(vocabulary.terms(), &["love".to_string(), "nlp".to_string()]);
    }
}
