//! Frequency-thresholded vocabulary for n-gram models.

use ahash::AHashMap;

/// Placeholder for rare and unseen tokens.
pub const UNK: &str = "<UNK>";
/// End-of-sentence marker.
pub const STOP: &str = "<STOP>";

pub const UNK_ID: u32 = 0;
pub const STOP_ID: u32 = 1;

/// Token interner built from a training corpus.
///
/// `<UNK>` and `<STOP>` always occupy ids 0 and 1; kept tokens follow in
/// first-seen order. Literal `<UNK>`/`<STOP>` tokens in the corpus never get
/// an id of their own.
#[derive(Debug, Clone)]
pub struct NgramVocabulary {
    ids: AHashMap<String, u32>,
    terms: Vec<String>,
}

impl NgramVocabulary {
    /// Keep every token that occurs at least `min_frequency` times.
    pub fn build<S: AsRef<str>>(sentences: &[Vec<S>], min_frequency: usize) -> Self {
        let mut frequencies: AHashMap<&str, usize> = AHashMap::new();
        for token in sentences.iter().flatten() {
            *frequencies.entry(token.as_ref()).or_insert(0) += 1;
        }

        let mut vocabulary = NgramVocabulary {
            ids: AHashMap::with_capacity(frequencies.len() + 2),
            terms: Vec::with_capacity(frequencies.len() + 2),
        };
        vocabulary.insert(UNK);
        vocabulary.insert(STOP);

        for token in sentences.iter().flatten() {
            let token = token.as_ref();
            if token == UNK || token == STOP {
                continue;
            }
            if frequencies.get(token).copied().unwrap_or(0) >= min_frequency {
                vocabulary.insert(token);
            }
        }

        vocabulary
    }

    fn insert(&mut self, token: &str) {
        if !self.ids.contains_key(token) {
            self.ids.insert(token.to_string(), self.terms.len() as u32);
            self.terms.push(token.to_string());
        }
    }

    /// Id of `token`, or [`UNK_ID`] if it was not kept.
    pub fn id(&self, token: &str) -> u32 {
        self.ids.get(token).copied().unwrap_or(UNK_ID)
    }

    pub fn term(&self, id: u32) -> Option<&str> {
        self.terms.get(id as usize).map(String::as_str)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.ids.contains_key(token)
    }

    /// Number of entries, including `<UNK>` and `<STOP>`.
    pub fn size(&self) -> usize {
        self.terms.len()
    }

    /// All entries in id order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Map a sentence to ids and append `<STOP>`.
    ///
    /// A token spelled `<STOP>` in the text is not a sentence boundary and maps
    /// to `<UNK>`; one spelled `<UNK>` already means unknown.
    pub fn process<S: AsRef<str>>(&self, sentence: &[S]) -> Vec<u32> {
        sentence
            .iter()
            .map(|token| match token.as_ref() {
                STOP => UNK_ID,
                token => self.id(token),
            })
            .chain(std::iter::once(STOP_ID))
            .collect()
    }
}
