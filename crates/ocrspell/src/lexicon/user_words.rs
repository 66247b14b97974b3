// Mutable overflow of lowercase user words.

use std::collections::BTreeSet;

/// Sorted set of supplementary words.
///
/// Everything is lowercased on the way in and on lookup, so membership is
/// case-insensitive. Words are never removed individually.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDictionary {
    words: BTreeSet<String>,
}

impl UserDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `word` in lowercase. Returns `false` if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(word.to_lowercase())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// Iterate over the stored words in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
