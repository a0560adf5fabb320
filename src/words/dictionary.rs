//! The word-validity oracle.
//!
//! The real word list is static data owned by the host application; the
//! engine only needs a yes/no answer, so it takes the oracle as a trait.

use std::collections::HashSet;

/// Read-only word-validity lookup.
pub trait Dictionary {
    fn is_valid_word(&self, word: &str) -> bool;
}

/// Simple set-backed dictionary, case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for word in words {
            list.insert(word.as_ref());
        }
        list
    }

    pub fn insert(&mut self, word: &str) {
        self.words.insert(word.to_ascii_uppercase());
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn is_valid_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_uppercase())
    }
}
