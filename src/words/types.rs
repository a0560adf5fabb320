//! Lexicon entry types and ordering.

use crate::letters::inventory::TileType;
use crate::letters::scoring::letter_score;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One letter of a created word, with the tile effect it was played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryLetter {
    pub letter: char,
    pub tile_type: TileType,
}

/// A word in the current (unpublished) lexicon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub word: String,
    pub score: u64,
    pub letters: Vec<EntryLetter>,
}

impl LexiconEntry {
    /// Builds an entry from a bare word using all-normal tiles.
    ///
    /// This is the monkey path: score is the plain sum of base letter scores.
    pub fn from_plain_word(word: &str) -> Self {
        let word = word.to_ascii_uppercase();
        let letters: Vec<EntryLetter> = word
            .chars()
            .map(|letter| EntryLetter {
                letter,
                tile_type: TileType::Normal,
            })
            .collect();
        let score = letters
            .iter()
            .map(|l| letter_score(l.letter) as u64)
            .sum();
        Self {
            word,
            score,
            letters,
        }
    }
}

/// Book order: score descending, ties broken by ascending word.
pub fn lexicon_ordering(a: &LexiconEntry, b: &LexiconEntry) -> Ordering {
    b.score.cmp(&a.score).then_with(|| a.word.cmp(&b.word))
}

/// Sorts a lexicon into book order.
pub fn sort_lexicon(entries: &mut [LexiconEntry]) {
    entries.sort_by(lexicon_ordering);
}
