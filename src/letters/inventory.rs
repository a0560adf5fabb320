//! Letter inventory and special tiles.
//!
//! Normal letters live in a count map (zero-count entries are removed so the
//! map always reflects exactly what the player holds). Special tiles carry a
//! unique id and are consumed by id, never by position.

use crate::utils::ids::new_tile_id;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The effect a tile applies when used in a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileType {
    Normal,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
    Golden,
    Lexicoin,
}

impl TileType {
    /// Returns the display name for this tile type.
    pub fn name(&self) -> &'static str {
        match self {
            TileType::Normal => "Normal",
            TileType::DoubleLetter => "Double Letter",
            TileType::TripleLetter => "Triple Letter",
            TileType::DoubleWord => "Double Word",
            TileType::TripleWord => "Triple Word",
            TileType::Golden => "Golden",
            TileType::Lexicoin => "Lexicoin",
        }
    }

    pub fn is_special(&self) -> bool {
        !matches!(self, TileType::Normal)
    }

    /// Wildcard tiles have no letter until the player assigns one.
    pub fn is_wildcard(&self) -> bool {
        matches!(self, TileType::Lexicoin)
    }
}

/// A bonus-effect tile held in the special-tile list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialTile {
    pub id: String,
    /// None for an unassigned wildcard (Lexicoin) tile.
    pub letter: Option<char>,
    pub tile_type: TileType,
}

impl SpecialTile {
    pub fn new(letter: Option<char>, tile_type: TileType) -> Self {
        Self {
            id: new_tile_id(),
            letter,
            tile_type,
        }
    }
}

/// Normal-letter inventory: uppercase letter -> count.
pub type LetterCounts = BTreeMap<char, u32>;

/// Adds `count` copies of a letter to the inventory.
pub fn add_letter(letters: &mut LetterCounts, letter: char, count: u32) {
    if count == 0 {
        return;
    }
    *letters.entry(letter.to_ascii_uppercase()).or_insert(0) += count;
}

/// Removes one copy of a letter. Returns false (and leaves the map untouched)
/// when none are held. Entries that reach zero are removed.
pub fn remove_letter(letters: &mut LetterCounts, letter: char) -> bool {
    let key = letter.to_ascii_uppercase();
    match letters.get_mut(&key) {
        Some(count) if *count > 1 => {
            *count -= 1;
            true
        }
        Some(_) => {
            letters.remove(&key);
            true
        }
        None => false,
    }
}

/// Total normal letters held.
pub fn count_letters(letters: &LetterCounts) -> u32 {
    letters.values().sum()
}
