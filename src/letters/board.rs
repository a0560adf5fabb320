//! Word-board tiles and inventory resolution.
//!
//! Placed tiles are ephemeral: they exist between "place" and "create word"
//! or "clear". Resolution against the inventory is all-or-nothing - the
//! caller must not mutate any state when it returns `None`.

use super::inventory::{remove_letter, LetterCounts, SpecialTile, TileType};
use super::scoring::letter_score;
use serde::{Deserialize, Serialize};

/// A tile placed on the word board, awaiting commitment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardTile {
    pub id: String,
    pub letter: char,
    pub tile_type: TileType,
    /// Special tile this placement came from, when known.
    pub source_tile_id: Option<String>,
}

/// One resolved board tile: the letter, the tile effect, and the base score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileAssignment {
    pub letter: char,
    pub tile_type: TileType,
    pub score: u64,
}

/// Successful resolution of a full board against the inventory.
#[derive(Debug, Clone)]
pub struct BoardResolution {
    pub assignments: Vec<TileAssignment>,
    /// The letter map after deduction, to swap in on commit.
    pub new_letters: LetterCounts,
    pub used_special_ids: Vec<String>,
}

/// Resolves placed tiles against the inventory, left to right.
///
/// - Wildcards prefer their exact source tile among unused wildcards, then
///   any unused wildcard.
/// - Other special types need an exact `(letter, type)` match among unused
///   special tiles (source id preferred when present).
/// - Normal tiles decrement the letter-count map.
///
/// Returns `None` on any failure; nothing is consumed in that case.
pub fn assign_tiles_from_board(
    placed: &[BoardTile],
    letters: &LetterCounts,
    specials: &[SpecialTile],
) -> Option<BoardResolution> {
    let mut new_letters = letters.clone();
    let mut used_special_ids: Vec<String> = Vec::new();
    let mut assignments = Vec::with_capacity(placed.len());

    for tile in placed {
        match tile.tile_type {
            TileType::Normal => {
                if !remove_letter(&mut new_letters, tile.letter) {
                    return None;
                }
                assignments.push(TileAssignment {
                    letter: tile.letter,
                    tile_type: TileType::Normal,
                    score: letter_score(tile.letter) as u64,
                });
            }
            TileType::Lexicoin => {
                let unused = |s: &&SpecialTile| {
                    s.tile_type == TileType::Lexicoin && !used_special_ids.contains(&s.id)
                };
                let exact = tile.source_tile_id.as_ref().and_then(|src| {
                    specials.iter().filter(unused).find(|s| &s.id == src)
                });
                let chosen = exact.or_else(|| specials.iter().find(unused))?;
                used_special_ids.push(chosen.id.clone());
                assignments.push(TileAssignment {
                    letter: tile.letter,
                    tile_type: TileType::Lexicoin,
                    score: 0,
                });
            }
            special => {
                let unused = |s: &&SpecialTile| {
                    s.tile_type == special
                        && s.letter == Some(tile.letter)
                        && !used_special_ids.contains(&s.id)
                };
                let exact = tile.source_tile_id.as_ref().and_then(|src| {
                    specials.iter().filter(unused).find(|s| &s.id == src)
                });
                let chosen = exact.or_else(|| specials.iter().find(unused))?;
                used_special_ids.push(chosen.id.clone());
                assignments.push(TileAssignment {
                    letter: tile.letter,
                    tile_type: special,
                    score: letter_score(tile.letter) as u64,
                });
            }
        }
    }

    Some(BoardResolution {
        assignments,
        new_letters,
        used_special_ids,
    })
}
