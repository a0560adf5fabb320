//! Word scoring: per-letter base scores and bonus-tile multipliers.

use super::board::TileAssignment;
use super::inventory::TileType;

/// Base score per letter, A through Z.
pub const LETTER_SCORES: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

/// Base score for a letter; 0 for anything outside A-Z.
pub fn letter_score(letter: char) -> u32 {
    let upper = letter.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        LETTER_SCORES[(upper as u8 - b'A') as usize]
    } else {
        0
    }
}

/// Breakdown of a scored word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WordScore {
    pub letter_total: u64,
    pub word_mult: u64,
    /// Golden tiles convert 1:1 into golden notebooks, independent of score.
    pub golden_count: u32,
    pub total: u64,
}

/// Scores a resolved tile assignment list.
///
/// Letter bonuses double or triple the tile's base score; word bonuses
/// compound multiplicatively (two double-word tiles give x4). Golden tiles
/// score their base letter and count toward golden notebooks. Lexicoin
/// wildcards score 0 regardless of the assigned letter.
pub fn score_word_with_tiles(assignments: &[TileAssignment]) -> WordScore {
    let mut letter_total: u64 = 0;
    let mut word_mult: u64 = 1;
    let mut golden_count: u32 = 0;

    for assignment in assignments {
        match assignment.tile_type {
            TileType::Normal => letter_total += assignment.score,
            TileType::DoubleLetter => letter_total += assignment.score * 2,
            TileType::TripleLetter => letter_total += assignment.score * 3,
            TileType::DoubleWord => {
                letter_total += assignment.score;
                word_mult *= 2;
            }
            TileType::TripleWord => {
                letter_total += assignment.score;
                word_mult *= 3;
            }
            TileType::Golden => {
                letter_total += assignment.score;
                golden_count += 1;
            }
            TileType::Lexicoin => {}
        }
    }

    WordScore {
        letter_total,
        word_mult,
        golden_count,
        total: letter_total * word_mult,
    }
}
