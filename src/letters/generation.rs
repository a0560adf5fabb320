//! Random letter and tile-type generation.
//!
//! All draws are cumulative-weight roulette selections over fixed tables,
//! driven by an injected `Rng` so tests can seed them.

use super::inventory::TileType;
use crate::core::constants::{FALLBACK_LETTER, GIBBERISH_MAX_LEN, GIBBERISH_MIN_LEN};
use rand::Rng;

/// English letter frequencies in percent, alphabetical order. Sums to ~100.
pub const LETTER_FREQUENCIES: [(char, f64); 26] = [
    ('A', 8.167),
    ('B', 1.492),
    ('C', 2.782),
    ('D', 4.253),
    ('E', 12.702),
    ('F', 2.228),
    ('G', 2.015),
    ('H', 6.094),
    ('I', 6.966),
    ('J', 0.153),
    ('K', 0.772),
    ('L', 4.025),
    ('M', 2.406),
    ('N', 6.749),
    ('O', 7.507),
    ('P', 1.929),
    ('Q', 0.095),
    ('R', 5.987),
    ('S', 6.327),
    ('T', 9.056),
    ('U', 2.758),
    ('V', 0.978),
    ('W', 2.360),
    ('X', 0.150),
    ('Y', 1.974),
    ('Z', 0.074),
];

/// Draws a letter weighted by English frequency.
///
/// Uniform roll in `[0, total)`, then subtract weights in table order and
/// return the letter where the remainder goes non-positive. Falls back to a
/// fixed letter if floating point exhausts the table.
pub fn random_letter(rng: &mut impl Rng) -> char {
    let total: f64 = LETTER_FREQUENCIES.iter().map(|(_, w)| w).sum();
    let mut roll = rng.gen_range(0.0..total);
    for (letter, weight) in LETTER_FREQUENCIES {
        roll -= weight;
        if roll <= 0.0 {
            return letter;
        }
    }
    FALLBACK_LETTER
}

/// Rolls a tile type against a list of `(type, chance)` pairs.
///
/// Cumulative roulette over a uniform `[0, 1)` roll; any probability mass not
/// covered by the list resolves to `Normal`. Chances are additive offsets and
/// are deliberately not normalized (soft cap).
pub fn roll_tile_type(probs: &[(TileType, f64)], rng: &mut impl Rng) -> TileType {
    let roll: f64 = rng.gen();
    let mut cumulative = 0.0;
    for &(tile_type, chance) in probs {
        cumulative += chance;
        if roll < cumulative {
            return tile_type;
        }
    }
    TileType::Normal
}

/// Bernoulli crit trial: `base * crit_mult` flagged on success, `base` otherwise.
pub fn roll_crit(base: f64, crit_chance: f64, crit_mult: f64, rng: &mut impl Rng) -> (f64, bool) {
    if rng.gen::<f64>() < crit_chance {
        (base * crit_mult, true)
    } else {
        (base, false)
    }
}

/// Random 3-6 letter non-word, used as monkey flavor when a search fails.
pub fn gibberish_word(rng: &mut impl Rng) -> String {
    let len = rng.gen_range(GIBBERISH_MIN_LEN..=GIBBERISH_MAX_LEN);
    (0..len).map(|_| random_letter(rng)).collect()
}
