//! Quill payout calculation and the publish state transition.

use super::types::Volume;
use crate::core::constants::{
    QUILLS_PER_NEW_WORD, QUILLS_PER_SCORE_POINT, TOP_WORDS_COUNT, TOP_WORDS_DIVISOR,
};
use crate::core::game_state::GameState;
use crate::words::types::{lexicon_ordering, LexiconEntry};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishError {
    EmptyLexicon,
}

impl std::fmt::Display for PublishError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PublishError::EmptyLexicon => write!(f, "nothing to publish"),
        }
    }
}

/// Itemized quill payout for a would-be publish.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QuillsBreakdown {
    /// Entries whose word never appeared in a previous volume.
    pub new_word_count: u32,
    pub word_bonus: f64,
    /// Floored before entering the base.
    pub lexicoin_bonus: f64,
    pub base: f64,
    /// Score sum of the top entries in book order.
    pub top_total: u64,
    pub high_mult: f64,
    pub design_mult: f64,
    /// Floored final payout.
    pub total: f64,
}

/// Computes the quill payout for `entries` without mutating anything.
///
/// `a` is quills per new word, `b` quills per score point. The payout is
/// `floor((a*newWords + floor(b*totalScore)) * (1 + top10/divisor) * coverMult * pageMult)`.
pub fn calculate_quills_breakdown(
    entries: &[LexiconEntry],
    cover_mult: f64,
    page_mult: f64,
    a: f64,
    b: f64,
    previous_words: &HashSet<String>,
) -> QuillsBreakdown {
    let new_word_count = entries
        .iter()
        .filter(|entry| !previous_words.contains(&entry.word))
        .count() as u32;
    let word_bonus = a * new_word_count as f64;

    let total_score: u64 = entries.iter().map(|entry| entry.score).sum();
    let lexicoin_bonus = (b * total_score as f64).floor();
    let base = word_bonus + lexicoin_bonus;

    let mut ranked: Vec<&LexiconEntry> = entries.iter().collect();
    ranked.sort_by(|x, y| lexicon_ordering(x, y));
    let top_total: u64 = ranked
        .iter()
        .take(TOP_WORDS_COUNT)
        .map(|entry| entry.score)
        .sum();
    let high_mult = 1.0 + top_total as f64 / TOP_WORDS_DIVISOR;

    let design_mult = cover_mult * page_mult;
    let total = (base * high_mult * design_mult).floor();

    QuillsBreakdown {
        new_word_count,
        word_bonus,
        lexicoin_bonus,
        base,
        top_total,
        high_mult,
        design_mult,
        total,
    }
}

/// Every word appearing in any published volume.
pub fn published_word_set(volumes: &[Volume]) -> HashSet<String> {
    volumes
        .iter()
        .flat_map(|volume| volume.entries.iter().map(|entry| entry.word.clone()))
        .collect()
}

/// Outcome of a confirmed publish.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishReport {
    pub breakdown: QuillsBreakdown,
    pub words_published: usize,
}

pub fn can_publish(state: &GameState) -> bool {
    !state.lexicon.is_empty()
}

/// The quill payout the current lexicon would earn right now.
pub fn quote_publish(state: &GameState) -> QuillsBreakdown {
    calculate_quills_breakdown(
        &state.lexicon,
        state.cosmetics.cover_multiplier(),
        state.cosmetics.page_multiplier(),
        QUILLS_PER_NEW_WORD,
        QUILLS_PER_SCORE_POINT,
        &published_word_set(&state.volumes),
    )
}

/// Publishes the current lexicon: credits quills, appends an immutable
/// volume stamped with the active cosmetics, then resets the round.
pub fn perform_publish(state: &mut GameState, now: i64) -> Result<PublishReport, PublishError> {
    if state.lexicon.is_empty() {
        return Err(PublishError::EmptyLexicon);
    }

    let breakdown = quote_publish(state);

    let mut entries = std::mem::take(&mut state.lexicon);
    entries.sort_by(lexicon_ordering);
    let words_published = entries.len();

    state.quills += breakdown.total;
    state.volumes.push(Volume {
        entries,
        quills_earned: breakdown.total,
        date: now,
        cover_id: state.cosmetics.active_cover,
        page_id: state.cosmetics.active_page,
    });
    state.total_publish_count += 1;
    state.reset_round();

    Ok(PublishReport {
        breakdown,
        words_published,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, score: u64) -> LexiconEntry {
        LexiconEntry {
            word: word.to_string(),
            score,
            letters: Vec::new(),
        }
    }

    #[test]
    fn test_breakdown_reference_values() {
        // 10 new words, total score 500, no cosmetics:
        // wordBonus=1, lexicoinBonus=25, base=26, highMult=6, total=156
        let entries: Vec<LexiconEntry> =
            (0..10).map(|i| entry(&format!("W{}", i), 50)).collect();
        let breakdown =
            calculate_quills_breakdown(&entries, 1.0, 1.0, 0.1, 0.05, &HashSet::new());

        assert_eq!(breakdown.new_word_count, 10);
        assert!((breakdown.word_bonus - 1.0).abs() < 1e-9);
        assert_eq!(breakdown.lexicoin_bonus, 25.0);
        assert_eq!(breakdown.base, 26.0);
        assert_eq!(breakdown.top_total, 500);
        assert!((breakdown.high_mult - 6.0).abs() < 1e-9);
        assert_eq!(breakdown.total, 156.0);
    }

    #[test]
    fn test_republished_words_earn_no_word_bonus() {
        let entries = vec![entry("CAT", 5), entry("DOG", 5)];
        let mut previous = HashSet::new();
        previous.insert("CAT".to_string());

        let breakdown =
            calculate_quills_breakdown(&entries, 1.0, 1.0, 0.1, 0.05, &previous);
        assert_eq!(breakdown.new_word_count, 1);
    }

    #[test]
    fn test_top_bonus_uses_only_best_entries() {
        // 15 entries; only the 10 best should count toward the high multiplier
        let mut entries: Vec<LexiconEntry> =
            (0..10).map(|i| entry(&format!("HI{}", i), 100)).collect();
        entries.extend((0..5).map(|i| entry(&format!("LO{}", i), 1)));

        let breakdown =
            calculate_quills_breakdown(&entries, 1.0, 1.0, 0.1, 0.05, &HashSet::new());
        assert_eq!(breakdown.top_total, 1000);
    }

    #[test]
    fn test_design_mult_scales_total() {
        let entries = vec![entry("QUIZ", 100)];
        let plain =
            calculate_quills_breakdown(&entries, 1.0, 1.0, 0.1, 0.05, &HashSet::new());
        let styled =
            calculate_quills_breakdown(&entries, 1.5, 2.0, 0.1, 0.05, &HashSet::new());
        assert!((styled.design_mult - 3.0).abs() < 1e-9);
        assert!(styled.total >= plain.total);
    }

    #[test]
    fn test_more_entries_never_earn_less() {
        let mut entries = vec![entry("ONE", 10), entry("TWO", 20)];
        let before =
            calculate_quills_breakdown(&entries, 1.0, 1.0, 0.1, 0.05, &HashSet::new());
        entries.push(entry("THREE", 30));
        let after =
            calculate_quills_breakdown(&entries, 1.0, 1.0, 0.1, 0.05, &HashSet::new());
        assert!(after.total >= before.total);
    }

    #[test]
    fn test_empty_lexicon_pays_nothing() {
        let breakdown = calculate_quills_breakdown(&[], 1.0, 1.0, 0.1, 0.05, &HashSet::new());
        assert_eq!(breakdown.total, 0.0);
    }

    #[test]
    fn test_published_word_set_flattens_volumes() {
        let volumes = vec![
            Volume {
                entries: vec![entry("CAT", 5)],
                quills_earned: 1.0,
                date: 0,
                cover_id: 0,
                page_id: 0,
            },
            Volume {
                entries: vec![entry("DOG", 5), entry("CAT", 5)],
                quills_earned: 1.0,
                date: 0,
                cover_id: 0,
                page_id: 0,
            },
        ];
        let words = published_word_set(&volumes);
        assert_eq!(words.len(), 2);
        assert!(words.contains("CAT"));
        assert!(words.contains("DOG"));
    }
}
