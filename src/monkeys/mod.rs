//! Typewriter monkeys: rediscover previously published words.
//!
//! Each monkey runs an independent countdown. On expiry it rolls a find
//! chance against a shared pool of rediscoverable words; a hit pulls a word
//! from the pool into the lexicon at base score, a miss emits gibberish.

use crate::letters::generation::gibberish_word;
use crate::publish::types::Volume;
use crate::words::types::LexiconEntry;
use rand::Rng;
use std::collections::HashSet;

/// Results of one second of monkey searching.
#[derive(Debug, Clone, Default)]
pub struct MonkeyTickOutcome {
    pub found: Vec<LexiconEntry>,
    pub gibberish: Vec<String>,
}

/// Advances every monkey timer by one second. Expired timers reset to
/// `search_seconds` and roll for a find; found words leave `pool` so two
/// monkeys can never rediscover the same word.
pub fn tick_monkeys(
    timers: &mut [f64],
    search_seconds: f64,
    find_chance: f64,
    pool: &mut Vec<String>,
    rng: &mut impl Rng,
) -> MonkeyTickOutcome {
    let mut outcome = MonkeyTickOutcome::default();

    for timer in timers.iter_mut() {
        *timer -= 1.0;
        if *timer > 0.0 {
            continue;
        }
        *timer = search_seconds.max(1.0);

        if !pool.is_empty() && rng.gen::<f64>() < find_chance {
            let index = rng.gen_range(0..pool.len());
            let word = pool.swap_remove(index);
            outcome.found.push(LexiconEntry::from_plain_word(&word));
        } else {
            outcome.gibberish.push(gibberish_word(rng));
        }
    }

    outcome
}

/// Words the monkeys can still rediscover: every word from a published
/// volume that is not already in the current lexicon, deduplicated.
pub fn available_words(volumes: &[Volume], lexicon: &[LexiconEntry]) -> Vec<String> {
    let current: HashSet<&str> = lexicon.iter().map(|entry| entry.word.as_str()).collect();
    let mut seen = HashSet::new();
    let mut pool = Vec::new();

    for volume in volumes {
        for entry in &volume.entries {
            if !current.contains(entry.word.as_str()) && seen.insert(entry.word.clone()) {
                pool.push(entry.word.clone());
            }
        }
    }

    pool
}
