//! Offline progress: a pure simulation over a snapshot of the save.
//!
//! The simulator never touches `GameState` directly; it reads an
//! [`OfflineSnapshot`], so the same code can power a "while you were away"
//! preview without committing anything. Managed wells are approximated as
//! continuous income (collect delays ignored); presses and monkeys replay
//! their discrete cycles.

use crate::core::constants::MAX_OFFLINE_SECONDS;
use crate::core::game_state::GameState;
use crate::letters::generation::{random_letter, roll_tile_type};
use crate::letters::inventory::{add_letter, LetterCounts, TileType};
use crate::monkeys::available_words;
use crate::presses::logic::ProducedTile;
use crate::words::types::LexiconEntry;
use chrono::Utc;
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct WellSnapshot {
    pub fill_rate: f64,
    pub managed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PressSnapshot {
    pub managed: bool,
    pub running: bool,
    /// Seconds left in the in-flight cycle, if running.
    pub timer: f64,
    pub interval: f64,
    pub tiles_per_cycle: u32,
    pub tile_probs: Vec<(TileType, f64)>,
}

/// Everything the simulator needs, detached from the live state.
#[derive(Debug, Clone, PartialEq)]
pub struct OfflineSnapshot {
    pub wells: Vec<WellSnapshot>,
    pub presses: Vec<PressSnapshot>,
    pub total_letters: u32,
    pub max_letters: u32,
    pub ink_mult: f64,
    pub monkey_timers: Vec<f64>,
    pub monkey_search_seconds: f64,
    pub monkey_find_chance: f64,
    /// Published words not currently in the lexicon.
    pub available_words: Vec<String>,
}

impl OfflineSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            wells: state
                .wells
                .iter()
                .map(|well| WellSnapshot {
                    fill_rate: well.fill_rate(),
                    managed: well.is_managed(),
                })
                .collect(),
            presses: state
                .presses
                .iter()
                .map(|press| PressSnapshot {
                    managed: press.manager_owned,
                    running: press.running,
                    timer: press.timer,
                    interval: press.interval(),
                    tiles_per_cycle: press.tiles_per_cycle(),
                    tile_probs: press.tile_probs(),
                })
                .collect(),
            total_letters: state.total_letters(),
            max_letters: state.effective_max_letters(),
            ink_mult: state.effective_ink_mult(),
            monkey_timers: state.monkey_timers.clone(),
            monkey_search_seconds: state.monkey_search_seconds(),
            monkey_find_chance: state.monkey_find_chance(),
            available_words: available_words(&state.volumes, &state.lexicon),
        }
    }
}

/// What happened while the player was away.
#[derive(Debug, Clone, Default)]
pub struct OfflineReport {
    pub elapsed_seconds: u64,
    /// True when the away time exceeded the offline cap.
    pub capped: bool,
    pub ink_earned: f64,
    pub new_normals: LetterCounts,
    pub new_specials: Vec<ProducedTile>,
    pub total_new_letters: u32,
    pub monkey_words: Vec<LexiconEntry>,
}

/// Replays `elapsed_seconds` of away time against a snapshot.
pub fn simulate_offline(
    snapshot: &OfflineSnapshot,
    elapsed_seconds: u64,
    rng: &mut impl Rng,
) -> OfflineReport {
    let mut report = OfflineReport {
        elapsed_seconds,
        ..OfflineReport::default()
    };
    if elapsed_seconds == 0 {
        return report;
    }
    let secs = elapsed_seconds as f64;

    // Managed wells: continuous-income approximation
    report.ink_earned = snapshot
        .wells
        .iter()
        .filter(|well| well.managed)
        .map(|well| well.fill_rate * snapshot.ink_mult * secs)
        .sum();

    // Presses share the letter storage left at save time. Cycles past the
    // storage limit still complete; their tiles are simply lost.
    let mut headroom = snapshot.max_letters.saturating_sub(snapshot.total_letters);
    for press in &snapshot.presses {
        let mut completions: u64 = 0;
        if press.running {
            if secs >= press.timer {
                completions += 1;
                if press.managed && press.interval > 0.0 {
                    completions += ((secs - press.timer) / press.interval) as u64;
                }
            }
        } else if press.managed && press.interval > 0.0 {
            completions = (secs / press.interval) as u64;
        }

        for _ in 0..completions {
            let count = press.tiles_per_cycle.min(headroom);
            for _ in 0..count {
                let tile = ProducedTile {
                    letter: random_letter(rng),
                    tile_type: roll_tile_type(&press.tile_probs, rng),
                };
                if tile.tile_type.is_special() {
                    report.new_specials.push(tile);
                } else {
                    add_letter(&mut report.new_normals, tile.letter, 1);
                }
                report.total_new_letters += 1;
                headroom -= 1;
            }
            if headroom == 0 {
                break;
            }
        }
    }

    // Monkeys fire on their saved schedule; finds draw without replacement.
    // Failed rolls produce nothing offline (gibberish is live-only flavor).
    let mut pool = snapshot.available_words.clone();
    for &timer in &snapshot.monkey_timers {
        if secs < timer {
            continue;
        }
        let firings = 1 + ((secs - timer) / snapshot.monkey_search_seconds.max(1.0)) as u64;
        for _ in 0..firings {
            if pool.is_empty() {
                break;
            }
            if rng.gen::<f64>() < snapshot.monkey_find_chance {
                let index = rng.gen_range(0..pool.len());
                let word = pool.swap_remove(index);
                report.monkey_words.push(LexiconEntry::from_plain_word(&word));
            }
        }
    }

    report
}

/// [`apply_offline_progress`] against the current wall clock.
pub fn apply_offline_progress_now(
    state: &mut GameState,
    rng: &mut impl Rng,
) -> OfflineReport {
    apply_offline_progress(state, Utc::now().timestamp(), rng)
}

/// Folds away time into the live state.
///
/// Elapsed time is capped; unmanaged wells fill toward capacity, managed
/// wells' income arrives as ink, press timers and monkey timers advance, and
/// monkey finds land in the lexicon.
pub fn apply_offline_progress(
    state: &mut GameState,
    now: i64,
    rng: &mut impl Rng,
) -> OfflineReport {
    let raw_elapsed = (now - state.last_save_time).max(0) as u64;
    state.last_save_time = now;
    if raw_elapsed == 0 {
        return OfflineReport::default();
    }
    let capped = raw_elapsed > MAX_OFFLINE_SECONDS;
    let elapsed = raw_elapsed.min(MAX_OFFLINE_SECONDS);
    let secs = elapsed as f64;

    let snapshot = OfflineSnapshot::capture(state);
    let mut report = simulate_offline(&snapshot, elapsed, rng);
    report.capped = capped;

    state.ink += report.ink_earned;
    for (&letter, &count) in &report.new_normals {
        add_letter(&mut state.letters, letter, count);
    }
    for tile in &report.new_specials {
        state.add_produced_tile(*tile);
    }
    for entry in &report.monkey_words {
        state.lexicon.push(entry.clone());
    }

    let ink_mult = snapshot.ink_mult;
    for well in &mut state.wells {
        if !well.is_managed() {
            let capacity = well.capacity();
            well.ink = (well.ink + well.fill_rate() * ink_mult * secs).min(capacity);
        }
    }

    // In-flight cycles that finished while away leave the press idle; the
    // manager scan restarts managed ones on the next live tick.
    for press in &mut state.presses {
        if press.running {
            if secs >= press.timer {
                press.running = false;
                press.timer = 0.0;
            } else {
                press.timer -= secs;
            }
        }
    }

    let search = snapshot.monkey_search_seconds.max(1.0);
    for timer in &mut state.monkey_timers {
        if *timer > secs {
            *timer -= secs;
        } else {
            *timer = search - ((secs - *timer) % search);
        }
    }

    report
}
