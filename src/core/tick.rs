//! The 100ms game tick: wells fill, presses run, managers act, monkeys type.

use crate::core::constants::{MANAGER_SCAN_TICKS, TICKS_PER_SECOND, TICK_INTERVAL_MS};
use crate::core::game_state::GameState;
use crate::monkeys::{available_words, tick_monkeys};
use crate::presses::logic::{start_press, tick_press, ProducedTile};
use crate::utils::format::format_number;
use crate::wells::logic::tick_well;
use rand::Rng;

/// Something user-visible that happened during a tick.
#[derive(Debug, Clone)]
pub enum TickEvent {
    WellCollected {
        well_id: u64,
        amount: f64,
        crit: bool,
        message: String,
    },
    PressYielded {
        press_id: u64,
        tiles: Vec<ProducedTile>,
        message: String,
    },
    PressStarved {
        press_id: u64,
        message: String,
    },
    PressStarted {
        press_id: u64,
    },
    MonkeyFoundWord {
        word: String,
        score: u64,
        message: String,
    },
    MonkeyScribble {
        text: String,
        message: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct TickResult {
    pub events: Vec<TickEvent>,
}

/// Advances the whole game by one tick.
///
/// `tick_counter` counts ticks within the current second; once-per-second
/// work (play time, monkeys) runs when it wraps. Managers scan every other
/// tick so automation lags player actions by at most 200ms.
pub fn game_tick(
    state: &mut GameState,
    tick_counter: &mut u32,
    rng: &mut impl Rng,
) -> TickResult {
    let dt = TICK_INTERVAL_MS as f64 / 1000.0;
    let mut result = TickResult::default();
    let ink_mult = state.effective_ink_mult();

    // Wells
    let mut collected = Vec::new();
    for well in &mut state.wells {
        if let Some(collection) = tick_well(well, dt, ink_mult, rng) {
            collected.push((well.id, collection));
        }
    }
    for (well_id, collection) in collected {
        state.ink += collection.amount;
        let message = if collection.crit {
            format!(
                "CRIT! Well {} overflowed for {} ink!",
                well_id,
                format_number(collection.amount)
            )
        } else {
            format!(
                "Collected {} ink from well {}",
                format_number(collection.amount),
                well_id
            )
        };
        result.events.push(TickEvent::WellCollected {
            well_id,
            amount: collection.amount,
            crit: collection.crit,
            message,
        });
    }

    // Presses. Headroom is re-read after every completed cycle so presses
    // finishing in the same tick share the remaining storage.
    let mut headroom = state.letter_headroom();
    for index in 0..state.presses.len() {
        let press_id = state.presses[index].id;
        let Some(tiles) = tick_press(&mut state.presses[index], dt, headroom, rng) else {
            continue;
        };
        if tiles.is_empty() {
            result.events.push(TickEvent::PressStarved {
                press_id,
                message: format!("Press {} finished but letter storage is full", press_id),
            });
            continue;
        }
        for tile in &tiles {
            state.add_produced_tile(*tile);
        }
        headroom = state.letter_headroom();
        let message = format!("Press {} stamped out {} tile(s)", press_id, tiles.len());
        result.events.push(TickEvent::PressYielded {
            press_id,
            tiles,
            message,
        });
    }

    // Managers restart idle presses
    *tick_counter += 1;
    if *tick_counter % MANAGER_SCAN_TICKS == 0 {
        for press in &mut state.presses {
            if press.manager_owned && !press.running && headroom > 0 {
                if start_press(press, headroom) {
                    result.events.push(TickEvent::PressStarted { press_id: press.id });
                }
            }
        }
    }

    // Once-per-second work
    if *tick_counter >= TICKS_PER_SECOND {
        *tick_counter = 0;
        state.play_time_seconds += 1;

        if !state.monkey_timers.is_empty() {
            let search = state.monkey_search_seconds();
            let chance = state.monkey_find_chance();
            let mut pool = available_words(&state.volumes, &state.lexicon);
            let mut timers = std::mem::take(&mut state.monkey_timers);

            let outcome = tick_monkeys(&mut timers, search, chance, &mut pool, rng);

            state.monkey_timers = timers;
            for entry in outcome.found {
                let message = format!(
                    "A monkey typed {} for {} points!",
                    entry.word,
                    format_number(entry.score as f64)
                );
                result.events.push(TickEvent::MonkeyFoundWord {
                    word: entry.word.clone(),
                    score: entry.score,
                    message,
                });
                state.lexicon.push(entry);
            }
            for text in outcome.gibberish {
                let message = format!("A monkey typed \"{}\"... not a word", text);
                result.events.push(TickEvent::MonkeyScribble { text, message });
            }
        }
    }

    result
}
