//! Press cycle: start, run down the timer, emit tiles.
//!
//! Tile yield is clamped by the caller-supplied letter headroom at the moment
//! the cycle completes. A cycle that completes with zero headroom still ends
//! (the press returns to idle) but yields nothing.

use super::types::{Press, YieldedTile};
use crate::core::constants::TIMER_EPSILON;
use crate::letters::generation::{random_letter, roll_tile_type};
use crate::letters::inventory::TileType;
use rand::Rng;

/// A tile coming off a press. Wildcards get a placeholder letter that the
/// inventory ignores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProducedTile {
    pub letter: char,
    pub tile_type: TileType,
}

/// Starts a production cycle on an idle press. Refused when already running
/// or when the letter inventory has no headroom.
pub fn start_press(press: &mut Press, headroom: u32) -> bool {
    if press.running || headroom == 0 {
        return false;
    }
    press.running = true;
    press.timer = press.interval();
    true
}

/// Advances one press by `dt` seconds. Returns the produced tiles when the
/// cycle completes; `Some(vec![])` marks a cycle that finished with no
/// headroom left.
pub fn tick_press(
    press: &mut Press,
    dt: f64,
    headroom: u32,
    rng: &mut impl Rng,
) -> Option<Vec<ProducedTile>> {
    if !press.running {
        return None;
    }

    press.timer -= dt;
    if press.timer > TIMER_EPSILON {
        return None;
    }

    press.running = false;
    press.timer = 0.0;
    press.yield_id += 1;

    let count = press.tiles_per_cycle().min(headroom);
    let probs = press.tile_probs();
    let tiles: Vec<ProducedTile> = (0..count)
        .map(|_| ProducedTile {
            letter: random_letter(rng),
            tile_type: roll_tile_type(&probs, rng),
        })
        .collect();

    press.last_yield = tiles
        .iter()
        .map(|tile| YieldedTile {
            letter: if tile.tile_type.is_wildcard() {
                None
            } else {
                Some(tile.letter)
            },
            tile_type: tile.tile_type,
        })
        .collect();

    Some(tiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn run_to_completion(press: &mut Press, headroom: u32, rng: &mut ChaCha8Rng) -> Vec<ProducedTile> {
        for _ in 0..100_000 {
            if let Some(tiles) = tick_press(press, 0.1, headroom, rng) {
                return tiles;
            }
        }
        panic!("press never completed");
    }

    #[test]
    fn test_start_rejected_when_running_or_no_headroom() {
        let mut press = Press::new(1);
        assert!(!start_press(&mut press, 0));
        assert!(start_press(&mut press, 10));
        assert!(!start_press(&mut press, 10));
    }

    #[test]
    fn test_idle_press_does_nothing() {
        let mut press = Press::new(1);
        let mut rng = test_rng();
        assert!(tick_press(&mut press, 0.1, 10, &mut rng).is_none());
        assert!(!press.running);
    }

    #[test]
    fn test_cycle_produces_tiles_and_returns_to_idle() {
        let mut press = Press::new(1);
        let mut rng = test_rng();
        assert!(start_press(&mut press, 10));

        let tiles = run_to_completion(&mut press, 10, &mut rng);
        assert_eq!(tiles.len(), press.tiles_per_cycle() as usize);
        assert!(!press.running);
        assert_eq!(press.yield_id, 1);
        assert_eq!(press.last_yield.len(), tiles.len());
    }

    #[test]
    fn test_yield_clamped_by_headroom() {
        let mut press = Press::new(1);
        press.upgrades.output = 8; // 1.0 + 0.5*8 = 5 tiles per cycle
        let mut rng = test_rng();
        assert!(start_press(&mut press, 2));

        let tiles = run_to_completion(&mut press, 2, &mut rng);
        assert_eq!(tiles.len(), 2);
    }

    #[test]
    fn test_cycle_with_zero_headroom_ends_empty() {
        let mut press = Press::new(1);
        let mut rng = test_rng();
        assert!(start_press(&mut press, 5));

        let tiles = run_to_completion(&mut press, 0, &mut rng);
        assert!(tiles.is_empty());
        assert!(!press.running);
        assert_eq!(press.yield_id, 1);
    }

    #[test]
    fn test_faster_press_completes_sooner() {
        let mut slow = Press::new(1);
        let mut fast = Press::new(2);
        fast.upgrades.speed = 20;
        let mut rng = test_rng();

        start_press(&mut slow, 10);
        start_press(&mut fast, 10);

        let mut fast_done_at = None;
        let mut slow_done_at = None;
        for tick in 0..100_000u32 {
            if slow_done_at.is_none() && tick_press(&mut slow, 0.1, 10, &mut rng).is_some() {
                slow_done_at = Some(tick);
            }
            if fast_done_at.is_none() && tick_press(&mut fast, 0.1, 10, &mut rng).is_some() {
                fast_done_at = Some(tick);
            }
            if slow_done_at.is_some() && fast_done_at.is_some() {
                break;
            }
        }
        assert!(fast_done_at.unwrap() < slow_done_at.unwrap());
    }

    #[test]
    fn test_wildcard_yield_records_no_letter() {
        let mut press = Press::new(1);
        // Max out the wildcard odds and yield so some show up quickly
        press.upgrades.lexicoin_chance = 50;
        press.upgrades.output = 18;
        let mut rng = test_rng();

        let mut saw_wildcard = false;
        for _ in 0..200 {
            start_press(&mut press, 10);
            run_to_completion(&mut press, 10, &mut rng);
            for tile in &press.last_yield {
                if tile.tile_type == TileType::Lexicoin {
                    assert!(tile.letter.is_none());
                    saw_wildcard = true;
                }
            }
        }
        assert!(saw_wildcard);
    }
}
