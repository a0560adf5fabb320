//! Well state machine: filling -> collecting -> filling.
//!
//! Manual collection is instantaneous and independent of the managed cycle;
//! only one collection (manual or automatic) can be in flight per well.

use super::types::Well;
use crate::core::constants::{MANAGER_COLLECT_SECONDS, MIN_TIMER_SECONDS, TIMER_EPSILON};
use crate::letters::generation::roll_crit;
use rand::Rng;

/// An ink payout from a well.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collection {
    pub amount: f64,
    pub crit: bool,
}

/// Advances one well by `dt` seconds.
///
/// Filling wells accumulate `fill_rate * ink_mult * dt` up to capacity; a
/// managed well that reaches capacity starts its collect countdown. Returns
/// the payout when a managed collect completes.
pub fn tick_well(
    well: &mut Well,
    dt: f64,
    ink_mult: f64,
    rng: &mut impl Rng,
) -> Option<Collection> {
    if well.collecting {
        well.collect_timer -= dt;
        if well.collect_timer <= TIMER_EPSILON {
            let (amount, crit) = roll_crit(well.ink, well.crit_chance(), well.crit_mult(), rng);
            well.ink = 0.0;
            well.collecting = false;
            well.collect_timer = 0.0;
            return Some(Collection { amount, crit });
        }
        return None;
    }

    let capacity = well.capacity();
    well.ink = (well.ink + well.fill_rate() * ink_mult * dt).min(capacity);

    if well.ink >= capacity && well.is_managed() {
        well.collecting = true;
        well.collect_timer = MANAGER_COLLECT_SECONDS.max(MIN_TIMER_SECONDS);
    }

    None
}

/// Player-initiated collection. Rejected while a managed collection is in
/// flight or the well is empty.
pub fn collect_well(well: &mut Well, rng: &mut impl Rng) -> Option<Collection> {
    if well.collecting || well.ink <= 0.0 {
        return None;
    }
    let (amount, crit) = roll_crit(well.ink, well.crit_chance(), well.crit_mult(), rng);
    well.ink = 0.0;
    Some(Collection { amount, crit })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_fill_accumulates_and_caps() {
        let mut well = Well::new(1);
        let mut rng = test_rng();
        let rate = well.fill_rate();

        tick_well(&mut well, 0.1, 1.0, &mut rng);
        assert!((well.ink - rate * 0.1).abs() < 1e-9);

        // A huge dt clamps at capacity
        tick_well(&mut well, 1e6, 1.0, &mut rng);
        assert!((well.ink - well.capacity()).abs() < 1e-9);
    }

    #[test]
    fn test_ink_mult_scales_fill() {
        let mut plain = Well::new(1);
        let mut boosted = Well::new(2);
        let mut rng = test_rng();

        tick_well(&mut plain, 0.1, 1.0, &mut rng);
        tick_well(&mut boosted, 0.1, 2.0, &mut rng);
        assert!((boosted.ink - plain.ink * 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_unmanaged_full_well_never_auto_collects() {
        let mut well = Well::new(1);
        let mut rng = test_rng();
        for _ in 0..10_000 {
            assert!(tick_well(&mut well, 0.1, 1.0, &mut rng).is_none());
        }
        assert!(well.is_full());
        assert!(!well.collecting);
    }

    #[test]
    fn test_managed_well_runs_full_cycle() {
        let mut well = Well::new(1);
        well.manager_owned = true;
        well.manager_enabled = true;
        well.upgrades.crit_chance = 0; // 5% base; payout may or may not crit
        let mut rng = test_rng();
        let capacity = well.capacity();

        let mut payout = None;
        for _ in 0..10_000 {
            if let Some(c) = tick_well(&mut well, 0.1, 1.0, &mut rng) {
                payout = Some(c);
                break;
            }
        }

        let payout = payout.expect("managed well should auto-collect");
        assert!(payout.amount >= capacity - 1e-9);
        assert_eq!(well.ink, 0.0);
        assert!(!well.collecting);
    }

    #[test]
    fn test_collect_timer_counts_down_from_manager_delay() {
        let mut well = Well::new(1);
        well.manager_owned = true;
        well.manager_enabled = true;
        well.ink = well.capacity();
        let mut rng = test_rng();

        tick_well(&mut well, 0.1, 1.0, &mut rng);
        assert!(well.collecting);
        assert!(well.collect_timer > 0.0);

        // The payout lands roughly MANAGER_COLLECT_SECONDS later
        let ticks_needed = (MANAGER_COLLECT_SECONDS / 0.1) as u32 + 1;
        let mut collected = false;
        for _ in 0..ticks_needed {
            if tick_well(&mut well, 0.1, 1.0, &mut rng).is_some() {
                collected = true;
                break;
            }
        }
        assert!(collected);
    }

    #[test]
    fn test_manual_collect_credits_and_zeroes() {
        let mut well = Well::new(1);
        well.ink = 5.0;
        let mut rng = test_rng();

        let collection = collect_well(&mut well, &mut rng).unwrap();
        assert!(collection.amount >= 5.0 - 1e-9);
        assert_eq!(well.ink, 0.0);
    }

    #[test]
    fn test_manual_collect_rejected_while_collecting() {
        let mut well = Well::new(1);
        well.ink = 5.0;
        well.collecting = true;
        well.collect_timer = 1.0;
        let mut rng = test_rng();
        assert!(collect_well(&mut well, &mut rng).is_none());
    }

    #[test]
    fn test_manual_collect_rejected_when_empty() {
        let mut well = Well::new(1);
        let mut rng = test_rng();
        assert!(collect_well(&mut well, &mut rng).is_none());
    }

    #[test]
    fn test_crit_multiplies_payout() {
        let mut well = Well::new(1);
        well.upgrades.crit_chance = 25; // 5% + 25% = 30%... still probabilistic
        well.ink = 10.0;
        let mut rng = test_rng();

        // Force a guaranteed crit via an always-crit chance by leveling high
        // enough is not possible (capped), so check both branches explicitly.
        let collection = collect_well(&mut well, &mut rng).unwrap();
        if collection.crit {
            assert!((collection.amount - 10.0 * well.crit_mult()).abs() < 1e-9);
        } else {
            assert!((collection.amount - 10.0).abs() < 1e-9);
        }
    }
}
