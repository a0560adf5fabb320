//! Upgrade definitions: what each level is worth and what it costs.
//!
//! Costs grow geometrically (`base * ratio^level`); values mix linear,
//! geometric, and linear-times-geometric growth. All balance numbers for a
//! given upgrade live in its match arm - change once, test everywhere.

use crate::core::constants::*;
use crate::letters::inventory::TileType;
use serde::{Deserialize, Serialize};

/// Common shape of every upgrade: effect magnitude at a level, cost to go
/// from that level to the next, and a hard level cap.
pub trait UpgradeCurve {
    /// Effect magnitude at `level`.
    fn value(&self, level: u32) -> f64;
    /// Cost to go from `level` to `level + 1`.
    fn cost(&self, level: u32) -> f64;
    fn max_level(&self) -> u32;
}

/// Geometric cost curve shared by every upgrade and device price.
pub fn geometric_cost(base: f64, ratio: f64, level: u32) -> f64 {
    base * ratio.powi(level as i32)
}

// ---------------------------------------------------------------------------
// Well upgrades (ink-priced, per device, reset on publish)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WellUpgrade {
    Capacity,
    FillRate,
    CritChance,
    CritMult,
}

impl WellUpgrade {
    pub const ALL: [WellUpgrade; 4] = [
        WellUpgrade::Capacity,
        WellUpgrade::FillRate,
        WellUpgrade::CritChance,
        WellUpgrade::CritMult,
    ];

    /// (cost base, cost ratio, max level)
    fn cost_table(&self) -> (f64, f64, u32) {
        match self {
            WellUpgrade::Capacity => (15.0, 1.30, 50),
            WellUpgrade::FillRate => (10.0, 1.25, 100),
            WellUpgrade::CritChance => (50.0, 1.40, 25),
            WellUpgrade::CritMult => (75.0, 1.45, 20),
        }
    }
}

impl UpgradeCurve for WellUpgrade {
    fn value(&self, level: u32) -> f64 {
        match self {
            WellUpgrade::Capacity => {
                geometric_cost(WELL_BASE_CAPACITY, WELL_CAPACITY_RATIO, level)
            }
            // Linear x geometric: each level adds a flat step and compounds
            WellUpgrade::FillRate => {
                WELL_BASE_FILL_RATE
                    * (1.0 + level as f64)
                    * WELL_FILL_RATE_RATIO.powi(level as i32)
            }
            WellUpgrade::CritChance => {
                WELL_BASE_CRIT_CHANCE + level as f64 * WELL_CRIT_CHANCE_PER_LEVEL
            }
            WellUpgrade::CritMult => {
                WELL_BASE_CRIT_MULT + level as f64 * WELL_CRIT_MULT_PER_LEVEL
            }
        }
    }

    fn cost(&self, level: u32) -> f64 {
        let (base, ratio, _) = self.cost_table();
        geometric_cost(base, ratio, level)
    }

    fn max_level(&self) -> u32 {
        self.cost_table().2
    }
}

// ---------------------------------------------------------------------------
// Press upgrades (ink-priced, per device, reset on publish)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PressUpgrade {
    Speed,
    Yield,
    DoubleLetterChance,
    TripleLetterChance,
    DoubleWordChance,
    TripleWordChance,
    GoldenChance,
    LexicoinChance,
}

impl PressUpgrade {
    pub const ALL: [PressUpgrade; 8] = [
        PressUpgrade::Speed,
        PressUpgrade::Yield,
        PressUpgrade::DoubleLetterChance,
        PressUpgrade::TripleLetterChance,
        PressUpgrade::DoubleWordChance,
        PressUpgrade::TripleWordChance,
        PressUpgrade::GoldenChance,
        PressUpgrade::LexicoinChance,
    ];

    /// The special tile type a chance upgrade boosts, if any.
    pub fn boosted_tile(&self) -> Option<TileType> {
        match self {
            PressUpgrade::DoubleLetterChance => Some(TileType::DoubleLetter),
            PressUpgrade::TripleLetterChance => Some(TileType::TripleLetter),
            PressUpgrade::DoubleWordChance => Some(TileType::DoubleWord),
            PressUpgrade::TripleWordChance => Some(TileType::TripleWord),
            PressUpgrade::GoldenChance => Some(TileType::Golden),
            PressUpgrade::LexicoinChance => Some(TileType::Lexicoin),
            _ => None,
        }
    }

    /// (base chance, additive boost per level) for chance upgrades.
    fn chance_table(&self) -> (f64, f64) {
        match self {
            PressUpgrade::DoubleLetterChance => (DOUBLE_LETTER_BASE_CHANCE, 0.0025),
            PressUpgrade::TripleLetterChance => (TRIPLE_LETTER_BASE_CHANCE, 0.0010),
            PressUpgrade::DoubleWordChance => (DOUBLE_WORD_BASE_CHANCE, 0.0015),
            PressUpgrade::TripleWordChance => (TRIPLE_WORD_BASE_CHANCE, 0.0005),
            PressUpgrade::GoldenChance => (GOLDEN_BASE_CHANCE, 0.0001),
            PressUpgrade::LexicoinChance => (LEXICOIN_BASE_CHANCE, 0.0005),
            _ => (0.0, 0.0),
        }
    }

    /// (cost base, cost ratio, max level)
    fn cost_table(&self) -> (f64, f64, u32) {
        match self {
            PressUpgrade::Speed => (25.0, 1.35, 40),
            PressUpgrade::Yield => (40.0, 1.50, 30),
            PressUpgrade::DoubleLetterChance => (30.0, 1.30, 50),
            PressUpgrade::TripleLetterChance => (60.0, 1.35, 50),
            PressUpgrade::DoubleWordChance => (45.0, 1.35, 50),
            PressUpgrade::TripleWordChance => (90.0, 1.40, 50),
            PressUpgrade::GoldenChance => (150.0, 1.50, 50),
            PressUpgrade::LexicoinChance => (80.0, 1.40, 50),
        }
    }
}

impl UpgradeCurve for PressUpgrade {
    fn value(&self, level: u32) -> f64 {
        match self {
            // Production interval in seconds, shrinking geometrically
            PressUpgrade::Speed => {
                geometric_cost(PRESS_BASE_INTERVAL, PRESS_INTERVAL_RATIO, level)
                    .max(PRESS_MIN_INTERVAL)
            }
            PressUpgrade::Yield => PRESS_BASE_YIELD + level as f64 * PRESS_YIELD_PER_LEVEL,
            _ => {
                let (base, per_level) = self.chance_table();
                base + level as f64 * per_level
            }
        }
    }

    fn cost(&self, level: u32) -> f64 {
        let (base, ratio, _) = self.cost_table();
        geometric_cost(base, ratio, level)
    }

    fn max_level(&self) -> u32 {
        self.cost_table().2
    }
}

// ---------------------------------------------------------------------------
// Permanent upgrades (quill-priced, survive publishing)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PermanentUpgrade {
    MaxLetters,
    InkMult,
    MonkeyCount,
    MonkeySpeed,
    MonkeyFindChance,
}

impl PermanentUpgrade {
    pub const ALL: [PermanentUpgrade; 5] = [
        PermanentUpgrade::MaxLetters,
        PermanentUpgrade::InkMult,
        PermanentUpgrade::MonkeyCount,
        PermanentUpgrade::MonkeySpeed,
        PermanentUpgrade::MonkeyFindChance,
    ];

    /// (cost base, cost ratio, max level)
    fn cost_table(&self) -> (f64, f64, u32) {
        match self {
            PermanentUpgrade::MaxLetters => (5.0, 2.0, 40),
            PermanentUpgrade::InkMult => (10.0, 2.5, 30),
            PermanentUpgrade::MonkeyCount => (25.0, 3.0, 10),
            PermanentUpgrade::MonkeySpeed => (15.0, 2.0, 20),
            PermanentUpgrade::MonkeyFindChance => (40.0, 2.5, 10),
        }
    }
}

impl UpgradeCurve for PermanentUpgrade {
    fn value(&self, level: u32) -> f64 {
        match self {
            PermanentUpgrade::MaxLetters => {
                (BASE_MAX_LETTERS + level * MAX_LETTERS_PER_LEVEL) as f64
            }
            PermanentUpgrade::InkMult => 1.0 + level as f64 * 0.25,
            PermanentUpgrade::MonkeyCount => level as f64,
            PermanentUpgrade::MonkeySpeed => {
                geometric_cost(MONKEY_BASE_SEARCH_SECONDS, MONKEY_SEARCH_RATIO, level)
            }
            PermanentUpgrade::MonkeyFindChance => {
                MONKEY_BASE_FIND_CHANCE + level as f64 * MONKEY_FIND_CHANCE_PER_LEVEL
            }
        }
    }

    fn cost(&self, level: u32) -> f64 {
        let (base, ratio, _) = self.cost_table();
        geometric_cost(base, ratio, level)
    }

    fn max_level(&self) -> u32 {
        self.cost_table().2
    }
}

/// Permanent upgrade levels held by the player. Survives publishing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermanentLevels {
    pub max_letters: u32,
    pub ink_mult: u32,
    pub monkey_count: u32,
    pub monkey_speed: u32,
    pub monkey_find_chance: u32,
    /// List-based unlock level into [`BULK_BUY_LEVELS`].
    pub bulk_buy: u32,
}

impl PermanentLevels {
    pub fn level(&self, kind: PermanentUpgrade) -> u32 {
        match kind {
            PermanentUpgrade::MaxLetters => self.max_letters,
            PermanentUpgrade::InkMult => self.ink_mult,
            PermanentUpgrade::MonkeyCount => self.monkey_count,
            PermanentUpgrade::MonkeySpeed => self.monkey_speed,
            PermanentUpgrade::MonkeyFindChance => self.monkey_find_chance,
        }
    }

    pub fn level_mut(&mut self, kind: PermanentUpgrade) -> &mut u32 {
        match kind {
            PermanentUpgrade::MaxLetters => &mut self.max_letters,
            PermanentUpgrade::InkMult => &mut self.ink_mult,
            PermanentUpgrade::MonkeyCount => &mut self.monkey_count,
            PermanentUpgrade::MonkeySpeed => &mut self.monkey_speed,
            PermanentUpgrade::MonkeyFindChance => &mut self.monkey_find_chance,
        }
    }
}

/// One level of a discrete, list-based permanent upgrade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListLevel {
    /// Quill cost of this level.
    pub cost: f64,
    /// Bulk-buy quantity unlocked at this level.
    pub qty: u32,
}

/// Bulk-buy quantity unlocks, purchased in order.
pub const BULK_BUY_LEVELS: [ListLevel; 3] = [
    ListLevel { cost: 5.0, qty: 10 },
    ListLevel { cost: 25.0, qty: 25 },
    ListLevel {
        cost: 100.0,
        qty: 100,
    },
];

/// Buy quantities available at a given bulk-buy unlock level (x1 is always there).
pub fn unlocked_bulk_quantities(level: u32) -> Vec<u32> {
    let mut quantities = vec![1];
    for unlock in BULK_BUY_LEVELS.iter().take(level as usize) {
        quantities.push(unlock.qty);
    }
    quantities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_costs_grow_geometrically() {
        for kind in WellUpgrade::ALL {
            let ratio = kind.cost(1) / kind.cost(0);
            let ratio_next = kind.cost(2) / kind.cost(1);
            assert!((ratio - ratio_next).abs() < 1e-9, "{:?}", kind);
            assert!(ratio > 1.0, "{:?}", kind);
        }
    }

    #[test]
    fn test_values_monotonic() {
        for kind in WellUpgrade::ALL {
            assert!(kind.value(5) > kind.value(0), "{:?}", kind);
        }
        for kind in [PressUpgrade::Yield, PressUpgrade::DoubleLetterChance] {
            assert!(kind.value(5) > kind.value(0), "{:?}", kind);
        }
        // Speed value is an interval: it shrinks
        assert!(PressUpgrade::Speed.value(5) < PressUpgrade::Speed.value(0));
    }

    #[test]
    fn test_press_interval_floor() {
        let max = PressUpgrade::Speed.max_level();
        assert!(PressUpgrade::Speed.value(max) >= PRESS_MIN_INTERVAL);
    }

    #[test]
    fn test_chance_upgrades_boost_their_tile() {
        let kind = PressUpgrade::DoubleLetterChance;
        assert_eq!(kind.boosted_tile(), Some(TileType::DoubleLetter));
        assert!((kind.value(0) - DOUBLE_LETTER_BASE_CHANCE).abs() < 1e-12);
        assert!((kind.value(4) - (DOUBLE_LETTER_BASE_CHANCE + 0.01)).abs() < 1e-12);
    }

    #[test]
    fn test_chance_sum_stays_under_one_at_max_levels() {
        // The roll has no normalization step; the caps keep the special mass sane
        let total: f64 = PressUpgrade::ALL
            .iter()
            .filter(|k| k.boosted_tile().is_some())
            .map(|k| k.value(k.max_level()))
            .sum();
        assert!(total < 1.0, "special chance mass {}", total);
    }

    #[test]
    fn test_permanent_values() {
        assert_eq!(PermanentUpgrade::MaxLetters.value(0), 50.0);
        assert_eq!(PermanentUpgrade::MaxLetters.value(2), 100.0);
        assert_eq!(PermanentUpgrade::InkMult.value(0), 1.0);
        assert_eq!(PermanentUpgrade::MonkeyCount.value(3), 3.0);
        assert!(PermanentUpgrade::MonkeySpeed.value(5) < MONKEY_BASE_SEARCH_SECONDS);
    }

    #[test]
    fn test_unlocked_bulk_quantities() {
        assert_eq!(unlocked_bulk_quantities(0), vec![1]);
        assert_eq!(unlocked_bulk_quantities(2), vec![1, 10, 25]);
        assert_eq!(unlocked_bulk_quantities(3), vec![1, 10, 25, 100]);
    }

    #[test]
    fn test_permanent_levels_accessors() {
        let mut levels = PermanentLevels::default();
        *levels.level_mut(PermanentUpgrade::MonkeyCount) += 2;
        assert_eq!(levels.level(PermanentUpgrade::MonkeyCount), 2);
        assert_eq!(levels.level(PermanentUpgrade::InkMult), 0);
    }
}
