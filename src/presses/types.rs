//! Press state. Interval, yield, and tile odds derive from upgrade levels.

use crate::economy::upgrades::{PressUpgrade, UpgradeCurve};
use crate::letters::inventory::TileType;
use serde::{Deserialize, Serialize};

/// Per-press upgrade levels. Reset on publish.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressUpgrades {
    pub speed: u32,
    /// Yield level (`yield` is a reserved word).
    pub output: u32,
    pub double_letter_chance: u32,
    pub triple_letter_chance: u32,
    pub double_word_chance: u32,
    pub triple_word_chance: u32,
    pub golden_chance: u32,
    pub lexicoin_chance: u32,
}

impl PressUpgrades {
    pub fn level(&self, kind: PressUpgrade) -> u32 {
        match kind {
            PressUpgrade::Speed => self.speed,
            PressUpgrade::Yield => self.output,
            PressUpgrade::DoubleLetterChance => self.double_letter_chance,
            PressUpgrade::TripleLetterChance => self.triple_letter_chance,
            PressUpgrade::DoubleWordChance => self.double_word_chance,
            PressUpgrade::TripleWordChance => self.triple_word_chance,
            PressUpgrade::GoldenChance => self.golden_chance,
            PressUpgrade::LexicoinChance => self.lexicoin_chance,
        }
    }

    pub fn level_mut(&mut self, kind: PressUpgrade) -> &mut u32 {
        match kind {
            PressUpgrade::Speed => &mut self.speed,
            PressUpgrade::Yield => &mut self.output,
            PressUpgrade::DoubleLetterChance => &mut self.double_letter_chance,
            PressUpgrade::TripleLetterChance => &mut self.triple_letter_chance,
            PressUpgrade::DoubleWordChance => &mut self.double_word_chance,
            PressUpgrade::TripleWordChance => &mut self.triple_word_chance,
            PressUpgrade::GoldenChance => &mut self.golden_chance,
            PressUpgrade::LexicoinChance => &mut self.lexicoin_chance,
        }
    }
}

/// One tile from a completed press cycle, as recorded for display.
/// Wildcards carry no letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YieldedTile {
    pub letter: Option<char>,
    pub tile_type: TileType,
}

/// One owned letter press.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Press {
    /// Stable device id; never an array index.
    pub id: u64,
    pub running: bool,
    /// Seconds remaining in the current cycle.
    pub timer: f64,
    #[serde(default)]
    pub manager_owned: bool,
    /// Bumps once per completed cycle so consumers can detect new output.
    #[serde(default)]
    pub yield_id: u64,
    #[serde(default)]
    pub last_yield: Vec<YieldedTile>,
    #[serde(default)]
    pub upgrades: PressUpgrades,
}

impl Press {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            running: false,
            timer: 0.0,
            manager_owned: false,
            yield_id: 0,
            last_yield: Vec::new(),
            upgrades: PressUpgrades::default(),
        }
    }

    /// Cycle duration in seconds at the current speed level.
    pub fn interval(&self) -> f64 {
        PressUpgrade::Speed.value(self.upgrades.speed)
    }

    /// Whole tiles produced per completed cycle.
    pub fn tiles_per_cycle(&self) -> u32 {
        PressUpgrade::Yield.value(self.upgrades.output) as u32
    }

    /// Special-tile odds at the current chance levels, in roll order.
    pub fn tile_probs(&self) -> Vec<(TileType, f64)> {
        PressUpgrade::ALL
            .iter()
            .filter_map(|kind| {
                kind.boosted_tile()
                    .map(|tile| (tile, kind.value(self.upgrades.level(*kind))))
            })
            .collect()
    }
}
