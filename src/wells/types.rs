//! Well state. Capacity and fill rate derive from upgrade levels.

use crate::economy::upgrades::{UpgradeCurve, WellUpgrade};
use serde::{Deserialize, Serialize};

/// Per-well upgrade levels. Reset on publish.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellUpgrades {
    pub capacity: u32,
    pub fill_rate: u32,
    pub crit_chance: u32,
    pub crit_mult: u32,
}

impl WellUpgrades {
    pub fn level(&self, kind: WellUpgrade) -> u32 {
        match kind {
            WellUpgrade::Capacity => self.capacity,
            WellUpgrade::FillRate => self.fill_rate,
            WellUpgrade::CritChance => self.crit_chance,
            WellUpgrade::CritMult => self.crit_mult,
        }
    }

    pub fn level_mut(&mut self, kind: WellUpgrade) -> &mut u32 {
        match kind {
            WellUpgrade::Capacity => &mut self.capacity,
            WellUpgrade::FillRate => &mut self.fill_rate,
            WellUpgrade::CritChance => &mut self.crit_chance,
            WellUpgrade::CritMult => &mut self.crit_mult,
        }
    }
}

/// One owned ink well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Well {
    /// Stable device id; never an array index.
    pub id: u64,
    pub ink: f64,
    pub collecting: bool,
    pub collect_timer: f64,
    #[serde(default)]
    pub manager_owned: bool,
    #[serde(default)]
    pub manager_enabled: bool,
    #[serde(default)]
    pub upgrades: WellUpgrades,
}

impl Well {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ink: 0.0,
            collecting: false,
            collect_timer: 0.0,
            manager_owned: false,
            manager_enabled: false,
            upgrades: WellUpgrades::default(),
        }
    }

    pub fn capacity(&self) -> f64 {
        WellUpgrade::Capacity.value(self.upgrades.capacity)
    }

    /// Ink per second before the global ink multiplier.
    pub fn fill_rate(&self) -> f64 {
        WellUpgrade::FillRate.value(self.upgrades.fill_rate)
    }

    pub fn crit_chance(&self) -> f64 {
        WellUpgrade::CritChance.value(self.upgrades.crit_chance)
    }

    pub fn crit_mult(&self) -> f64 {
        WellUpgrade::CritMult.value(self.upgrades.crit_mult)
    }

    pub fn is_full(&self) -> bool {
        self.ink >= self.capacity()
    }

    /// True when a manager will auto-collect this well.
    pub fn is_managed(&self) -> bool {
        self.manager_owned && self.manager_enabled
    }
}
