//! The full persisted game snapshot and its derived-stat helpers.

use crate::economy::upgrades::{PermanentLevels, PermanentUpgrade, UpgradeCurve};
use crate::letters::board::BoardTile;
use crate::letters::inventory::{add_letter, count_letters, LetterCounts, SpecialTile};
use crate::presses::logic::ProducedTile;
use crate::presses::types::Press;
use crate::publish::cosmetics::Cosmetics;
use crate::publish::types::Volume;
use crate::wells::types::Well;
use crate::words::types::LexiconEntry;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Everything the game persists. This is the unit saved to disk and the
/// unit the offline simulator reads after a time gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub profile_id: String,

    // Currencies
    pub ink: f64,
    pub quills: f64,
    pub golden_notebooks: u64,

    // Letter inventory
    pub letters: LetterCounts,
    pub special_tiles: Vec<SpecialTile>,
    /// Word board in progress. Ephemeral; rebuilt by the player each session.
    #[serde(skip)]
    pub board: Vec<BoardTile>,

    // Words
    pub lexicon: Vec<LexiconEntry>,
    pub volumes: Vec<Volume>,

    // Devices
    pub wells: Vec<Well>,
    pub presses: Vec<Press>,
    /// Next device id to hand out. Ids are never reused within a profile.
    pub next_device_id: u64,

    // Permanent progression
    #[serde(default)]
    pub permanent: PermanentLevels,
    #[serde(default)]
    pub cosmetics: Cosmetics,
    #[serde(default)]
    pub monkey_timers: Vec<f64>,

    // Bookkeeping
    pub last_save_time: i64,
    pub play_time_seconds: u64,
    #[serde(default)]
    pub total_publish_count: u64,
}

impl GameState {
    /// Fresh profile: one well, no presses, empty inventory.
    pub fn new(now: i64) -> Self {
        Self {
            profile_id: Uuid::new_v4().to_string(),
            ink: 0.0,
            quills: 0.0,
            golden_notebooks: 0,
            letters: LetterCounts::new(),
            special_tiles: Vec::new(),
            board: Vec::new(),
            lexicon: Vec::new(),
            volumes: Vec::new(),
            wells: vec![Well::new(1)],
            presses: Vec::new(),
            next_device_id: 2,
            permanent: PermanentLevels::default(),
            cosmetics: Cosmetics::default(),
            monkey_timers: Vec::new(),
            last_save_time: now,
            play_time_seconds: 0,
            total_publish_count: 0,
        }
    }

    pub fn alloc_device_id(&mut self) -> u64 {
        let id = self.next_device_id;
        self.next_device_id += 1;
        id
    }

    // -----------------------------------------------------------------------
    // Derived stats
    // -----------------------------------------------------------------------

    /// Normal letters plus held special tiles; both count against storage.
    pub fn total_letters(&self) -> u32 {
        count_letters(&self.letters) + self.special_tiles.len() as u32
    }

    pub fn effective_max_letters(&self) -> u32 {
        PermanentUpgrade::MaxLetters.value(self.permanent.max_letters) as u32
    }

    pub fn letter_headroom(&self) -> u32 {
        self.effective_max_letters()
            .saturating_sub(self.total_letters())
    }

    pub fn effective_ink_mult(&self) -> f64 {
        PermanentUpgrade::InkMult.value(self.permanent.ink_mult)
    }

    pub fn monkey_count(&self) -> u32 {
        PermanentUpgrade::MonkeyCount.value(self.permanent.monkey_count) as u32
    }

    pub fn monkey_search_seconds(&self) -> f64 {
        PermanentUpgrade::MonkeySpeed.value(self.permanent.monkey_speed)
    }

    pub fn monkey_find_chance(&self) -> f64 {
        PermanentUpgrade::MonkeyFindChance.value(self.permanent.monkey_find_chance)
    }

    /// Resizes the timer list to the owned monkey count. New monkeys start a
    /// fresh search; removed ones are dropped from the tail.
    pub fn sync_monkey_timers(&mut self) {
        let count = self.monkey_count() as usize;
        let search = self.monkey_search_seconds();
        self.monkey_timers.resize(count, search);
    }

    /// Stores one tile from a press. Wildcards and other specials go to the
    /// special-tile list; normal letters go to the count map.
    pub fn add_produced_tile(&mut self, tile: ProducedTile) {
        if tile.tile_type.is_special() {
            let letter = if tile.tile_type.is_wildcard() {
                None
            } else {
                Some(tile.letter)
            };
            self.special_tiles
                .push(SpecialTile::new(letter, tile.tile_type));
        } else {
            add_letter(&mut self.letters, tile.letter, 1);
        }
    }

    /// Resets the round after a publish. The first well survives with its
    /// upgrades wiped; everything permanent is untouched.
    pub fn reset_round(&mut self) {
        self.ink = 0.0;
        self.letters.clear();
        self.special_tiles.clear();
        self.board.clear();
        self.lexicon.clear();

        self.wells.truncate(1);
        if let Some(first) = self.wells.first_mut() {
            let id = first.id;
            *first = Well::new(id);
        } else {
            let id = self.alloc_device_id();
            self.wells.push(Well::new(id));
        }
        self.presses.clear();

        let search = self.monkey_search_seconds();
        for timer in &mut self.monkey_timers {
            *timer = search;
        }
    }
}
