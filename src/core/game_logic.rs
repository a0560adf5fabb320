//! Player-initiated commands: board edits, word creation, purchases.
//!
//! Every fallible command validates first and mutates only on success, so a
//! rejection is always a clean no-op.

use crate::core::constants::*;
use crate::core::game_state::GameState;
use crate::economy::purchase::{calc_list_max_buy, resolve_purchase, BuyMode, PurchaseQuote};
use crate::economy::upgrades::{
    geometric_cost, PermanentUpgrade, PressUpgrade, UpgradeCurve, WellUpgrade, BULK_BUY_LEVELS,
};
use crate::letters::board::{assign_tiles_from_board, BoardTile};
use crate::letters::scoring::score_word_with_tiles;
use crate::presses::logic::start_press;
use crate::presses::types::Press;
use crate::publish::cosmetics::{cover_def, page_def};
use crate::utils::ids::new_tile_id;
use crate::wells::logic::{collect_well, Collection};
use crate::wells::types::Well;
use crate::words::dictionary::Dictionary;
use crate::words::types::{EntryLetter, LexiconEntry};
use rand::Rng;

/// Why a word was rejected. Word checks run before any inventory check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordError {
    TooShort,
    NotInDictionary,
    AlreadyInLexicon,
    MissingTiles,
}

impl std::fmt::Display for WordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WordError::TooShort => write!(f, "word is too short"),
            WordError::NotInDictionary => write!(f, "not a real word"),
            WordError::AlreadyInLexicon => write!(f, "already in your lexicon"),
            WordError::MissingTiles => write!(f, "you don't have those tiles"),
        }
    }
}

/// Why a purchase was rejected. Rejections are full no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseError {
    InsufficientInk,
    InsufficientQuills,
    InsufficientNotebooks,
    MaxLevel,
    LimitReached,
    UnknownDevice,
    UnknownItem,
    AlreadyOwned,
}

impl std::fmt::Display for PurchaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PurchaseError::InsufficientInk => write!(f, "not enough ink"),
            PurchaseError::InsufficientQuills => write!(f, "not enough quills"),
            PurchaseError::InsufficientNotebooks => write!(f, "not enough golden notebooks"),
            PurchaseError::MaxLevel => write!(f, "already at max level"),
            PurchaseError::LimitReached => write!(f, "limit reached"),
            PurchaseError::UnknownDevice => write!(f, "no such device"),
            PurchaseError::UnknownItem => write!(f, "no such item"),
            PurchaseError::AlreadyOwned => write!(f, "already owned"),
        }
    }
}

// ---------------------------------------------------------------------------
// Word board
// ---------------------------------------------------------------------------

/// Places a normal letter if the inventory still covers every placed copy.
pub fn place_letter(state: &mut GameState, letter: char) -> bool {
    let letter = letter.to_ascii_uppercase();
    let held = state.letters.get(&letter).copied().unwrap_or(0);
    let placed = state
        .board
        .iter()
        .filter(|t| t.letter == letter && !t.tile_type.is_special())
        .count() as u32;
    if placed >= held {
        return false;
    }
    state.board.push(BoardTile {
        id: new_tile_id(),
        letter,
        tile_type: crate::letters::inventory::TileType::Normal,
        source_tile_id: None,
    });
    true
}

/// Places a held special tile by id. Wildcards need [`place_wildcard`].
pub fn place_special(state: &mut GameState, tile_id: &str) -> bool {
    let already_placed = state
        .board
        .iter()
        .any(|t| t.source_tile_id.as_deref() == Some(tile_id));
    if already_placed {
        return false;
    }
    let Some(tile) = state.special_tiles.iter().find(|t| t.id == tile_id) else {
        return false;
    };
    let Some(letter) = tile.letter else {
        return false;
    };
    state.board.push(BoardTile {
        id: new_tile_id(),
        letter,
        tile_type: tile.tile_type,
        source_tile_id: Some(tile.id.clone()),
    });
    true
}

/// Places a wildcard tile with a player-chosen letter.
pub fn place_wildcard(state: &mut GameState, tile_id: &str, letter: char) -> bool {
    let already_placed = state
        .board
        .iter()
        .any(|t| t.source_tile_id.as_deref() == Some(tile_id));
    if already_placed || !letter.is_ascii_alphabetic() {
        return false;
    }
    let Some(tile) = state.special_tiles.iter().find(|t| t.id == tile_id) else {
        return false;
    };
    if !tile.tile_type.is_wildcard() {
        return false;
    }
    state.board.push(BoardTile {
        id: new_tile_id(),
        letter: letter.to_ascii_uppercase(),
        tile_type: tile.tile_type,
        source_tile_id: Some(tile.id.clone()),
    });
    true
}

pub fn remove_board_tile(state: &mut GameState, board_id: &str) -> bool {
    let before = state.board.len();
    state.board.retain(|t| t.id != board_id);
    state.board.len() < before
}

pub fn clear_board(state: &mut GameState) {
    state.board.clear();
}

/// The word currently spelled on the board, left to right.
pub fn board_word(state: &GameState) -> String {
    state.board.iter().map(|t| t.letter).collect()
}

/// A successfully created word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCreated {
    pub word: String,
    pub score: u64,
    pub golden_earned: u64,
}

/// Commits the board as a word: validates it, consumes the tiles, scores it,
/// and adds it to the lexicon. The board is cleared only on success.
pub fn create_word(
    state: &mut GameState,
    dict: &impl Dictionary,
) -> Result<WordCreated, WordError> {
    let word = board_word(state);
    if word.chars().count() < MIN_WORD_LENGTH {
        return Err(WordError::TooShort);
    }
    if !dict.is_valid_word(&word) {
        return Err(WordError::NotInDictionary);
    }
    if state.lexicon.iter().any(|entry| entry.word == word) {
        return Err(WordError::AlreadyInLexicon);
    }

    let resolution =
        assign_tiles_from_board(&state.board, &state.letters, &state.special_tiles)
            .ok_or(WordError::MissingTiles)?;
    let score = score_word_with_tiles(&resolution.assignments);

    state.letters = resolution.new_letters;
    state
        .special_tiles
        .retain(|t| !resolution.used_special_ids.contains(&t.id));
    state.golden_notebooks += score.golden_count as u64;

    let letters: Vec<EntryLetter> = resolution
        .assignments
        .iter()
        .map(|a| EntryLetter {
            letter: a.letter,
            tile_type: a.tile_type,
        })
        .collect();
    state.lexicon.push(LexiconEntry {
        word: word.clone(),
        score: score.total,
        letters,
    });
    state.board.clear();

    Ok(WordCreated {
        word,
        score: score.total,
        golden_earned: score.golden_count as u64,
    })
}

/// Drops a held special tile to free storage.
pub fn discard_special_tile(state: &mut GameState, tile_id: &str) -> bool {
    let before = state.special_tiles.len();
    state.special_tiles.retain(|t| t.id != tile_id);
    if state.special_tiles.len() < before {
        state
            .board
            .retain(|t| t.source_tile_id.as_deref() != Some(tile_id));
        true
    } else {
        false
    }
}

// ---------------------------------------------------------------------------
// Device actions
// ---------------------------------------------------------------------------

/// Manual well collection; credits ink on success.
pub fn collect_well_manual(
    state: &mut GameState,
    well_id: u64,
    rng: &mut impl Rng,
) -> Option<Collection> {
    let well = state.wells.iter_mut().find(|w| w.id == well_id)?;
    let collection = collect_well(well, rng)?;
    state.ink += collection.amount;
    Some(collection)
}

/// Manually starts a press cycle.
pub fn start_press_manual(state: &mut GameState, press_id: u64) -> bool {
    let headroom = state.letter_headroom();
    let Some(press) = state.presses.iter_mut().find(|p| p.id == press_id) else {
        return false;
    };
    start_press(press, headroom)
}

fn spend_ink(state: &mut GameState, cost: f64) -> Result<(), PurchaseError> {
    if state.ink < cost {
        return Err(PurchaseError::InsufficientInk);
    }
    state.ink -= cost;
    Ok(())
}

fn spend_quills(state: &mut GameState, cost: f64) -> Result<(), PurchaseError> {
    if state.quills < cost {
        return Err(PurchaseError::InsufficientQuills);
    }
    state.quills -= cost;
    Ok(())
}

/// Ink cost of the next well. The first well comes with the profile.
pub fn next_well_cost(state: &GameState) -> f64 {
    geometric_cost(
        WELL_BASE_COST,
        WELL_COST_RATIO,
        state.wells.len().saturating_sub(1) as u32,
    )
}

pub fn buy_well(state: &mut GameState) -> Result<u64, PurchaseError> {
    if state.wells.len() >= MAX_WELLS {
        return Err(PurchaseError::LimitReached);
    }
    spend_ink(state, next_well_cost(state))?;
    let id = state.alloc_device_id();
    state.wells.push(Well::new(id));
    Ok(id)
}

/// Ink cost of the next press.
pub fn next_press_cost(state: &GameState) -> f64 {
    geometric_cost(PRESS_BASE_COST, PRESS_COST_RATIO, state.presses.len() as u32)
}

pub fn buy_press(state: &mut GameState) -> Result<u64, PurchaseError> {
    if state.presses.len() >= MAX_PRESSES {
        return Err(PurchaseError::LimitReached);
    }
    spend_ink(state, next_press_cost(state))?;
    let id = state.alloc_device_id();
    state.presses.push(Press::new(id));
    Ok(id)
}

/// Manager price scales with the device's position in the owned list.
pub fn hire_well_manager(state: &mut GameState, well_id: u64) -> Result<(), PurchaseError> {
    let index = state
        .wells
        .iter()
        .position(|w| w.id == well_id)
        .ok_or(PurchaseError::UnknownDevice)?;
    if state.wells[index].manager_owned {
        return Err(PurchaseError::AlreadyOwned);
    }
    let cost = geometric_cost(WELL_MANAGER_BASE_COST, WELL_MANAGER_COST_RATIO, index as u32);
    spend_ink(state, cost)?;
    let well = &mut state.wells[index];
    well.manager_owned = true;
    well.manager_enabled = true;
    Ok(())
}

pub fn hire_press_manager(state: &mut GameState, press_id: u64) -> Result<(), PurchaseError> {
    let index = state
        .presses
        .iter()
        .position(|p| p.id == press_id)
        .ok_or(PurchaseError::UnknownDevice)?;
    if state.presses[index].manager_owned {
        return Err(PurchaseError::AlreadyOwned);
    }
    let cost = geometric_cost(
        PRESS_MANAGER_BASE_COST,
        PRESS_MANAGER_COST_RATIO,
        index as u32,
    );
    spend_ink(state, cost)?;
    state.presses[index].manager_owned = true;
    Ok(())
}

pub fn set_well_manager_enabled(
    state: &mut GameState,
    well_id: u64,
    enabled: bool,
) -> Result<(), PurchaseError> {
    let well = state
        .wells
        .iter_mut()
        .find(|w| w.id == well_id)
        .ok_or(PurchaseError::UnknownDevice)?;
    if !well.manager_owned {
        return Err(PurchaseError::UnknownItem);
    }
    well.manager_enabled = enabled;
    Ok(())
}

// ---------------------------------------------------------------------------
// Upgrade purchases
// ---------------------------------------------------------------------------

pub fn buy_well_upgrade(
    state: &mut GameState,
    well_id: u64,
    kind: WellUpgrade,
    mode: BuyMode,
) -> Result<PurchaseQuote, PurchaseError> {
    let index = state
        .wells
        .iter()
        .position(|w| w.id == well_id)
        .ok_or(PurchaseError::UnknownDevice)?;
    let level = state.wells[index].upgrades.level(kind);
    if level >= kind.max_level() {
        return Err(PurchaseError::MaxLevel);
    }
    let quote = resolve_purchase(&kind, level, state.ink, mode);
    if quote.levels == 0 {
        return Err(PurchaseError::InsufficientInk);
    }
    spend_ink(state, quote.total_cost)?;
    *state.wells[index].upgrades.level_mut(kind) += quote.levels;
    Ok(quote)
}

pub fn buy_press_upgrade(
    state: &mut GameState,
    press_id: u64,
    kind: PressUpgrade,
    mode: BuyMode,
) -> Result<PurchaseQuote, PurchaseError> {
    let index = state
        .presses
        .iter()
        .position(|p| p.id == press_id)
        .ok_or(PurchaseError::UnknownDevice)?;
    let level = state.presses[index].upgrades.level(kind);
    if level >= kind.max_level() {
        return Err(PurchaseError::MaxLevel);
    }
    let quote = resolve_purchase(&kind, level, state.ink, mode);
    if quote.levels == 0 {
        return Err(PurchaseError::InsufficientInk);
    }
    spend_ink(state, quote.total_cost)?;
    *state.presses[index].upgrades.level_mut(kind) += quote.levels;
    Ok(quote)
}

pub fn buy_permanent_upgrade(
    state: &mut GameState,
    kind: PermanentUpgrade,
    mode: BuyMode,
) -> Result<PurchaseQuote, PurchaseError> {
    let level = state.permanent.level(kind);
    if level >= kind.max_level() {
        return Err(PurchaseError::MaxLevel);
    }
    let quote = resolve_purchase(&kind, level, state.quills, mode);
    if quote.levels == 0 {
        return Err(PurchaseError::InsufficientQuills);
    }
    spend_quills(state, quote.total_cost)?;
    *state.permanent.level_mut(kind) += quote.levels;
    if kind == PermanentUpgrade::MonkeyCount {
        state.sync_monkey_timers();
    }
    Ok(quote)
}

/// Unlocks the next bulk-buy quantity tier(s).
pub fn buy_bulk_unlock(state: &mut GameState, mode: BuyMode) -> Result<PurchaseQuote, PurchaseError> {
    let level = state.permanent.bulk_buy;
    if level as usize >= BULK_BUY_LEVELS.len() {
        return Err(PurchaseError::MaxLevel);
    }
    let quote = match mode {
        BuyMode::Max => calc_list_max_buy(&BULK_BUY_LEVELS, level, state.quills),
        _ => {
            let unlock = BULK_BUY_LEVELS[level as usize];
            PurchaseQuote {
                levels: 1,
                total_cost: unlock.cost,
            }
        }
    };
    if quote.levels == 0 {
        return Err(PurchaseError::InsufficientQuills);
    }
    spend_quills(state, quote.total_cost)?;
    state.permanent.bulk_buy += quote.levels;
    Ok(quote)
}

// ---------------------------------------------------------------------------
// Cosmetics
// ---------------------------------------------------------------------------

fn spend_notebooks(state: &mut GameState, cost: u64) -> Result<(), PurchaseError> {
    if state.golden_notebooks < cost {
        return Err(PurchaseError::InsufficientNotebooks);
    }
    state.golden_notebooks -= cost;
    Ok(())
}

pub fn buy_cover(state: &mut GameState, id: u32) -> Result<(), PurchaseError> {
    let def = cover_def(id).ok_or(PurchaseError::UnknownItem)?;
    if state.cosmetics.owns_cover(id) {
        return Err(PurchaseError::AlreadyOwned);
    }
    spend_notebooks(state, def.cost)?;
    state.cosmetics.owned_covers.push(id);
    Ok(())
}

pub fn buy_page(state: &mut GameState, id: u32) -> Result<(), PurchaseError> {
    let def = page_def(id).ok_or(PurchaseError::UnknownItem)?;
    if state.cosmetics.owns_page(id) {
        return Err(PurchaseError::AlreadyOwned);
    }
    spend_notebooks(state, def.cost)?;
    state.cosmetics.owned_pages.push(id);
    Ok(())
}

pub fn set_active_cover(state: &mut GameState, id: u32) -> Result<(), PurchaseError> {
    if !state.cosmetics.owns_cover(id) {
        return Err(PurchaseError::UnknownItem);
    }
    state.cosmetics.active_cover = id;
    Ok(())
}

pub fn set_active_page(state: &mut GameState, id: u32) -> Result<(), PurchaseError> {
    if !state.cosmetics.owns_page(id) {
        return Err(PurchaseError::UnknownItem);
    }
    state.cosmetics.active_page = id;
    Ok(())
}
