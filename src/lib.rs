//! Inkpress - Word-Crafting Idle Game Economy Engine
//!
//! This crate implements the simulation core of an incremental word-crafting
//! game: ink wells, letter presses, tile inventory, word scoring, offline
//! progression, and the publish (prestige) cycle. The presentation layer and
//! persistence backend consume it through plain functions over a single
//! [`GameState`] aggregate.

// Allow dead code in library - some functions are only used by the host application
#![allow(dead_code)]

pub mod core;
pub mod economy;
pub mod letters;
pub mod monkeys;
pub mod presses;
pub mod publish;
pub mod utils;
pub mod wells;
pub mod words;

pub use crate::core::game_state::GameState;
