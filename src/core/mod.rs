//! Game core: constants, state, tick loop, offline simulation, saves.

#![allow(unused_imports)]

pub mod constants;
pub mod game_logic;
pub mod game_state;
pub mod offline;
pub mod save;
pub mod tick;

pub use game_logic::*;
pub use game_state::GameState;
pub use offline::*;
pub use save::SaveManager;
pub use tick::*;
