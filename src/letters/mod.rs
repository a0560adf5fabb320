//! Letter tiles: generation, inventory, board assignment, scoring.

#![allow(unused_imports)]

pub mod board;
pub mod generation;
pub mod inventory;
pub mod scoring;

pub use board::*;
pub use generation::*;
pub use inventory::*;
pub use scoring::*;
