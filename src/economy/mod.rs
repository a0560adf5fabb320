//! Upgrade value/cost curves and purchase resolution.

#![allow(unused_imports)]

pub mod purchase;
pub mod upgrades;

pub use purchase::*;
pub use upgrades::*;
