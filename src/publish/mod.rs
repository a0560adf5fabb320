//! Publishing: convert the finished lexicon into quills.

#![allow(unused_imports)]

pub mod cosmetics;
pub mod logic;
pub mod types;

pub use cosmetics::*;
pub use logic::*;
pub use types::*;
