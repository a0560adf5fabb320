//! Lexicon entries and the dictionary oracle.

#![allow(unused_imports)]

pub mod dictionary;
pub mod types;

pub use dictionary::*;
pub use types::*;
