#![allow(unused_imports)]

pub mod format;
pub mod ids;

pub use format::*;
pub use ids::*;
