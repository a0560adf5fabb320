use crate::words::types::LexiconEntry;
use serde::{Deserialize, Serialize};

/// An immutable published snapshot of a completed lexicon. Append-only;
/// never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    pub entries: Vec<LexiconEntry>,
    pub quills_earned: f64,
    /// Unix timestamp of the publish.
    pub date: i64,
    pub cover_id: u32,
    pub page_id: u32,
}
