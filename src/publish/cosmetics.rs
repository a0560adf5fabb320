//! Book covers and page styles, bought with golden notebooks.
//!
//! Owned cosmetics of a kind stack additively into one multiplier:
//! `1 + sum(bonus - 1)` over everything owned, regardless of which one is
//! active. The active choice only affects how a published volume is recorded.

use serde::{Deserialize, Serialize};

/// A purchasable cover or page style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CosmeticDef {
    pub id: u32,
    pub name: &'static str,
    /// Quill multiplier contribution; 1.0 adds nothing.
    pub bonus: f64,
    /// Golden notebook price.
    pub cost: u64,
}

pub const COVERS: [CosmeticDef; 5] = [
    CosmeticDef { id: 0, name: "Plain Cover", bonus: 1.0, cost: 0 },
    CosmeticDef { id: 1, name: "Linen Cover", bonus: 1.1, cost: 5 },
    CosmeticDef { id: 2, name: "Leather Cover", bonus: 1.25, cost: 15 },
    CosmeticDef { id: 3, name: "Gilt Cover", bonus: 1.5, cost: 40 },
    CosmeticDef { id: 4, name: "Illuminated Cover", bonus: 2.0, cost: 100 },
];

pub const PAGES: [CosmeticDef; 5] = [
    CosmeticDef { id: 0, name: "Pulp Pages", bonus: 1.0, cost: 0 },
    CosmeticDef { id: 1, name: "Cotton Pages", bonus: 1.1, cost: 5 },
    CosmeticDef { id: 2, name: "Vellum Pages", bonus: 1.25, cost: 15 },
    CosmeticDef { id: 3, name: "Marbled Pages", bonus: 1.5, cost: 40 },
    CosmeticDef { id: 4, name: "Gold-Leaf Pages", bonus: 2.0, cost: 100 },
];

pub fn cover_def(id: u32) -> Option<&'static CosmeticDef> {
    COVERS.iter().find(|def| def.id == id)
}

pub fn page_def(id: u32) -> Option<&'static CosmeticDef> {
    PAGES.iter().find(|def| def.id == id)
}

/// Cosmetics owned and equipped by the player. Survives publishing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cosmetics {
    pub owned_covers: Vec<u32>,
    pub owned_pages: Vec<u32>,
    pub active_cover: u32,
    pub active_page: u32,
}

impl Default for Cosmetics {
    fn default() -> Self {
        Self {
            owned_covers: vec![0],
            owned_pages: vec![0],
            active_cover: 0,
            active_page: 0,
        }
    }
}

fn stacked_multiplier(owned: &[u32], defs: &[CosmeticDef]) -> f64 {
    let extra: f64 = owned
        .iter()
        .filter_map(|id| defs.iter().find(|def| def.id == *id))
        .map(|def| def.bonus - 1.0)
        .sum();
    1.0 + extra
}

impl Cosmetics {
    pub fn owns_cover(&self, id: u32) -> bool {
        self.owned_covers.contains(&id)
    }

    pub fn owns_page(&self, id: u32) -> bool {
        self.owned_pages.contains(&id)
    }

    pub fn cover_multiplier(&self) -> f64 {
        stacked_multiplier(&self.owned_covers, &COVERS)
    }

    pub fn page_multiplier(&self) -> f64 {
        stacked_multiplier(&self.owned_pages, &PAGES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_owns_free_tier_only() {
        let cosmetics = Cosmetics::default();
        assert!(cosmetics.owns_cover(0));
        assert!(!cosmetics.owns_cover(1));
        assert_eq!(cosmetics.cover_multiplier(), 1.0);
        assert_eq!(cosmetics.page_multiplier(), 1.0);
    }

    #[test]
    fn test_bonuses_stack_additively() {
        let mut cosmetics = Cosmetics::default();
        cosmetics.owned_covers.push(1); // +0.1
        cosmetics.owned_covers.push(2); // +0.25
        // 1 + 0.1 + 0.25, not 1.1 * 1.25
        assert!((cosmetics.cover_multiplier() - 1.35).abs() < 1e-9);
    }

    #[test]
    fn test_multiplier_independent_of_active_choice() {
        let mut cosmetics = Cosmetics::default();
        cosmetics.owned_pages.push(3);
        let owned_mult = cosmetics.page_multiplier();
        cosmetics.active_page = 3;
        assert_eq!(cosmetics.page_multiplier(), owned_mult);
    }

    #[test]
    fn test_tables_have_free_tier_and_unique_ids() {
        for defs in [&COVERS, &PAGES] {
            assert_eq!(defs[0].cost, 0);
            assert_eq!(defs[0].bonus, 1.0);
            for (i, def) in defs.iter().enumerate() {
                assert_eq!(def.id as usize, i);
            }
        }
    }
}
