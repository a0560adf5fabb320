//! Purchase resolution: bulk buy, fixed-quantity buy, list-based max buy.

use super::upgrades::{ListLevel, UpgradeCurve};

/// How many levels a purchase covers and what it costs in total.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PurchaseQuote {
    pub levels: u32,
    /// Ceiling-rounded total.
    pub total_cost: f64,
}

/// Purchase amount requested by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuyMode {
    One,
    Qty(u32),
    Max,
}

/// Greedy max-buy: walk levels from `current_level`, accumulating cost, and
/// stop at the first level that would push the (ceiling-rounded) total past
/// `available`, or at the level cap. Costs are monotonically increasing, so
/// the greedy walk needs no lookahead. The returned total never exceeds
/// `available`.
pub fn calc_bulk_buy(
    upgrade: &impl UpgradeCurve,
    current_level: u32,
    available: f64,
) -> PurchaseQuote {
    let mut levels = 0;
    let mut total = 0.0;
    let mut level = current_level;

    while level < upgrade.max_level() {
        let next = total + upgrade.cost(level);
        if next.ceil() > available {
            break;
        }
        total = next;
        levels += 1;
        level += 1;
    }

    PurchaseQuote {
        levels,
        total_cost: total.ceil(),
    }
}

/// Cost for exactly `min(qty, headroom)` levels, regardless of affordability.
/// The caller checks affordability separately (fixed-quantity buy buttons).
pub fn calc_qty_buy(upgrade: &impl UpgradeCurve, current_level: u32, qty: u32) -> PurchaseQuote {
    let headroom = upgrade.max_level().saturating_sub(current_level);
    let levels = qty.min(headroom);
    let total: f64 = (current_level..current_level + levels)
        .map(|level| upgrade.cost(level))
        .sum();

    PurchaseQuote {
        levels,
        total_cost: total.ceil(),
    }
}

/// Resolves a buy mode into a quote against the available balance.
/// `One` and `Qty` quotes may exceed `available`; `Max` never does.
pub fn resolve_purchase(
    upgrade: &impl UpgradeCurve,
    current_level: u32,
    available: f64,
    mode: BuyMode,
) -> PurchaseQuote {
    match mode {
        BuyMode::One => calc_qty_buy(upgrade, current_level, 1),
        BuyMode::Qty(qty) => calc_qty_buy(upgrade, current_level, qty),
        BuyMode::Max => calc_bulk_buy(upgrade, current_level, available),
    }
}

/// Max-buy over a discrete ordered level list: sums consecutive level costs
/// while affordable.
pub fn calc_list_max_buy(
    levels: &[ListLevel],
    current_level: u32,
    available: f64,
) -> PurchaseQuote {
    let mut bought = 0;
    let mut total = 0.0;

    for unlock in levels.iter().skip(current_level as usize) {
        let next = total + unlock.cost;
        if next.ceil() > available {
            break;
        }
        total = next;
        bought += 1;
    }

    PurchaseQuote {
        levels: bought,
        total_cost: total.ceil(),
    }
}
