// In crates/analytics/src/types.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Strategy performance next to a passive buy-and-hold baseline.
///
/// Every field is derived from the final ledger, the trade log and the
/// price series; recomputing it from the same inputs gives the same values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PerformanceReport {
    pub initial_budget: Decimal,
    pub final_value: Decimal,
    pub total_return: Decimal,
    pub return_percentage: Decimal,
    pub trade_count: usize,

    // Baseline: max whole shares on the first bar, held to the last bar.
    pub buy_hold_shares: u64,
    pub buy_hold_value: Decimal,
    pub buy_hold_return: Decimal,
    pub buy_hold_return_percentage: Decimal,

    /// `total_return - buy_hold_return`.
    pub strategy_vs_buy_hold: Decimal,
}

impl PerformanceReport {
    pub fn is_profitable(&self) -> bool {
        self.total_return > Decimal::ZERO
    }

    pub fn beat_buy_and_hold(&self) -> bool {
        self.strategy_vs_buy_hold > Decimal::ZERO
    }
}
