use crate::types::PerformanceReport;
use core_types::{PricePoint, Trade};
use execution::Ledger;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Result of buying the maximum whole-share position on the first bar and
/// holding it to the last bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuyAndHold {
    pub shares: u64,
    pub leftover_cash: Decimal,
    pub value: Decimal,
}

/// Computes the passive baseline from the first and last closes only.
pub fn buy_and_hold(initial_budget: Decimal, first_close: Decimal, last_close: Decimal) -> BuyAndHold {
    let shares = Ledger::new(initial_budget).max_affordable_shares(first_close);
    let leftover_cash = initial_budget - Decimal::from(shares) * first_close;
    BuyAndHold {
        shares,
        leftover_cash,
        value: Decimal::from(shares) * last_close + leftover_cash,
    }
}

fn percentage_of(amount: Decimal, base: Decimal) -> Decimal {
    if base.is_zero() {
        return Decimal::ZERO;
    }
    amount / base * dec!(100)
}

/// The engine responsible for calculating performance metrics from a finished run.
#[derive(Default)]
pub struct AnalyticsEngine;

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculates the report for a run over `series`.
    ///
    /// The backtester always hands over a flat ledger. A ledger that is still
    /// long is valued at the last close rather than rejected.
    pub fn calculate(
        &self,
        initial_budget: Decimal,
        ledger: &Ledger,
        trades: &[Trade],
        series: &[PricePoint],
    ) -> PerformanceReport {
        let mut report = PerformanceReport {
            initial_budget,
            trade_count: trades.len(),
            ..PerformanceReport::default()
        };

        let (Some(first), Some(last)) = (series.first(), series.last()) else {
            report.final_value = ledger.cash();
            report.total_return = report.final_value - initial_budget;
            report.return_percentage = percentage_of(report.total_return, initial_budget);
            return report;
        };

        // --- Strategy ---
        report.final_value = if ledger.position_open() {
            ledger.market_value(last.close)
        } else {
            ledger.cash()
        };
        report.total_return = report.final_value - initial_budget;
        report.return_percentage = percentage_of(report.total_return, initial_budget);

        // --- Baseline ---
        let baseline = buy_and_hold(initial_budget, first.close, last.close);
        report.buy_hold_shares = baseline.shares;
        report.buy_hold_value = baseline.value;
        report.buy_hold_return = baseline.value - initial_budget;
        report.buy_hold_return_percentage = percentage_of(report.buy_hold_return, initial_budget);

        report.strategy_vs_buy_hold = report.total_return - report.buy_hold_return;

        tracing::info!(
            final_value = %report.final_value,
            return_pct = report.return_percentage.to_f64().unwrap_or(0.0),
            buy_hold_return_pct = report.buy_hold_return_percentage.to_f64().unwrap_or(0.0),
            trades = report.trade_count,
            "Performance calculated."
        );

        report
    }
}
