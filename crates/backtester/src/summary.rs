// In crates/backtester/src/summary.rs

use crate::types::{BacktestResult, RunRequest};
use chrono::NaiveDate;
use core_types::Symbol;
use rust_decimal::Decimal;
use serde::Serialize;

/// One successful run, reduced to the figures used to compare runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub symbol: Symbol,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_return: Decimal,
    pub return_percentage: Decimal,
    pub trade_count: usize,
    pub beat_buy_and_hold: bool,
}

impl SummaryRow {
    fn from_result(result: &BacktestResult) -> Self {
        Self {
            symbol: result.request.symbol.clone(),
            start_date: result.request.start_date,
            end_date: result.request.end_date,
            total_return: result.report.total_return,
            return_percentage: result.report.return_percentage,
            trade_count: result.report.trade_count,
            beat_buy_and_hold: result.report.beat_buy_and_hold(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailedRun {
    pub symbol: Symbol,
    pub error: String,
}

/// Ranks the runs of a batch by return percentage, best first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    rows: Vec<SummaryRow>,
    failures: Vec<FailedRun>,
}

impl BatchSummary {
    /// `results` must be in the same order as `requests`, as `run_batch` returns them.
    /// Runs with equal returns keep their request order.
    pub fn from_results(requests: &[RunRequest], results: &[anyhow::Result<BacktestResult>]) -> Self {
        let mut summary = Self::default();
        for (request, result) in requests.iter().zip(results) {
            match result {
                Ok(result) => summary.rows.push(SummaryRow::from_result(result)),
                Err(e) => summary.failures.push(FailedRun {
                    symbol: request.symbol.clone(),
                    error: format!("{e:#}"),
                }),
            }
        }
        summary
            .rows
            .sort_by(|a, b| b.return_percentage.cmp(&a.return_percentage));

        if let Some(best) = summary.best() {
            tracing::info!(
                runs = summary.rows.len(),
                failures = summary.failures.len(),
                best = %best.symbol,
                best_return_pct = %best.return_percentage,
                "Batch summary ranked."
            );
        }
        summary
    }

    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    pub fn failures(&self) -> &[FailedRun] {
        &self.failures
    }

    /// The run with the highest return percentage, if any run succeeded.
    pub fn best(&self) -> Option<&SummaryRow> {
        self.rows.first()
    }
}
