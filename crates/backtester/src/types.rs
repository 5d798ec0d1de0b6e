// In crates/backtester/src/types.rs

use analytics::PerformanceReport;
use app_config::RunSpec;
use chrono::NaiveDate;
use core_types::{CrossoverEvent, MovingAveragePoint, Symbol, Trade};
use execution::{Decision, Ledger};
use market_data::CleaningReport;
use rust_decimal::Decimal;
use serde::Serialize;

/// One symbol over one inclusive date range with a starting budget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunRequest {
    pub symbol: Symbol,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub initial_budget: Decimal,
}

impl RunRequest {
    pub fn new(
        symbol: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        initial_budget: Decimal,
    ) -> Self {
        Self {
            symbol: Symbol(symbol.into()),
            start_date,
            end_date,
            initial_budget,
        }
    }

    /// Builds a request from configuration, falling back to the default budget.
    pub fn from_config(run: &RunSpec, default_budget: Decimal) -> Self {
        Self::new(
            run.symbol.clone(),
            run.start_date,
            run.end_date,
            run.initial_budget.unwrap_or(default_budget),
        )
    }

    pub fn validate(&self) -> core_types::Result<()> {
        core_types::validate_budget(self.initial_budget)?;
        if self.start_date > self.end_date {
            return Err(core_types::Error::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }
}

/// Everything a single run produced, for external formatting or storage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BacktestResult {
    pub request: RunRequest,
    pub cleaning: CleaningReport,
    pub moving_averages: Vec<MovingAveragePoint>,
    pub events: Vec<CrossoverEvent>,
    pub trades: Vec<Trade>,
    pub decisions: Vec<Decision>,
    pub final_ledger: Ledger,
    pub report: PerformanceReport,
}
