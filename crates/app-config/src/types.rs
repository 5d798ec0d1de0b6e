// In crates/app-config/src/types.rs

use chrono::NaiveDate;
use market_data::TradingCalendar;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use strategies::types::MACrossoverSettings;

pub const DEFAULT_INITIAL_BUDGET: Decimal = dec!(5000);

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Settings {
    /// Defaults applied to every simulation run.
    #[serde(default)]
    pub backtest: BacktestSettings,

    /// Runs to execute as one batch. Empty unless configured.
    #[serde(default)]
    pub runs: Vec<RunSpec>,

    /// Worker threads for batch runs; `None` uses rayon's default.
    #[serde(default)]
    pub batch_threads: Option<usize>,
}

impl Settings {
    /// Checks every budget and the window pair.
    pub fn validate(&self) -> core_types::Result<()> {
        self.backtest.validate()?;
        for run in &self.runs {
            run.validate()?;
        }
        Ok(())
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BacktestSettings {
    /// Starting cash for each run. Written as a string, e.g. `"5000"`.
    #[serde(default = "default_initial_budget")]
    pub initial_budget: Decimal,

    #[serde(default)]
    pub strategy: MACrossoverSettings,

    #[serde(default)]
    pub calendar: TradingCalendar,
}

impl BacktestSettings {
    pub fn validate(&self) -> core_types::Result<()> {
        core_types::validate_budget(self.initial_budget)?;
        self.strategy.validate()
    }
}

impl Default for BacktestSettings {
    fn default() -> Self {
        Self {
            initial_budget: DEFAULT_INITIAL_BUDGET,
            strategy: MACrossoverSettings::default(),
            calendar: TradingCalendar::default(),
        }
    }
}

// --- Structs for the run plan ---

/// A list of runs read from a standalone TOML file.
#[derive(Deserialize, Debug, Clone)]
pub struct RunPlan {
    #[serde(rename = "runs")]
    pub runs: Vec<RunSpec>,
}

/// One symbol over one date range.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RunSpec {
    pub symbol: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Overrides `backtest.initial_budget` for this run.
    #[serde(default)]
    pub initial_budget: Option<Decimal>,
}

impl RunSpec {
    pub fn validate(&self) -> core_types::Result<()> {
        if self.start_date > self.end_date {
            return Err(core_types::Error::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        if let Some(budget) = self.initial_budget {
            core_types::validate_budget(budget)?;
        }
        Ok(())
    }
}

/// Helper functions for serde defaults
fn default_initial_budget() -> Decimal {
    DEFAULT_INITIAL_BUDGET
}
