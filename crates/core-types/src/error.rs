// In crates/core-types/src/error.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Validation failures that abort a simulation run before any trade happens.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Price series is empty after cleaning")]
    EmptySeries,

    #[error("Insufficient price history: need at least {required} points, have {available}")]
    InsufficientHistory { required: usize, available: usize },

    #[error("Initial budget must be positive, got {budget}")]
    InvalidBudget { budget: Decimal },

    #[error("Invalid moving average windows: short={short}, long={long} (need 0 < short < long)")]
    InvalidWindow { short: usize, long: usize },

    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Close on {timestamp} must be positive, got {close}")]
    NonPositivePrice { timestamp: NaiveDate, close: Decimal },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Rejects a non-positive starting budget.
pub fn validate_budget(budget: Decimal) -> Result<Decimal> {
    if budget <= Decimal::ZERO {
        return Err(Error::InvalidBudget { budget });
    }
    Ok(budget)
}

/// Rejects window pairs that cannot produce a short/long crossover.
pub fn validate_windows(short: usize, long: usize) -> Result<()> {
    if short == 0 || long == 0 || short >= long {
        return Err(Error::InvalidWindow { short, long });
    }
    Ok(())
}
