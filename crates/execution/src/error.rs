// In crates/execution/src/error.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// A ledger operation whose preconditions did not hold. The ledger is left
/// unchanged when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("Price must be positive, got {price}")]
    NonPositivePrice { price: Decimal },

    #[error("Cannot buy zero shares")]
    ZeroShares,

    #[error("Insufficient cash: order costs {cost}, cash is {cash}")]
    InsufficientCash { cost: Decimal, cash: Decimal },

    #[error("A position is already open")]
    PositionAlreadyOpen,

    #[error("No open position to sell")]
    NoOpenPosition,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Ledger rejected operation: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Event at {current} received after event at {previous}")]
    OutOfOrder { previous: NaiveDate, current: NaiveDate },

    #[error("Event at {event} is after the final bar at {last_bar}")]
    EventAfterSeriesEnd { event: NaiveDate, last_bar: NaiveDate },
}

pub type Result<T> = std::result::Result<T, Error>;
