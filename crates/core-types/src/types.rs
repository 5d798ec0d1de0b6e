// In crates/core-types/src/types.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A ticker symbol, e.g. "AAPL".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(pub String);

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Symbol(value.to_string())
    }
}

/// A daily close as delivered by a data provider, before cleaning.
/// `close` is `None` where the provider had no value for the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPricePoint {
    pub timestamp: NaiveDate,
    pub close: Option<Decimal>,
}

/// A cleaned daily close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: NaiveDate,
    pub close: Decimal,
}

impl PricePoint {
    pub fn new(timestamp: NaiveDate, close: Decimal) -> Self {
        Self { timestamp, close }
    }
}

/// Both rolling means at one bar. A mean is `None` during its warm-up window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingAveragePoint {
    pub timestamp: NaiveDate,
    pub close: Decimal,
    pub short_ma: Option<Decimal>,
    pub long_ma: Option<Decimal>,
}

impl MovingAveragePoint {
    /// Both averages, if both are out of warm-up.
    pub fn pair(&self) -> Option<(Decimal, Decimal)> {
        Some((self.short_ma?, self.long_ma?))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrossoverKind {
    /// Short average moved strictly above the long average.
    Golden,
    /// Short average moved strictly below the long average.
    Death,
}

impl fmt::Display for CrossoverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrossoverKind::Golden => f.write_str("golden"),
            CrossoverKind::Death => f.write_str("death"),
        }
    }
}

/// A crossover detected at a bar, priced at that bar's close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrossoverEvent {
    pub timestamp: NaiveDate,
    pub kind: CrossoverKind,
    pub close: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeAction {
    Buy,
    Sell,
}

/// Why a trade was made. Every trade maps back to a signal or to the
/// end-of-series liquidation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeReason {
    GoldenCross,
    DeathCross,
    EndOfSeries,
}

/// One entry of the append-only trade log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub timestamp: NaiveDate,
    pub action: TradeAction,
    pub reason: TradeReason,
    pub shares: u64,
    pub price: Decimal,
    /// Gross value of the fill (`shares * price`).
    pub total: Decimal,
    pub cash_after: Decimal,
}

impl Trade {
    pub fn is_forced(&self) -> bool {
        self.reason == TradeReason::EndOfSeries
    }
}
