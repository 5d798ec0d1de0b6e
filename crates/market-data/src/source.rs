// In crates/market-data/src/source.rs

use anyhow::Result;
use chrono::NaiveDate;
use core_types::{RawPricePoint, Symbol};
use std::collections::HashMap;

/// The universal interface for a daily price supplier.
///
/// A source returns the complete series for a symbol and date range in one
/// synchronous call; the simulation never starts on a partial series.
pub trait PriceSource: Sync {
    /// The name of the source (e.g., "InMemorySource").
    fn name(&self) -> &'static str;

    /// Fetches every daily close for `symbol` with `start <= timestamp <= end`.
    fn fetch(&self, symbol: &Symbol, start: NaiveDate, end: NaiveDate) -> Result<Vec<RawPricePoint>>;
}

/// A source backed by series already held in memory.
#[derive(Debug, Default, Clone)]
pub struct InMemorySource {
    series: HashMap<Symbol, Vec<RawPricePoint>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, symbol: impl Into<String>, points: Vec<RawPricePoint>) -> Self {
        self.series.insert(Symbol(symbol.into()), points);
        self
    }
}

impl PriceSource for InMemorySource {
    fn name(&self) -> &'static str {
        "InMemorySource"
    }

    fn fetch(&self, symbol: &Symbol, start: NaiveDate, end: NaiveDate) -> Result<Vec<RawPricePoint>> {
        let points = self
            .series
            .get(symbol)
            .ok_or_else(|| anyhow::anyhow!("No price data found for symbol {}", symbol))?;

        Ok(points
            .iter()
            .filter(|point| point.timestamp >= start && point.timestamp <= end)
            .cloned()
            .collect())
    }
}
