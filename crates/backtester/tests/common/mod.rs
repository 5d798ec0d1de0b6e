#![allow(dead_code)]

use backtester::{Backtester, RunRequest};
use chrono::{Days, NaiveDate};
use core_types::RawPricePoint;
use market_data::TradingCalendar;
use rust_decimal::Decimal;
use strategies::{MACrossover, MACrossoverSettings};

pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 2).unwrap()
}

/// Consecutive calendar days of whole-dollar closes starting at `start_date()`.
pub fn daily_series(closes: &[i64]) -> Vec<RawPricePoint> {
    closes
        .iter()
        .enumerate()
        .map(|(i, close)| RawPricePoint {
            timestamp: start_date() + Days::new(i as u64),
            close: Some(Decimal::from(*close)),
        })
        .collect()
}

pub fn day(offset: u64) -> NaiveDate {
    start_date() + Days::new(offset)
}

pub fn request(symbol: &str, budget: Decimal) -> RunRequest {
    RunRequest::new(symbol, start_date(), day(10_000), budget)
}

/// A backtester with short windows so scenarios stay readable.
pub fn fast_backtester(short: usize, long: usize) -> Backtester {
    let strategy = MACrossover::new(MACrossoverSettings::new(short, long).unwrap()).unwrap();
    Backtester::new(Box::new(strategy), TradingCalendar::None)
}

/// Golden cross at index 5 (close 10), death cross at index 9 (close 9) with windows 2/4.
pub const GOLDEN_THEN_DEATH: [i64; 12] = [10, 9, 8, 7, 8, 10, 12, 14, 12, 9, 6, 4];

/// Golden cross at index 5 (close 10) and a rally to 18 with no death cross, windows 2/4.
pub const GOLDEN_ONLY: [i64; 10] = [10, 9, 8, 7, 8, 10, 12, 14, 16, 18];
