// In crates/market-data/src/preprocess.rs

use crate::calendar::TradingCalendar;
use core_types::{Error, PricePoint, RawPricePoint, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Counts of what cleaning changed, for auditing a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CleaningReport {
    pub duplicates_removed: usize,
    /// Missing closes carried forward plus calendar days inserted.
    pub values_filled: usize,
    /// Missing closes before the first known close; nothing to carry forward.
    pub leading_dropped: usize,
    pub final_length: usize,
}

/// A strictly ascending, deduplicated series with no missing closes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanSeries {
    pub points: Vec<PricePoint>,
    pub report: CleaningReport,
}

/// Normalizes a raw provider series.
///
/// Duplicate timestamps keep their first occurrence, the result is sorted
/// ascending, missing closes take the previous close, and days the calendar
/// expects but the provider skipped are inserted with the previous close.
/// A known close of zero or below fails with `NonPositivePrice`.
pub fn clean_series(raw: Vec<RawPricePoint>, calendar: TradingCalendar) -> Result<CleanSeries> {
    let mut report = CleaningReport::default();
    let input_len = raw.len();

    // --- 1. Deduplicate, keeping the first occurrence ---
    let mut seen = HashSet::with_capacity(raw.len());
    let mut unique: Vec<RawPricePoint> = raw
        .into_iter()
        .filter(|point| seen.insert(point.timestamp))
        .collect();
    report.duplicates_removed = input_len - unique.len();

    // --- 2. Sort ascending ---
    unique.sort_by_key(|point| point.timestamp);

    // --- 3. Forward fill missing closes, then calendar gaps ---
    let mut points: Vec<PricePoint> = Vec::with_capacity(unique.len());
    let mut last_close: Option<Decimal> = None;
    for raw_point in unique {
        let close = match (raw_point.close, last_close) {
            (Some(close), _) if close <= Decimal::ZERO => {
                return Err(Error::NonPositivePrice {
                    timestamp: raw_point.timestamp,
                    close,
                });
            }
            (Some(close), _) => close,
            (None, Some(previous)) => {
                report.values_filled += 1;
                previous
            }
            (None, None) => {
                report.leading_dropped += 1;
                continue;
            }
        };

        if let (Some(previous_point), Some(previous_close)) = (points.last(), last_close) {
            let gap = calendar.missing_days(previous_point.timestamp, raw_point.timestamp);
            report.values_filled += gap.len();
            points.extend(gap.into_iter().map(|day| PricePoint::new(day, previous_close)));
        }

        points.push(PricePoint::new(raw_point.timestamp, close));
        last_close = Some(close);
    }

    if points.is_empty() {
        return Err(Error::EmptySeries);
    }
    report.final_length = points.len();

    tracing::info!(
        duplicates_removed = report.duplicates_removed,
        values_filled = report.values_filled,
        leading_dropped = report.leading_dropped,
        final_length = report.final_length,
        "Price series cleaned."
    );

    Ok(CleanSeries { points, report })
}

/// Fails unless there is at least one bar beyond the long warm-up window.
pub fn require_history(points: &[PricePoint], long_window: usize) -> Result<()> {
    let required = long_window + 1;
    if points.len() < required {
        return Err(Error::InsufficientHistory {
            required,
            available: points.len(),
        });
    }
    Ok(())
}
