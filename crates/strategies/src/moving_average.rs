// In crates/strategies/src/moving_average.rs

use crate::types::MACrossoverSettings;
use core_types::{MovingAveragePoint, PricePoint, Result};
use rust_decimal::Decimal;

/// Simple (unweighted) rolling mean over `window` values.
///
/// Entry `i` is the mean of `values[i + 1 - window..=i]`, or `None` while
/// fewer than `window` values have been seen. The running sum is exact in
/// `Decimal`, so the result does not drift over long series.
pub fn simple_moving_average(values: &[Decimal], window: usize) -> Vec<Option<Decimal>> {
    let mut result = vec![None; values.len()];
    if window == 0 || values.len() < window {
        return result;
    }

    let divisor = Decimal::from(window);
    let mut sum: Decimal = values[..window].iter().sum();
    result[window - 1] = Some(sum / divisor);

    for i in window..values.len() {
        sum += values[i];
        sum -= values[i - window];
        result[i] = Some(sum / divisor);
    }

    result
}

/// Aligns the short and long averages with the series they were computed on.
pub fn compute_moving_averages(
    series: &[PricePoint],
    settings: &MACrossoverSettings,
) -> Result<Vec<MovingAveragePoint>> {
    settings.validate()?;

    let closes: Vec<Decimal> = series.iter().map(|point| point.close).collect();
    let short = simple_moving_average(&closes, settings.short_window);
    let long = simple_moving_average(&closes, settings.long_window);

    let points: Vec<MovingAveragePoint> = series
        .iter()
        .zip(short)
        .zip(long)
        .map(|((point, short_ma), long_ma)| MovingAveragePoint {
            timestamp: point.timestamp,
            close: point.close,
            short_ma,
            long_ma,
        })
        .collect();

    tracing::debug!(
        short_window = settings.short_window,
        long_window = settings.long_window,
        bars = points.len(),
        valid_bars = points.iter().filter(|p| p.pair().is_some()).count(),
        "Moving averages computed."
    );

    Ok(points)
}
