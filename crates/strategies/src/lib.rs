// In crates/strategies/src/lib.rs

use core_types::{CrossoverEvent, MovingAveragePoint, PricePoint, Result};
pub mod crossover;
pub mod ma_crossover;
pub mod moving_average;
pub mod types;

pub use crossover::detect_crossovers;
pub use ma_crossover::MACrossover;
pub use moving_average::{compute_moving_averages, simple_moving_average};
pub use types::MACrossoverSettings;

/// The universal interface for a signal-generating strategy.
///
/// A strategy turns a cleaned price series into indicator values and then
/// into the chronological list of events the execution state machine
/// consumes. It holds no state between calls; the same series always yields
/// the same events.
pub trait Strategy {
    /// The name of the strategy.
    fn name(&self) -> &'static str;

    /// Bars needed before any indicator value exists.
    fn warm_up(&self) -> usize;

    fn indicators(&self, series: &[PricePoint]) -> Result<Vec<MovingAveragePoint>>;

    fn signals(&self, indicators: &[MovingAveragePoint]) -> Vec<CrossoverEvent>;

    fn generate_events(&self, series: &[PricePoint]) -> Result<Vec<CrossoverEvent>> {
        let indicators = self.indicators(series)?;
        Ok(self.signals(&indicators))
    }
}
