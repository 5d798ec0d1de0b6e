// In crates/strategies/src/ma_crossover.rs

use crate::crossover::detect_crossovers;
use crate::moving_average::compute_moving_averages;
use crate::types::MACrossoverSettings;
use crate::Strategy;
use core_types::{CrossoverEvent, MovingAveragePoint, PricePoint, Result};

/// Golden/death cross strategy over two simple moving averages.
#[derive(Debug, Clone)]
pub struct MACrossover {
    /// The configuration for this strategy instance.
    settings: MACrossoverSettings,
}

impl MACrossover {
    /// Creates a new `MACrossover` strategy instance, rejecting unusable windows.
    pub fn new(settings: MACrossoverSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &MACrossoverSettings {
        &self.settings
    }
}

impl Strategy for MACrossover {
    fn name(&self) -> &'static str {
        "MACrossover"
    }

    fn warm_up(&self) -> usize {
        self.settings.long_window
    }

    fn indicators(&self, series: &[PricePoint]) -> Result<Vec<MovingAveragePoint>> {
        compute_moving_averages(series, &self.settings)
    }

    fn signals(&self, indicators: &[MovingAveragePoint]) -> Vec<CrossoverEvent> {
        detect_crossovers(indicators)
    }
}
