// In crates/strategies/src/types.rs

use core_types::Result;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SHORT_WINDOW: usize = 50;
pub const DEFAULT_LONG_WINDOW: usize = 200;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct MACrossoverSettings {
    /// Bars in the fast simple moving average.
    #[serde(default = "default_short_window")]
    pub short_window: usize,
    /// Bars in the slow simple moving average.
    #[serde(default = "default_long_window")]
    pub long_window: usize,
}

impl MACrossoverSettings {
    pub fn new(short_window: usize, long_window: usize) -> Result<Self> {
        let settings = Self {
            short_window,
            long_window,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        core_types::validate_windows(self.short_window, self.long_window)
    }
}

impl Default for MACrossoverSettings {
    fn default() -> Self {
        Self {
            short_window: DEFAULT_SHORT_WINDOW,
            long_window: DEFAULT_LONG_WINDOW,
        }
    }
}

fn default_short_window() -> usize {
    DEFAULT_SHORT_WINDOW
}

fn default_long_window() -> usize {
    DEFAULT_LONG_WINDOW
}
