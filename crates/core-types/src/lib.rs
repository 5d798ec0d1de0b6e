// In crates/core-types/src/lib.rs

pub mod error;
pub mod types;

// Re-export the most important types for easy access from other crates.
pub use error::{Error, Result, validate_budget, validate_windows};
pub use types::{
    CrossoverEvent, CrossoverKind, MovingAveragePoint, PricePoint, RawPricePoint, Symbol, Trade,
    TradeAction, TradeReason,
};
