// In crates/market-data/src/lib.rs

pub mod calendar;
pub mod preprocess;
pub mod source;

pub use calendar::TradingCalendar;
pub use preprocess::{CleanSeries, CleaningReport, clean_series, require_history};
pub use source::{InMemorySource, PriceSource};
