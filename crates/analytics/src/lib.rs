// In crates/analytics/src/lib.rs

pub mod engine;
pub mod types;

pub use engine::{AnalyticsEngine, BuyAndHold, buy_and_hold};
pub use types::PerformanceReport;
