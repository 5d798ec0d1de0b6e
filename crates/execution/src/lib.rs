// In crates/execution/src/lib.rs

pub mod error;
pub mod ledger;
pub mod machine;
pub mod types;

// Re-export public types
pub use error::{Error, LedgerError, Result};
pub use ledger::Ledger;
pub use machine::{TradeStateMachine, execute_events};
pub use types::{Decision, DecisionOutcome, ExecutionOutcome, PositionState};
