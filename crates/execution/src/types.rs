// In crates/execution/src/types.rs

use crate::ledger::Ledger;
use chrono::NaiveDate;
use core_types::{CrossoverKind, Trade};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PositionState {
    /// No shares held.
    Flat,
    /// One open long position.
    Long,
}

/// What the state machine did with a crossover event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DecisionOutcome {
    Bought,
    Sold,
    /// Golden event while already long.
    IgnoredAlreadyLong,
    /// Death event with nothing to sell.
    IgnoredFlat,
    /// Golden event whose price exceeds the available cash.
    SkippedInsufficientCash,
}

/// Audit record of one consumed event, including the ones that changed nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decision {
    pub timestamp: NaiveDate,
    pub kind: CrossoverKind,
    pub price: Decimal,
    pub outcome: DecisionOutcome,
}

/// Everything a finished run of the state machine produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionOutcome {
    pub trades: Vec<Trade>,
    pub decisions: Vec<Decision>,
    pub ledger: Ledger,
}

impl ExecutionOutcome {
    pub fn skipped_signals(&self) -> usize {
        self.decisions
            .iter()
            .filter(|d| d.outcome == DecisionOutcome::SkippedInsufficientCash)
            .count()
    }
}
