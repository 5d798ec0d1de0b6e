// In crates/execution/src/machine.rs

use crate::error::{Error, Result};
use crate::ledger::Ledger;
use crate::types::{Decision, DecisionOutcome, ExecutionOutcome, PositionState};
use chrono::NaiveDate;
use core_types::{CrossoverEvent, CrossoverKind, PricePoint, Trade, TradeAction, TradeReason};
use rust_decimal::Decimal;

/// Turns crossover events into trades against a single-position ledger.
///
/// | State | Event  | Action                                   | Next |
/// |-------|--------|------------------------------------------|------|
/// | Flat  | Golden | buy max affordable shares, if any        | Long / Flat |
/// | Flat  | Death  | ignore                                   | Flat |
/// | Long  | Death  | sell everything                          | Flat |
/// | Long  | Golden | ignore                                   | Long |
/// | Long  | end    | sell everything at the final close       | Flat |
///
/// The machine owns the ledger for the whole run and never looks ahead.
#[derive(Debug)]
pub struct TradeStateMachine {
    ledger: Ledger,
    trades: Vec<Trade>,
    decisions: Vec<Decision>,
    last_event: Option<NaiveDate>,
}

impl TradeStateMachine {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger,
            trades: Vec::new(),
            decisions: Vec::new(),
            last_event: None,
        }
    }

    pub fn state(&self) -> PositionState {
        if self.ledger.position_open() {
            PositionState::Long
        } else {
            PositionState::Flat
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// Applies one event. Events must arrive in strictly ascending time order.
    pub fn on_event(&mut self, event: &CrossoverEvent) -> Result<DecisionOutcome> {
        if let Some(previous) = self.last_event {
            if event.timestamp <= previous {
                return Err(Error::OutOfOrder {
                    previous,
                    current: event.timestamp,
                });
            }
        }
        self.last_event = Some(event.timestamp);

        let outcome = match (self.state(), event.kind) {
            (PositionState::Flat, CrossoverKind::Golden) => self.enter(event)?,
            (PositionState::Flat, CrossoverKind::Death) => DecisionOutcome::IgnoredFlat,
            (PositionState::Long, CrossoverKind::Death) => {
                self.exit(event.timestamp, event.close, TradeReason::DeathCross)?;
                DecisionOutcome::Sold
            }
            (PositionState::Long, CrossoverKind::Golden) => DecisionOutcome::IgnoredAlreadyLong,
        };

        tracing::debug!(date = %event.timestamp, kind = %event.kind, ?outcome, "Event processed.");
        self.decisions.push(Decision {
            timestamp: event.timestamp,
            kind: event.kind,
            price: event.close,
            outcome,
        });
        Ok(outcome)
    }

    /// Liquidates any open position at the final bar and hands back the results.
    pub fn finish(mut self, final_bar: &PricePoint) -> Result<ExecutionOutcome> {
        if let Some(last_event) = self.last_event {
            if last_event > final_bar.timestamp {
                return Err(Error::EventAfterSeriesEnd {
                    event: last_event,
                    last_bar: final_bar.timestamp,
                });
            }
        }

        if self.state() == PositionState::Long {
            tracing::info!(
                date = %final_bar.timestamp,
                shares = self.ledger.shares(),
                price = %final_bar.close,
                "End of series reached with an open position. Forcing liquidation."
            );
            self.exit(final_bar.timestamp, final_bar.close, TradeReason::EndOfSeries)?;
        }

        Ok(ExecutionOutcome {
            trades: self.trades,
            decisions: self.decisions,
            ledger: self.ledger,
        })
    }

    fn enter(&mut self, event: &CrossoverEvent) -> Result<DecisionOutcome> {
        let shares = self.ledger.max_affordable_shares(event.close);
        if shares == 0 {
            tracing::warn!(
                date = %event.timestamp,
                price = %event.close,
                cash = %self.ledger.cash(),
                "Golden cross skipped: cash does not cover a single share."
            );
            return Ok(DecisionOutcome::SkippedInsufficientCash);
        }

        let cost = self.ledger.apply_buy(event.close, shares)?;
        self.record(event.timestamp, TradeAction::Buy, TradeReason::GoldenCross, shares, event.close, cost);
        Ok(DecisionOutcome::Bought)
    }

    fn exit(&mut self, timestamp: NaiveDate, price: Decimal, reason: TradeReason) -> Result<()> {
        let shares = self.ledger.shares();
        let proceeds = self.ledger.apply_sell(price)?;
        self.record(timestamp, TradeAction::Sell, reason, shares, price, proceeds);
        Ok(())
    }

    fn record(
        &mut self,
        timestamp: NaiveDate,
        action: TradeAction,
        reason: TradeReason,
        shares: u64,
        price: Decimal,
        total: Decimal,
    ) {
        let trade = Trade {
            timestamp,
            action,
            reason,
            shares,
            price,
            total,
            cash_after: self.ledger.cash(),
        };
        tracing::info!(
            date = %trade.timestamp,
            action = ?trade.action,
            reason = ?trade.reason,
            shares = trade.shares,
            price = %trade.price,
            total = %trade.total,
            cash_after = %trade.cash_after,
            "Trade executed."
        );
        debug_assert!(self.ledger.is_consistent());
        self.trades.push(trade);
    }
}

/// Runs the whole event list through a fresh state machine, then force-closes
/// at `final_bar`.
pub fn execute_events(
    ledger: Ledger,
    events: &[CrossoverEvent],
    final_bar: &PricePoint,
) -> Result<ExecutionOutcome> {
    let mut machine = TradeStateMachine::new(ledger);
    for event in events {
        machine.on_event(event)?;
    }
    machine.finish(final_bar)
}
