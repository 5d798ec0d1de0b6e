// In crates/execution/src/ledger.rs

use crate::error::LedgerError;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

/// Cash and share holdings of a single-symbol, single-position account.
///
/// Fields are private so that `position_open == (shares > 0)` and the
/// non-negativity of cash and shares can only change through `apply_buy`
/// and `apply_sell`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ledger {
    cash: Decimal,
    shares: u64,
    position_open: bool,
}

impl Ledger {
    /// Creates a flat ledger holding `initial_budget` in cash.
    pub fn new(initial_budget: Decimal) -> Self {
        Self {
            cash: initial_budget,
            shares: 0,
            position_open: false,
        }
    }

    pub fn cash(&self) -> Decimal {
        self.cash
    }

    pub fn shares(&self) -> u64 {
        self.shares
    }

    pub fn position_open(&self) -> bool {
        self.position_open
    }

    /// Cash plus the held shares valued at `price`.
    pub fn market_value(&self, price: Decimal) -> Decimal {
        self.cash + Decimal::from(self.shares) * price
    }

    /// Largest whole-share quantity the current cash can pay for at `price`.
    ///
    /// Returns 0 for a non-positive price or when not even one share is
    /// affordable; neither case is an error.
    pub fn max_affordable_shares(&self, price: Decimal) -> u64 {
        if price <= Decimal::ZERO || self.cash < price {
            return 0;
        }
        let mut shares = self
            .cash
            .checked_div(price)
            .and_then(|quotient| quotient.floor().to_u64())
            .unwrap_or(0);
        // The quotient is rounded to 28 digits; never hand back a quantity that overspends.
        while shares > 0 && Decimal::from(shares) * price > self.cash {
            shares -= 1;
        }
        shares
    }

    /// Opens a position of `shares` at `price` and returns the cost.
    pub fn apply_buy(&mut self, price: Decimal, shares: u64) -> Result<Decimal, LedgerError> {
        if self.position_open {
            return Err(LedgerError::PositionAlreadyOpen);
        }
        if shares == 0 {
            return Err(LedgerError::ZeroShares);
        }
        if price <= Decimal::ZERO {
            return Err(LedgerError::NonPositivePrice { price });
        }
        let cost = price
            .checked_mul(Decimal::from(shares))
            .filter(|cost| *cost <= self.cash)
            .ok_or(LedgerError::InsufficientCash {
                cost: price.saturating_mul(Decimal::from(shares)),
                cash: self.cash,
            })?;

        self.cash -= cost;
        self.shares = shares;
        self.position_open = true;
        Ok(cost)
    }

    /// Closes the whole position at `price` and returns the proceeds.
    pub fn apply_sell(&mut self, price: Decimal) -> Result<Decimal, LedgerError> {
        if !self.position_open {
            return Err(LedgerError::NoOpenPosition);
        }
        if price <= Decimal::ZERO {
            return Err(LedgerError::NonPositivePrice { price });
        }
        let proceeds = price * Decimal::from(self.shares);

        self.cash += proceeds;
        self.shares = 0;
        self.position_open = false;
        Ok(proceeds)
    }

    /// `position_open` agrees with the share count.
    pub fn is_consistent(&self) -> bool {
        self.position_open == (self.shares > 0) && self.cash >= Decimal::ZERO
    }
}
