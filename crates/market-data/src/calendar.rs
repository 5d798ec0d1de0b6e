// In crates/market-data/src/calendar.rs

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The set of days on which a close is expected.
///
/// `None` means no calendar is known, so no gaps are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradingCalendar {
    #[default]
    None,
    /// Monday through Friday, holidays not modelled.
    Weekdays,
}

impl TradingCalendar {
    pub fn is_trading_day(&self, date: NaiveDate) -> bool {
        match self {
            TradingCalendar::None => true,
            TradingCalendar::Weekdays => !matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
        }
    }

    /// Expected trading days strictly between `from` and `to`.
    pub fn missing_days(&self, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
        if *self == TradingCalendar::None {
            return Vec::new();
        }
        let mut days = Vec::new();
        let mut cursor = from;
        while let Some(next) = cursor.checked_add_days(Days::new(1)) {
            if next >= to {
                break;
            }
            if self.is_trading_day(next) {
                days.push(next);
            }
            cursor = next;
        }
        days
    }
}
