use tracing::debug;

use crate::{
    common::{error::AccountError, money::Money},
    domain::{country::CountryHistory, date::LedgerDate},
};

/// State of a single credit card.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Account {
    /// Older balance that compounds monthly.
    pub owing_with_interest: Money,
    /// Balance added since interest was last applied.
    pub owing_recent: Money,
    pub last_update: LedgerDate,
    pub countries: CountryHistory,
    /// Sticky: nothing ever clears it once set.
    pub disabled: bool,
}

impl Account {
    pub fn new() -> Self {
        Self {
            owing_with_interest: Money::zero(),
            owing_recent: Money::zero(),
            last_update: LedgerDate::NEVER,
            countries: CountryHistory::default(),
            disabled: false,
        }
    }

    pub fn total_owed(&self) -> Money {
        self.owing_with_interest + self.owing_recent
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn last_update(&self) -> LedgerDate {
        self.last_update
    }

    pub fn advance_to(&mut self, date: LedgerDate) {
        self.last_update = date;
        debug!(day = date.day, month = date.month, "date advanced");
    }

    /// Rejects dates earlier than the last recorded update.
    pub fn ensure_not_stale(&self, date: LedgerDate) -> Result<(), AccountError> {
        if date.is_same_or_later(&self.last_update) {
            return Ok(());
        }
        Err(AccountError::StaleDate {
            day: date.day,
            month: date.month,
            last_day: self.last_update.day,
            last_month: self.last_update.month,
        })
    }
}
