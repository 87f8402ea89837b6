/// A (day, month) pair on the account's simplified calendar.
///
/// Months dominate days entirely and neither is checked for calendar
/// legality; day 31 of month 2 is a perfectly good date here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerDate {
    pub day: i32,
    pub month: i32,
}

impl LedgerDate {
    /// Sentinel for an account that has never been updated.
    pub const NEVER: LedgerDate = LedgerDate { day: -1, month: -1 };

    pub fn new(day: i32, month: i32) -> Self {
        Self { day, month }
    }

    pub fn is_same_or_later(&self, other: &LedgerDate) -> bool {
        date_same_or_later(self.day, self.month, other.day, other.month)
    }
}

impl Default for LedgerDate {
    fn default() -> Self {
        Self::NEVER
    }
}

/// True when (day1, month1) is the same date as (day2, month2) or later.
/// Ordering is month-major: any later month wins regardless of day.
pub fn date_same_or_later(day1: i32, month1: i32, day2: i32, month2: i32) -> bool {
    if day1 == day2 && month1 == month2 {
        return true;
    }
    if month1 > month2 {
        return true;
    }
    month1 == month2 && day1 > day2
}
