use tracing::debug;

use crate::{common::money::Money, domain::account::Account};

pub const MONTHLY_INTEREST_RATE: f64 = 0.05;

/// Raw month subtraction, saturating at the `i32` bounds; days within a
/// month are ignored.
pub fn elapsed_months(to_month: i32, from_month: i32) -> i32 {
    to_month.saturating_sub(from_month)
}

/// Applies interest for the months between the account's last update and
/// `month`. The recent balance is folded in after the first month's
/// compounding and before any remaining idle months.
pub fn accrue(acc: &mut Account, month: i32) {
    let n = elapsed_months(month, acc.last_update.month);
    if n < 1 {
        return;
    }

    let factor = 1.0 + MONTHLY_INTEREST_RATE;
    acc.owing_with_interest = acc.owing_with_interest.scaled(factor);
    acc.owing_with_interest += acc.owing_recent;
    acc.owing_recent = Money::zero();

    if n > 1 {
        acc.owing_with_interest = acc.owing_with_interest.scaled(factor.powi(n - 1));
    }

    debug!(
        months = n,
        owing_with_interest = %acc.owing_with_interest,
        "interest accrued"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::date::LedgerDate;

    fn account_at(month: i32, with_interest: f64, recent: f64) -> Account {
        let mut acc = Account::new();
        acc.last_update = LedgerDate::new(1, month);
        acc.owing_with_interest = Money::new(with_interest);
        acc.owing_recent = Money::new(recent);
        acc
    }

    fn assert_close(actual: Money, expected: f64) {
        assert!(
            (actual.as_f64() - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn no_accrual_within_the_same_month_or_backwards() {
        let mut acc = account_at(3, 100.0, 50.0);
        accrue(&mut acc, 3);
        assert_eq!(acc.owing_with_interest, Money::new(100.0));
        assert_eq!(acc.owing_recent, Money::new(50.0));

        accrue(&mut acc, 2);
        assert_eq!(acc.owing_with_interest, Money::new(100.0));
        assert_eq!(acc.owing_recent, Money::new(50.0));
    }

    #[test]
    fn one_month_compounds_then_rolls_in_recent() {
        let mut acc = account_at(1, 0.0, 100.0);
        accrue(&mut acc, 2);
        assert_eq!(acc.owing_with_interest, Money::new(100.0));
        assert_eq!(acc.owing_recent, Money::zero());

        let mut acc = account_at(1, 100.0, 50.0);
        accrue(&mut acc, 2);
        assert_close(acc.owing_with_interest, 155.0);
        assert_eq!(acc.owing_recent, Money::zero());
    }

    #[test]
    fn idle_months_compound_the_rolled_in_balance() {
        let mut acc = account_at(1, 100.0, 50.0);
        accrue(&mut acc, 4);
        // (100 * 1.05 + 50) * 1.05^2
        assert_close(acc.owing_with_interest, 155.0 * 1.1025);
        assert_eq!(acc.owing_recent, Money::zero());
    }

    #[test]
    fn first_update_from_never_rolls_recent_into_interest() {
        let mut acc = Account::new();
        acc.owing_recent = Money::new(10.0);
        // month 1 - (-1) = 2 elapsed months
        accrue(&mut acc, 1);
        assert_close(acc.owing_with_interest, 10.5);
        assert_eq!(acc.owing_recent, Money::zero());
    }

    #[test]
    fn elapsed_months_is_plain_subtraction() {
        assert_eq!(elapsed_months(5, 2), 3);
        assert_eq!(elapsed_months(2, 5), -3);
        assert_eq!(elapsed_months(1, -1), 2);
    }

    #[test]
    fn elapsed_months_saturates_at_extreme_months() {
        assert_eq!(elapsed_months(i32::MAX, -1), i32::MAX);
        assert_eq!(elapsed_months(5, i32::MIN), i32::MAX);
        assert_eq!(elapsed_months(i32::MIN, 1), i32::MIN);
    }

    #[test]
    fn accrue_over_extreme_month_gap_does_not_overflow() {
        let mut acc = Account::new();
        accrue(&mut acc, i32::MAX);
        assert_eq!(acc.owing_recent, Money::zero());

        let mut acc = account_at(i32::MIN, 0.0, 10.0);
        accrue(&mut acc, 5);
        assert_eq!(acc.owing_recent, Money::zero());
    }
}
