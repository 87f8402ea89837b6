use tracing::debug;

use crate::{
    common::{error::AccountError, money::Money},
    domain::{account::Account, date::LedgerDate, interest},
};

/// Returns the total owed as of (day, month). Realizes any pending interest
/// and moves the last-update date forward, so this is not a pure read.
pub fn handle(acc: &mut Account, day: i32, month: i32) -> Result<Money, AccountError> {
    let date = LedgerDate::new(day, month);
    acc.ensure_not_stale(date)?;

    interest::accrue(acc, month);
    acc.advance_to(date);

    let total = acc.total_owed();
    debug!(day, month, %total, "amount owed");
    Ok(total)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn money(v: &str) -> Money {
        Money::from_str(v).unwrap()
    }

    #[test]
    fn fresh_account_owes_nothing() {
        let mut acc = Account::new();
        assert_eq!(handle(&mut acc, 1, 1), Ok(Money::zero()));
        assert_eq!(acc.last_update, LedgerDate::new(1, 1));
    }

    #[test]
    fn same_month_inquiry_adds_no_interest() {
        let mut acc = Account::new();
        acc.last_update = LedgerDate::new(1, 1);
        acc.owing_recent = money("100");

        assert_eq!(handle(&mut acc, 1, 1), Ok(money("100")));
        assert_eq!(handle(&mut acc, 20, 1), Ok(money("100")));
        assert_eq!(acc.last_update, LedgerDate::new(20, 1));
    }

    #[test]
    fn inquiry_realizes_interest() {
        let mut acc = Account::new();
        acc.last_update = LedgerDate::new(1, 1);
        acc.owing_with_interest = money("100");
        acc.owing_recent = money("50");

        assert_eq!(handle(&mut acc, 1, 2), Ok(money("155")));
        assert_eq!(acc.owing_with_interest, money("155"));
        assert_eq!(acc.owing_recent, Money::zero());
    }

    #[test]
    fn repeated_inquiry_on_same_date_is_stable() {
        let mut acc = Account::new();
        acc.last_update = LedgerDate::new(1, 1);
        acc.owing_with_interest = money("100");
        acc.owing_recent = money("50");

        let first = handle(&mut acc, 15, 4).unwrap();
        let second = handle(&mut acc, 15, 4).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn stale_inquiry_is_rejected_without_mutation() {
        let mut acc = Account::new();
        acc.last_update = LedgerDate::new(5, 6);
        acc.owing_recent = money("10");
        let before = acc.clone();

        assert!(matches!(
            handle(&mut acc, 4, 6),
            Err(AccountError::StaleDate { .. })
        ));
        assert_eq!(acc, before);
    }

    #[test]
    fn disabled_card_can_still_be_queried() {
        let mut acc = Account::new();
        acc.disabled = true;
        acc.owing_recent = money("10");

        // never-updated account: two elapsed months from the -1 sentinel
        let owed = handle(&mut acc, 1, 1).unwrap();
        assert!((owed.as_f64() - 10.5).abs() < 1e-9);
    }
}
