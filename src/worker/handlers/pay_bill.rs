use tracing::debug;

use crate::{
    common::{error::AccountError, money::Money},
    domain::{account::Account, date::LedgerDate, interest},
};

pub fn handle(acc: &mut Account, amount: Money, day: i32, month: i32) -> Result<(), AccountError> {
    let date = LedgerDate::new(day, month);
    // unlike purchases, a stale payment still moves the date
    if let Err(err) = acc.ensure_not_stale(date) {
        acc.advance_to(date);
        return Err(err);
    }

    interest::accrue(acc, month);
    apply_payment(acc, amount);
    acc.advance_to(date);
    Ok(())
}

/// Pays down the compounding balance first, then the recent one. The recent
/// balance may go negative on overpayment.
fn apply_payment(acc: &mut Account, amount: Money) {
    if amount <= acc.owing_with_interest {
        acc.owing_with_interest -= amount;
    } else {
        let rest = amount - acc.owing_with_interest;
        acc.owing_with_interest = Money::zero();
        acc.owing_recent -= rest;
    }
    debug!(%amount, total = %acc.total_owed(), "payment applied");
}
