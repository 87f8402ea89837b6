use tracing::{debug, warn};

use crate::{
    common::{error::AccountError, money::Money},
    domain::{account::Account, date::LedgerDate, interest},
};

pub fn handle(
    acc: &mut Account,
    amount: Money,
    day: i32,
    month: i32,
    country: &str,
) -> Result<(), AccountError> {
    // runs before anything else and may disable the card even though this
    // purchase is then rejected
    check_countries(acc, country);
    if acc.is_disabled() {
        return Err(AccountError::CardDisabled);
    }

    let date = LedgerDate::new(day, month);
    acc.ensure_not_stale(date)?;

    interest::accrue(acc, month);
    acc.advance_to(date);
    apply_purchase(acc, amount, country);
    Ok(())
}

fn check_countries(acc: &mut Account, country: &str) {
    if !acc.disabled && acc.countries.completes_distinct_triple(country) {
        warn!(
            country,
            last = %acc.countries.last,
            second_last = %acc.countries.second_last,
            "three consecutive distinct countries, disabling card"
        );
        acc.disabled = true;
    }
}

fn apply_purchase(acc: &mut Account, amount: Money, country: &str) {
    acc.owing_recent += amount;
    acc.countries.record(country);
    debug!(%amount, country, owing_recent = %acc.owing_recent, "purchase applied");
}
