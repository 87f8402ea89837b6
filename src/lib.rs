//! Balance state of a single credit card: purchases, bill payments,
//! monthly interest and a sticky disable flag tripped by three consecutive
//! distinct purchase countries.

pub mod app;

pub mod common {
    pub mod error;
    pub mod event;
    pub mod money;
}

pub mod domain {
    pub mod account;
    pub mod country;
    pub mod date;
    pub mod interest;
}

pub mod io {
    pub mod reader;
    pub mod writer;
}

pub mod worker {
    pub mod processor;

    pub mod handlers {
        pub mod amount_owed;
        pub mod pay_bill;
        pub mod purchase;
    }
}

pub use common::{error::AccountError, money::Money};
pub use domain::account::Account;

use worker::handlers;

/// Creates a fresh account: nothing owed, never updated, card enabled.
pub fn initialize() -> Account {
    Account::new()
}

/// Charges `amount` to the card. May disable the card before rejecting.
pub fn purchase(
    account: &mut Account,
    amount: Money,
    day: i32,
    month: i32,
    country: &str,
) -> Result<(), AccountError> {
    handlers::purchase::handle(account, amount, day, month, country)
}

/// Total owed as of (day, month), realizing any pending interest.
pub fn amount_owed(account: &mut Account, day: i32, month: i32) -> Result<Money, AccountError> {
    handlers::amount_owed::handle(account, day, month)
}

/// Pays `amount` off the balance. A stale date still moves the last-update
/// date before the payment is rejected.
pub fn pay_bill(
    account: &mut Account,
    amount: Money,
    day: i32,
    month: i32,
) -> Result<(), AccountError> {
    handlers::pay_bill::handle(account, amount, day, month)
}
