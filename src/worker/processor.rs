use tracing::info;

use crate::{
    common::{
        error::AccountError,
        event::{AccountEvent, Outcome},
    },
    domain::account::Account,
    worker::handlers::{amount_owed, pay_bill, purchase},
};

#[derive(Debug, Default)]
pub struct Processor {}
impl Processor {
    pub fn new() -> Self {
        Self {}
    }

    pub fn process(
        &mut self,
        acc: &mut Account,
        event: AccountEvent,
    ) -> Result<Outcome, AccountError> {
        let op = event.name();
        let outcome = match event {
            AccountEvent::Purchase {
                amount,
                day,
                month,
                country,
            } => purchase::handle(acc, amount, day, month, &country).map(|_| Outcome::Applied),
            AccountEvent::AmountOwed { day, month } => {
                amount_owed::handle(acc, day, month).map(Outcome::Owed)
            }
            AccountEvent::PayBill { amount, day, month } => {
                pay_bill::handle(acc, amount, day, month).map(|_| Outcome::Applied)
            }
        };

        if let Err(err) = &outcome {
            info!(op, %err, "operation rejected");
        }
        outcome
    }
}
