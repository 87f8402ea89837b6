use crate::common::money::Money;

/// An account operation sent from the reader to the worker for processing.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountEvent {
    Purchase {
        amount: Money,
        day: i32,
        month: i32,
        country: String,
    },
    AmountOwed { day: i32, month: i32 },
    PayBill { amount: Money, day: i32, month: i32 },
}

impl AccountEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AccountEvent::Purchase { .. } => "purchase",
            AccountEvent::AmountOwed { .. } => "owed",
            AccountEvent::PayBill { .. } => "pay",
        }
    }

    pub fn date(&self) -> (i32, i32) {
        match self {
            AccountEvent::Purchase { day, month, .. }
            | AccountEvent::AmountOwed { day, month }
            | AccountEvent::PayBill { day, month, .. } => (*day, *month),
        }
    }
}

/// What an accepted operation produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Applied,
    Owed(Money),
}
