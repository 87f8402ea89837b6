use std::io::Write;

use crate::{
    common::{
        error::AccountError,
        event::{AccountEvent, Outcome},
    },
    domain::account::Account,
};

/// The result of replaying one operation, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationReport {
    pub seq: usize,
    pub op: &'static str,
    pub day: i32,
    pub month: i32,
    pub result: Result<Outcome, AccountError>,
}

impl OperationReport {
    pub fn new(seq: usize, event: &AccountEvent, result: Result<Outcome, AccountError>) -> Self {
        let (day, month) = event.date();
        Self {
            seq,
            op: event.name(),
            day,
            month,
            result,
        }
    }
}

#[derive(serde::Serialize)]
/// Internal CSV output row: `seq,op,day,month,status,owed`.
struct ResultRow {
    seq: usize,
    op: &'static str,
    day: i32,
    month: i32,
    status: &'static str,
    owed: Option<String>,
}

#[derive(serde::Serialize)]
/// Internal CSV output row for the final account state.
struct SnapshotRow<'a> {
    owing_with_interest: String,
    owing_recent: String,
    total: String,
    last_day: i32,
    last_month: i32,
    last_country: &'a str,
    second_last_country: &'a str,
    disabled: bool,
}

/// Writes one row per replayed operation.
///
/// `status` is `ok`, `card_disabled` or `stale_date`; `owed` holds the
/// 4-decimal total for accepted balance inquiries and is blank otherwise.
///
/// # Examples
///
/// ```
/// use credit_card::common::{event::{AccountEvent, Outcome}, money::Money};
/// use credit_card::io::writer::{write_results, OperationReport};
///
/// let event = AccountEvent::AmountOwed { day: 1, month: 1 };
/// let reports = vec![OperationReport::new(1, &event, Ok(Outcome::Owed(Money::new(100.0))))];
///
/// let mut out = Vec::new();
/// write_results(&mut out, &reports).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "seq,op,day,month,status,owed\n1,owed,1,1,ok,100.0000\n"
/// );
/// ```
pub fn write_results<W: Write>(writer: W, reports: &[OperationReport]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for report in reports {
        let (status, owed) = match &report.result {
            Ok(Outcome::Applied) => ("ok", None),
            Ok(Outcome::Owed(total)) => ("ok", Some(total.to_string_4dp())),
            Err(AccountError::CardDisabled) => ("card_disabled", None),
            Err(AccountError::StaleDate { .. }) => ("stale_date", None),
        };
        wtr.serialize(ResultRow {
            seq: report.seq,
            op: report.op,
            day: report.day,
            month: report.month,
            status,
            owed,
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the account state as a header plus a single row.
pub fn write_snapshot<W: Write>(writer: W, acc: &Account) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    wtr.serialize(SnapshotRow {
        owing_with_interest: acc.owing_with_interest.to_string_4dp(),
        owing_recent: acc.owing_recent.to_string_4dp(),
        total: acc.total_owed().to_string_4dp(),
        last_day: acc.last_update.day,
        last_month: acc.last_update.month,
        last_country: &acc.countries.last,
        second_last_country: &acc.countries.second_last,
        disabled: acc.disabled,
    })?;

    wtr.flush()?;
    Ok(())
}
