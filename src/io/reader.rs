use crate::common::{event::AccountEvent, money::Money};
use std::{io::Read, str::FromStr};

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the input headers. `amount` is
/// blank for balance inquiries and `country` is blank for everything but
/// purchases.
struct CsvRow {
    op: String,
    day: i32,
    month: i32,
    amount: Option<String>,
    country: Option<String>,
}

/// Reads and validates account operations from a CSV reader.
///
/// Supported headers: `op,day,month,amount,country`.
/// `op` is case-insensitive: `purchase`, `owed` (or `amount_owed`) and
/// `pay` (or `pay_bill`). Purchases need an amount and a country, payments
/// need an amount; errors include the row's op and date.
///
/// # Examples
///
/// ```
/// use credit_card::io::reader::read_events;
/// use credit_card::common::event::AccountEvent;
/// use csv::ReaderBuilder;
///
/// let data = "op,day,month,amount,country\n\
/// purchase,1,1,100,US\n\
/// owed,1,1,,\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let events: Vec<_> = read_events(&mut rdr).collect();
///
/// assert!(matches!(events[0], Ok(AccountEvent::Purchase { day: 1, month: 1, .. })));
/// assert!(matches!(events[1], Ok(AccountEvent::AmountOwed { day: 1, month: 1 })));
/// ```
pub fn read_events<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<AccountEvent, String>> + '_ {
    rdr.deserialize::<CsvRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;
        let kind = row.op.trim().to_ascii_lowercase();
        if row.day < 1 || row.month < 1 {
            return Err(format!(
                "invalid date {}/{} for {kind}: day and month must be positive",
                row.day, row.month
            ));
        }

        match kind.as_str() {
            "purchase" => {
                let amount = required_amount(&row, "purchase")?;
                let country = row
                    .country
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty())
                    .ok_or_else(|| {
                        format!("purchase missing country on {}/{}", row.day, row.month)
                    })?;
                Ok(AccountEvent::Purchase {
                    amount,
                    day: row.day,
                    month: row.month,
                    country,
                })
            }
            "owed" | "amount_owed" => Ok(AccountEvent::AmountOwed {
                day: row.day,
                month: row.month,
            }),
            "pay" | "pay_bill" => {
                let amount = required_amount(&row, "pay")?;
                Ok(AccountEvent::PayBill {
                    amount,
                    day: row.day,
                    month: row.month,
                })
            }
            other => Err(format!(
                "unknown operation: {other} on {}/{}",
                row.day, row.month
            )),
        }
    })
}

fn required_amount(row: &CsvRow, op: &str) -> Result<Money, String> {
    let amt_str = row
        .amount
        .as_deref()
        .ok_or_else(|| format!("{op} missing amount on {}/{}", row.day, row.month))?;
    Money::from_str(amt_str).map_err(|e| e.to_string())
}
