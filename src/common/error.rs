/// Rejections raised by account operations. Validation runs before any
/// balance is touched, so an error never leaves a half-applied operation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("card is disabled")]
    CardDisabled,
    #[error("date {day}/{month} precedes last update {last_day}/{last_month}")]
    StaleDate {
        day: i32,
        month: i32,
        last_day: i32,
        last_month: i32,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("invalid arguments: {0}")]
    Args(#[from] clap::Error),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
}
