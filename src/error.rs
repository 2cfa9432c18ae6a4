//! Error type for the booking widget library.

use chrono::NaiveDate;
use thiserror::Error;

/// Rejections raised at the input boundary.
///
/// Nothing in the widget treats these as fatal: the caller keeps the previous
/// value and may surface the message next to the offending field.
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("'{0}' is not a valid date (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("{date} is in the past (earliest bookable day is {today})")]
    DateInPast { date: NaiveDate, today: NaiveDate },

    #[error("unknown party size '{0}'")]
    UnknownPartySize(String),

    #[error("'{0}' is not an offered time slot")]
    UnknownTimeSlot(String),

    #[error("stored configuration is corrupt: {0}")]
    CorruptConfiguration(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BookingError>;
