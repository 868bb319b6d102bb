//! Errors raised while constructing domain types.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypesError {
    #[error("invalid selection window: start {start} is not before end {end}")]
    InvalidWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("invalid date range: {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("date out of range: {0}")]
    DateOutOfRange(NaiveDate),

    #[error("window following one ending at {end} is beyond the representable range")]
    WindowOutOfRange { end: DateTime<Utc> },
}
