use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from luach operations.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LuachError {
    /// Day/month combination does not exist in the given year of the
    /// named calendar.
    #[error("invalid {calendar} date: day {day} of month {month} does not exist in year {year}")]
    InvalidDate {
        calendar: String,
        day: u8,
        month: u8,
        year: i32,
    },

    /// Numerology input violated a precondition.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// Julian Day Number before the Hebrew epoch, or a numeral magnitude
    /// beyond what the accumulator table can spell.
    #[error("value {value} is outside the supported range [{min}, {max}]")]
    OutOfRange { value: i64, min: i64, max: i64 },
}

impl LuachError {
    /// Creates an `InvalidDate` error for the Gregorian calendar.
    pub fn invalid_gregorian(day: u8, month: u8, year: i32) -> Self {
        Self::InvalidDate {
            calendar: "gregorian".into(),
            day,
            month,
            year,
        }
    }

    /// Creates an `InvalidDate` error for the Hebrew calendar. `month` is
    /// the civil ordinal (Tishrei = 1).
    pub fn invalid_hebrew(day: u8, month: u8, year: i32) -> Self {
        Self::InvalidDate {
            calendar: "hebrew".into(),
            day,
            month,
            year,
        }
    }

    /// Creates an `InvalidArgument` error.
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}
