//! Gregorian date to Julian Day Number conversion.
//!
//! Pure integer arithmetic over the proleptic Gregorian calendar. A Julian
//! Day Number here is the integer label of a calendar day (the astronomical
//! day running noon to noon); differences between two of them are elapsed
//! days, which is all the Hebrew conversion needs.

use crate::error::LuachError;
use crate::types::GregorianDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// An integer Julian Day Number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JulianDay(pub i64);

impl JulianDay {
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Day of week, 0 = Sunday through 6 = Saturday.
    pub fn weekday(&self) -> u8 {
        // JDN 0 fell on a Monday.
        ((self.0 + 1).rem_euclid(7)) as u8
    }
}

impl fmt::Display for JulianDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add<i64> for JulianDay {
    type Output = JulianDay;

    fn add(self, days: i64) -> JulianDay {
        JulianDay(self.0 + days)
    }
}

impl Sub for JulianDay {
    type Output = i64;

    fn sub(self, other: JulianDay) -> i64 {
        self.0 - other.0
    }
}

/// Returns true when `year` is a Gregorian leap year (divisible by 4,
/// centuries only when divisible by 400).
pub fn gregorian_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Days in a Gregorian month, or `None` for an invalid month number.
pub fn gregorian_month_days(year: i32, month: u8) -> Option<u8> {
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if gregorian_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => return None,
    };
    Some(days)
}

/// Converts a proleptic Gregorian date to its Julian Day Number.
///
/// January and February are treated as months 13 and 14 of the preceding
/// year so the leap day lands at the end of the shifted year, then century
/// and quad-century corrections are applied. Valid for BCE years via
/// astronomical numbering.
///
/// # Errors
/// Returns `InvalidDate` when the day/month combination does not exist in
/// the given year.
pub fn to_julian_day(date: GregorianDate) -> Result<JulianDay, LuachError> {
    let limit = gregorian_month_days(date.year, date.month)
        .ok_or_else(|| LuachError::invalid_gregorian(date.day, date.month, date.year))?;
    if date.day == 0 || date.day > limit {
        return Err(LuachError::invalid_gregorian(date.day, date.month, date.year));
    }

    let a = i64::from((14 - date.month) / 12);
    let y = i64::from(date.year) + 4800 - a;
    let m = i64::from(date.month) + 12 * a - 3;

    let jdn =
        i64::from(date.day) + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045;
    Ok(JulianDay(jdn))
}

/// Converts a Julian Day Number back to its proleptic Gregorian date.
///
/// Exact inverse of [`to_julian_day`] for non-negative day numbers.
///
/// # Errors
/// Returns `OutOfRange` for negative day numbers.
pub fn from_julian_day(jdn: JulianDay) -> Result<GregorianDate, LuachError> {
    if jdn.0 < 0 {
        return Err(LuachError::OutOfRange {
            value: jdn.0,
            min: 0,
            max: i64::MAX,
        });
    }

    let a = jdn.0 + 32044;
    let b = (4 * a + 3) / 146097;
    let c = a - 146097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;

    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;

    Ok(GregorianDate {
        year: year as i32,
        month: month as u8,
        day: day as u8,
    })
}
