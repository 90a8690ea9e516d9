//! Extension trait for `NaiveDate`.

use crate::error::LuachError;
use crate::format::DateFormat;
use crate::julian::JulianDay;
use crate::types::HebrewDate;
use chrono::NaiveDate;

/// Extends `chrono::NaiveDate` with Hebrew calendar conversions.
pub trait HebrewDateExt {
    /// Converts to the corresponding Hebrew date.
    fn to_hebrew(&self) -> Result<HebrewDate, LuachError>;

    /// Julian Day Number of this date.
    fn julian_day(&self) -> Result<JulianDay, LuachError>;

    /// Renders the corresponding Hebrew date, parts joined by spaces.
    fn format_hebrew(&self, format: DateFormat) -> Result<String, LuachError>;
}

impl HebrewDateExt for NaiveDate {
    fn to_hebrew(&self) -> Result<HebrewDate, LuachError> {
        crate::to_hebrew((*self).into())
    }

    fn julian_day(&self) -> Result<JulianDay, LuachError> {
        crate::julian::to_julian_day((*self).into())
    }

    fn format_hebrew(&self, format: DateFormat) -> Result<String, LuachError> {
        crate::format::format_hebrew(&self.to_hebrew()?, format, " ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HebrewMonth;

    #[test]
    fn converts_naive_dates() {
        let date = NaiveDate::from_ymd_opt(2016, 5, 6).unwrap();
        let hebrew = date.to_hebrew().unwrap();
        assert_eq!(hebrew, HebrewDate::new(5776, HebrewMonth::Nisan, 28));
        assert_eq!(date.julian_day().unwrap(), JulianDay(2_457_515));
    }

    #[test]
    fn formats_naive_dates() {
        let date = NaiveDate::from_ymd_opt(2016, 5, 6).unwrap();
        let s = date.format_hebrew(DateFormat::EnglishMonth).unwrap();
        assert_eq!(s, "28 Nisan 5776");
    }

    #[test]
    fn pre_epoch_dates_error() {
        let date = NaiveDate::from_ymd_opt(-3800, 1, 1).unwrap();
        assert!(matches!(
            date.to_hebrew(),
            Err(LuachError::OutOfRange { .. })
        ));
    }
}
