//! Hebrew (Jewish) calendar conversion and gematria numerals.
//!
//! Converts proleptic Gregorian dates to Hebrew calendar dates through an
//! integer Julian Day Number, built from first principles: the 19-year
//! Metonic leap cycle, molad arithmetic in 1080-part hours and the four
//! Rosh Hashanah postponement rules. A separate numerology module sums
//! gematria values and renders integers as Hebrew numeral text.
//!
//! ```
//! use luach::prelude::*;
//!
//! let date = GregorianDate::new(6, 5, 2016);
//! let hebrew = luach::to_hebrew(date).unwrap();
//! assert_eq!(hebrew.month(), HebrewMonth::Nisan);
//! assert_eq!((hebrew.day(), hebrew.year()), (28, 5776));
//! ```

pub mod calendar;
pub mod error;
pub mod extension;
pub mod format;
pub mod julian;
pub mod numerology;
pub mod types;

pub use error::LuachError;
pub use extension::HebrewDateExt;
pub use format::{format_hebrew, DateFormat};
pub use julian::JulianDay;
pub use types::{GregorianDate, HebrewDate, HebrewMonth, YearForm, YearType};

pub mod prelude {
    pub use crate::extension::HebrewDateExt;
    pub use crate::format::{format_hebrew, DateFormat};
    pub use crate::julian::JulianDay;
    pub use crate::to_hebrew;
    pub use crate::types::*;
    pub use crate::LuachError;
}

/// Converts a Gregorian date to the corresponding Hebrew date.
///
/// Composes [`julian::to_julian_day`] and [`calendar::from_julian_day`];
/// errors from either stage are propagated unchanged.
pub fn to_hebrew(date: GregorianDate) -> Result<HebrewDate, LuachError> {
    calendar::from_julian_day(julian::to_julian_day(date)?)
}

/// Converts a Hebrew date back to the corresponding Gregorian date.
pub fn to_gregorian(date: HebrewDate) -> Result<GregorianDate, LuachError> {
    julian::from_julian_day(calendar::to_julian_day(date)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_matches_component_composition() {
        let date = GregorianDate::new(6, 5, 2016);
        let jdn = julian::to_julian_day(date).unwrap();
        assert_eq!(
            to_hebrew(date).unwrap(),
            calendar::from_julian_day(jdn).unwrap()
        );
    }

    #[test]
    fn facade_propagates_component_errors() {
        assert!(matches!(
            to_hebrew(GregorianDate::new(30, 2, 2016)),
            Err(LuachError::InvalidDate { .. })
        ));
        assert!(matches!(
            to_hebrew(GregorianDate::new(1, 1, -3800)),
            Err(LuachError::OutOfRange { .. })
        ));
    }

    #[test]
    fn hebrew_round_trip() {
        let date = GregorianDate::new(14, 5, 1948);
        let hebrew = to_hebrew(date).unwrap();
        assert_eq!(hebrew, HebrewDate::new(5708, HebrewMonth::Iyar, 5));
        assert_eq!(to_gregorian(hebrew).unwrap(), date);
    }
}
