//! Hebrew calendar arithmetic: molad computation, Rosh Hashanah
//! postponements, year classification and the month walk.
//!
//! The calendar is fully determined by the 19-year Metonic leap cycle and
//! the mean lunar conjunction (molad), tracked in "parts" of 1/1080 hour.
//! Days inside a molad computation are counted from the epoch molad
//! (2d 5h 204p, the eve of 1 Tishrei AM 1); a day starts at 18:00 of the
//! civil evening before, so hour 18 of the count is civil noon.

use crate::error::LuachError;
use crate::julian::JulianDay;
use crate::types::{HebrewDate, HebrewMonth, YearType};
use smallvec::SmallVec;

/// JDN of the day before 1 Tishrei AM 1. Epoch day counts are 1-based, so
/// `HEBREW_EPOCH + elapsed_days(year)` is the JDN of that year's New Year.
pub const HEBREW_EPOCH: JulianDay = JulianDay(347_997);

/// Parts (chalakim) per hour.
const PARTS_PER_HOUR: i64 = 1080;

/// Molad of Tishrei AM 1: day 2 (Monday), 5 hours, 204 parts.
const EPOCH_MOLAD_HOURS: i64 = 5;
const EPOCH_MOLAD_PARTS: i64 = 204;

/// Mean lunation: 29 days, 12 hours, 793 parts.
const LUNATION_DAYS: i64 = 29;
const LUNATION_HOURS: i64 = 12;
const LUNATION_PARTS: i64 = 793;

/// Molad Zaken limit: 18 hours (civil noon) into the day.
const MOLAD_ZAKEN: i64 = 18 * PARTS_PER_HOUR;

/// GaTaRaD limit: 9 hours 204 parts, applied on a Tuesday of a common year.
const GATARAD: i64 = 9 * PARTS_PER_HOUR + 204;

/// BeTuTeKaPoT limit: 15 hours 589 parts, applied on a Monday following a
/// leap year.
const BETUTEKAPOT: i64 = 15 * PARTS_PER_HOUR + 589;

/// Returns true when `year` is a 13-month leap year.
///
/// Leap years sit at positions 3, 6, 8, 11, 14, 17 and 19 of each
/// 19-year Metonic cycle.
pub fn is_leap_year(year: i32) -> bool {
    (7 * i64::from(year) + 1).rem_euclid(19) < 7
}

/// Number of months in a Hebrew year.
pub fn months_in_year(year: i32) -> u8 {
    if is_leap_year(year) { 13 } else { 12 }
}

/// Months elapsed from the epoch to the start of `year`.
fn months_elapsed(year: i32) -> i64 {
    let prior = i64::from(year) - 1;
    let cycles = prior.div_euclid(19);
    let in_cycle = prior.rem_euclid(19);
    235 * cycles + 12 * in_cycle + (7 * in_cycle + 1) / 19
}

/// Epoch day count of 1 Tishrei of `year`, with the four postponement
/// rules applied. Day 1 is the epoch day itself; `day % 7 == 0` is Sunday.
fn elapsed_days(year: i32) -> i64 {
    let months = months_elapsed(year);

    // Accumulate the molad as (days, hours, parts) without overflowing:
    // fold whole hours out of the parts product first.
    let parts = EPOCH_MOLAD_PARTS + LUNATION_PARTS * (months % PARTS_PER_HOUR);
    let hours = EPOCH_MOLAD_HOURS
        + LUNATION_HOURS * months
        + LUNATION_PARTS * (months / PARTS_PER_HOUR)
        + parts / PARTS_PER_HOUR;
    let mut day = 1 + LUNATION_DAYS * months + hours / 24;
    let parts_of_day = PARTS_PER_HOUR * (hours % 24) + parts % PARTS_PER_HOUR;

    // Molad Zaken, GaTaRaD, BeTuTeKaPoT.
    if parts_of_day >= MOLAD_ZAKEN
        || (day % 7 == 2 && parts_of_day >= GATARAD && !is_leap_year(year))
        || (day % 7 == 1 && parts_of_day >= BETUTEKAPOT && is_leap_year(year - 1))
    {
        day += 1;
    }

    // New Year never falls on Sunday, Wednesday or Friday.
    if matches!(day % 7, 0 | 3 | 5) {
        day += 1;
    }

    day
}

/// Julian Day Number of 1 Tishrei of `year`.
pub fn rosh_hashanah(year: i32) -> JulianDay {
    HEBREW_EPOCH + elapsed_days(year)
}

/// Total days in Hebrew `year`.
pub fn year_days(year: i32) -> u16 {
    (elapsed_days(year + 1) - elapsed_days(year)) as u16
}

/// Classification of Hebrew `year` (form and leapness).
pub fn year_type(year: i32) -> YearType {
    // The postponement rules guarantee one of the six lawful lengths.
    YearType::from_days(year_days(year))
        .unwrap_or_else(|| unreachable!("hebrew year length outside lawful range"))
}

/// The months of `year` in civil order, Tishrei first.
pub fn months_of_year(year: i32) -> SmallVec<[HebrewMonth; 13]> {
    use HebrewMonth::*;
    let mut months: SmallVec<[HebrewMonth; 13]> =
        SmallVec::from_slice(&[Tishrei, Cheshvan, Kislev, Tevet, Shevat]);
    if is_leap_year(year) {
        months.push(AdarI);
        months.push(AdarII);
    } else {
        months.push(Adar);
    }
    months.extend_from_slice(&[Nisan, Iyar, Sivan, Tammuz, Av, Elul]);
    months
}

/// Days in `month` for a year of the given type.
///
/// Only Cheshvan and Kislev vary with the year form; every other month has
/// a fixed length.
pub fn month_days(month: HebrewMonth, year_type: YearType) -> u8 {
    use crate::types::YearForm;
    use HebrewMonth::*;
    match month {
        Tishrei | Shevat | AdarI | Nisan | Sivan | Av => 30,
        Tevet | Adar | AdarII | Iyar | Tammuz | Elul => 29,
        Cheshvan => {
            if year_type.form == YearForm::Complete {
                30
            } else {
                29
            }
        }
        Kislev => {
            if year_type.form == YearForm::Deficient {
                29
            } else {
                30
            }
        }
    }
}

impl HebrewDate {
    /// Civil ordinal of this date's month, Tishrei = 1. Nisan is 7 in a
    /// common year and 8 in a leap year.
    pub fn month_ordinal(&self) -> u8 {
        let months = months_of_year(self.year);
        months
            .iter()
            .position(|m| *m == self.month)
            .map(|i| i as u8 + 1)
            .unwrap_or(0)
    }

    /// True when this date's year has 13 months.
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }
}

/// Converts a Julian Day Number to the Hebrew date containing it.
///
/// Locates the Hebrew year by bracketing `jdn` between consecutive Rosh
/// Hashanahs, then walks the year's month table from Tishrei.
///
/// # Errors
/// Returns `OutOfRange` when `jdn` precedes 1 Tishrei AM 1.
pub fn from_julian_day(jdn: JulianDay) -> Result<HebrewDate, LuachError> {
    let first_day = HEBREW_EPOCH + 1;
    if jdn < first_day {
        return Err(LuachError::OutOfRange {
            value: jdn.value(),
            min: first_day.value(),
            max: i64::MAX,
        });
    }

    // Metonic estimate (19 years span ~6940 days), then correct by at most
    // a couple of steps.
    let elapsed = jdn - HEBREW_EPOCH;
    let mut year = (elapsed * 19 / 6940 + 1).max(1) as i32;
    while rosh_hashanah(year) > jdn {
        year -= 1;
    }
    while rosh_hashanah(year + 1) <= jdn {
        year += 1;
    }

    let kind = year_type(year);
    let mut remaining = jdn - rosh_hashanah(year);
    for month in months_of_year(year) {
        let len = i64::from(month_days(month, kind));
        if remaining < len {
            return Ok(HebrewDate::new(year, month, remaining as u8 + 1));
        }
        remaining -= len;
    }

    // The walk covers exactly `year_days(year)` days and `jdn` lies before
    // the next Rosh Hashanah.
    unreachable!("day offset exceeded hebrew year length")
}

/// Converts a Hebrew date to its Julian Day Number.
///
/// # Errors
/// Returns `InvalidDate` when the month does not occur in that year (Adar
/// in a leap year, Adar I/II in a common year) or the day exceeds the
/// month's length.
pub fn to_julian_day(date: HebrewDate) -> Result<JulianDay, LuachError> {
    let kind = year_type(date.year);
    let mut offset: i64 = 0;
    for month in months_of_year(date.year) {
        if month == date.month {
            let len = month_days(month, kind);
            if date.day == 0 || date.day > len {
                return Err(LuachError::invalid_hebrew(
                    date.day,
                    date.month_ordinal(),
                    date.year,
                ));
            }
            return Ok(rosh_hashanah(date.year) + (offset + i64::from(date.day) - 1));
        }
        offset += i64::from(month_days(month, kind));
    }
    Err(LuachError::invalid_hebrew(date.day, 0, date.year))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_new_year_is_a_monday() {
        // 1 Tishrei AM 1 is JDN 347998, a Monday.
        let rh = rosh_hashanah(1);
        assert_eq!(rh, JulianDay(347_998));
        assert_eq!(rh.weekday(), 1);
    }

    #[test]
    fn known_rosh_hashanah_days() {
        // 1 Tishrei 5776 = 14 Sep 2015, 5777 = 3 Oct 2016,
        // 5784 = 16 Sep 2023, 5785 = 3 Oct 2024.
        assert_eq!(rosh_hashanah(5776), JulianDay(2_457_280));
        assert_eq!(rosh_hashanah(5777), JulianDay(2_457_665));
        let g = crate::julian::from_julian_day(rosh_hashanah(5784)).unwrap();
        assert_eq!((g.day, g.month, g.year), (16, 9, 2023));
        let g = crate::julian::from_julian_day(rosh_hashanah(5785)).unwrap();
        assert_eq!((g.day, g.month, g.year), (3, 10, 2024));
    }

    #[test]
    fn metonic_leap_positions() {
        assert!(is_leap_year(5776));
        assert!(!is_leap_year(5777));
        assert!(is_leap_year(5784));
        assert!(!is_leap_year(5785));
        let leaps: Vec<i32> = (1..=19).filter(|y| is_leap_year(*y)).collect();
        assert_eq!(leaps, vec![3, 6, 8, 11, 14, 17, 19]);
    }

    #[test]
    fn year_5776_is_complete_leap() {
        let t = year_type(5776);
        assert_eq!(t.days(), 385);
        assert!(t.leap);
    }

    #[test]
    fn month_walk_spans_the_whole_year() {
        for year in [5775, 5776, 5777, 5784, 5785] {
            let kind = year_type(year);
            let total: u16 = months_of_year(year)
                .iter()
                .map(|m| u16::from(month_days(*m, kind)))
                .sum();
            assert_eq!(total, year_days(year), "year {year}");
        }
    }

    #[test]
    fn rejects_pre_epoch_days() {
        let err = from_julian_day(JulianDay(347_000)).unwrap_err();
        assert!(matches!(err, LuachError::OutOfRange { .. }));
        assert!(from_julian_day(JulianDay(347_998)).is_ok());
    }

    #[test]
    fn rejects_months_missing_from_the_year() {
        // 5777 is common: no Adar I/II.
        let bad = HebrewDate::new(5777, HebrewMonth::AdarII, 1);
        assert!(to_julian_day(bad).is_err());
        // 5776 is leap: no plain Adar.
        let bad = HebrewDate::new(5776, HebrewMonth::Adar, 1);
        assert!(to_julian_day(bad).is_err());
        // Day 30 of a 29-day month.
        let bad = HebrewDate::new(5777, HebrewMonth::Elul, 30);
        assert!(to_julian_day(bad).is_err());
    }

    #[test]
    fn month_ordinal_counts_from_tishrei() {
        assert_eq!(HebrewDate::new(5777, HebrewMonth::Nisan, 1).month_ordinal(), 7);
        assert_eq!(HebrewDate::new(5776, HebrewMonth::Nisan, 1).month_ordinal(), 8);
        assert_eq!(HebrewDate::new(5776, HebrewMonth::AdarII, 1).month_ordinal(), 7);
        assert_eq!(HebrewDate::new(5777, HebrewMonth::Elul, 1).month_ordinal(), 12);
    }
}
