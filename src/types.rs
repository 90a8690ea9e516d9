use serde::{Deserialize, Serialize};
use std::fmt;

/// A proleptic Gregorian calendar date, normalized to a plain
/// day/month/year triple.
///
/// Years follow astronomical numbering: year 0 exists, year -1 is 2 BCE.
/// The derived ordering is chronological (year, then month, then day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GregorianDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl GregorianDate {
    /// Builds a date from a (day, month, year) triple.
    ///
    /// The triple is not validated here; `julian::to_julian_day` rejects
    /// combinations that do not exist on the Gregorian calendar.
    pub fn new(day: u8, month: u8, year: i32) -> Self {
        Self { year, month, day }
    }
}

impl From<chrono::NaiveDate> for GregorianDate {
    fn from(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        Self {
            year: date.year(),
            month: date.month() as u8,
            day: date.day() as u8,
        }
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A month of the Hebrew calendar.
///
/// Variants are declared in civil-year order (Tishrei first) so the derived
/// ordering is chronological within a year. `Adar` is the single Adar of
/// common years; `AdarI` and `AdarII` occur only in leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HebrewMonth {
    Tishrei,
    Cheshvan,
    Kislev,
    Tevet,
    Shevat,
    Adar,
    AdarI,
    AdarII,
    Nisan,
    Iyar,
    Sivan,
    Tammuz,
    Av,
    Elul,
}

impl HebrewMonth {
    /// English transliterated month name.
    pub fn name(&self) -> &'static str {
        match self {
            HebrewMonth::Tishrei => "Tishrei",
            HebrewMonth::Cheshvan => "Cheshvan",
            HebrewMonth::Kislev => "Kislev",
            HebrewMonth::Tevet => "Tevet",
            HebrewMonth::Shevat => "Shevat",
            HebrewMonth::Adar => "Adar",
            HebrewMonth::AdarI => "Adar I",
            HebrewMonth::AdarII => "Adar II",
            HebrewMonth::Nisan => "Nisan",
            HebrewMonth::Iyar => "Iyar",
            HebrewMonth::Sivan => "Sivan",
            HebrewMonth::Tammuz => "Tammuz",
            HebrewMonth::Av => "Av",
            HebrewMonth::Elul => "Elul",
        }
    }

    /// Month name in Hebrew letters.
    pub fn hebrew_name(&self) -> &'static str {
        match self {
            HebrewMonth::Tishrei => "תשרי",
            HebrewMonth::Cheshvan => "חשוון",
            HebrewMonth::Kislev => "כסלו",
            HebrewMonth::Tevet => "טבת",
            HebrewMonth::Shevat => "שבט",
            HebrewMonth::Adar => "אדר",
            HebrewMonth::AdarI => "אדר א׳",
            HebrewMonth::AdarII => "אדר ב׳",
            HebrewMonth::Nisan => "ניסן",
            HebrewMonth::Iyar => "אייר",
            HebrewMonth::Sivan => "סיוון",
            HebrewMonth::Tammuz => "תמוז",
            HebrewMonth::Av => "אב",
            HebrewMonth::Elul => "אלול",
        }
    }
}

impl fmt::Display for HebrewMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A date on the Hebrew calendar.
///
/// Years count from the Hebrew epoch (AM 1). The derived ordering is
/// chronological because `HebrewMonth` variants follow civil-year order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HebrewDate {
    pub year: i32,
    pub month: HebrewMonth,
    pub day: u8,
}

impl HebrewDate {
    pub fn new(year: i32, month: HebrewMonth, day: u8) -> Self {
        Self { year, month, day }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> HebrewMonth {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }
}

impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month.name(), self.year)
    }
}

/// Length classification of a Hebrew year.
///
/// A deficient year shortens Kislev to 29 days, a complete year extends
/// Cheshvan to 30; regular years keep both at their default lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YearForm {
    Deficient,
    Regular,
    Complete,
}

impl fmt::Display for YearForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            YearForm::Deficient => "deficient",
            YearForm::Regular => "regular",
            YearForm::Complete => "complete",
        };
        write!(f, "{}", s)
    }
}

/// Full classification of a Hebrew year: its form crossed with whether it
/// is a 13-month leap year. Determines every month length for the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearType {
    pub form: YearForm,
    pub leap: bool,
}

impl YearType {
    /// Classifies a year from its total day count.
    ///
    /// Only six lengths are possible under the postponement rules:
    /// 353/354/355 days for common years, 383/384/385 for leap years.
    pub fn from_days(days: u16) -> Option<Self> {
        let (form, leap) = match days {
            353 => (YearForm::Deficient, false),
            354 => (YearForm::Regular, false),
            355 => (YearForm::Complete, false),
            383 => (YearForm::Deficient, true),
            384 => (YearForm::Regular, true),
            385 => (YearForm::Complete, true),
            _ => return None,
        };
        Some(Self { form, leap })
    }

    /// Total days in a year of this type.
    pub fn days(&self) -> u16 {
        let base = match self.form {
            YearForm::Deficient => 353,
            YearForm::Regular => 354,
            YearForm::Complete => 355,
        };
        if self.leap { base + 30 } else { base }
    }
}
