//! Rendering of Hebrew dates into presentation strings.
//!
//! The output format is a closed enum selected by the caller; every
//! variant renders the (day, month, year) parts and joins them with a
//! caller-chosen delimiter.

use crate::error::LuachError;
use crate::numerology;
use crate::types::HebrewDate;
use serde::{Deserialize, Serialize};

/// Hebrew punctuation for numerals: geresh after a single letter,
/// gershayim before the last letter of a longer token.
const GERESH: char = '׳';
const GERSHAYIM: char = '״';

/// Output format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateFormat {
    /// Day, civil month ordinal and year as decimal numbers.
    Numeric,
    /// Day and year as decimal numbers, English month name.
    EnglishMonth,
    /// Day and year as gematria text, Hebrew month name.
    HebrewFull,
    /// `HebrewFull` with traditional numeral punctuation.
    PresentableHebrew,
}

/// Renders `date` in the requested format, joining the parts with
/// `delimiter`.
///
/// # Errors
/// Propagates numerology failures; none occur for valid Hebrew dates.
pub fn format_hebrew(
    date: &HebrewDate,
    format: DateFormat,
    delimiter: &str,
) -> Result<String, LuachError> {
    let parts: [String; 3] = match format {
        DateFormat::Numeric => [
            date.day.to_string(),
            date.month_ordinal().to_string(),
            date.year.to_string(),
        ],
        DateFormat::EnglishMonth => [
            date.day.to_string(),
            date.month.name().to_string(),
            date.year.to_string(),
        ],
        DateFormat::HebrewFull => [
            day_text(date.day)?,
            date.month.hebrew_name().to_string(),
            numerology::to_hebrew_year_text(&date.year.to_string())?,
        ],
        DateFormat::PresentableHebrew => [
            punctuate(&day_text(date.day)?),
            date.month.hebrew_name().to_string(),
            punctuate(&numerology::to_hebrew_year_text(&date.year.to_string())?),
        ],
    };
    Ok(parts.join(delimiter))
}

/// Gematria text for a day of the month.
///
/// Days 15 and 16 use the traditional טו/טז forms instead of spelling out
/// a divine name.
fn day_text(day: u8) -> Result<String, LuachError> {
    match day {
        15 => Ok("טו".to_string()),
        16 => Ok("טז".to_string()),
        _ => numerology::to_hebrew_year_text(&day.to_string()),
    }
}

/// Inserts gershayim before the last letter of a multi-letter numeral, or
/// appends a geresh to a single letter.
fn punctuate(text: &str) -> String {
    let count = text.chars().count();
    match count {
        0 => String::new(),
        1 => {
            let mut out = text.to_string();
            out.push(GERESH);
            out
        }
        _ => {
            let mut out = String::new();
            for (i, c) in text.chars().enumerate() {
                if i == count - 1 {
                    out.push(GERSHAYIM);
                }
                out.push(c);
            }
            out
        }
    }
}
