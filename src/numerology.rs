//! Hebrew gematria: letter-value summation and numeral-text construction.
//!
//! Letter values follow the standard assignment (א=1 .. ת=400) with the
//! five final forms aliased to their base letters. Year text uses the
//! accumulator letters ת/ש/ר/ק to decompose magnitudes above 400.

use crate::error::LuachError;

/// First and last code points of the Hebrew letter block; the final forms
/// fall inside this range.
const ALEPH: char = 'א';
const TAV: char = 'ת';

/// Accumulator letters for magnitudes above 400, strictly decreasing.
const YEAR_ACCUMULATORS: [(u32, char); 4] = [(400, 'ת'), (300, 'ש'), (200, 'ר'), (100, 'ק')];

/// Gematria value of a single Hebrew letter, final forms included.
/// Returns `None` for anything outside the letter block.
pub fn letter_value(letter: char) -> Option<u32> {
    let value = match letter {
        'א' => 1,
        'ב' => 2,
        'ג' => 3,
        'ד' => 4,
        'ה' => 5,
        'ו' => 6,
        'ז' => 7,
        'ח' => 8,
        'ט' => 9,
        'י' => 10,
        'כ' | 'ך' => 20,
        'ל' => 30,
        'מ' | 'ם' => 40,
        'נ' | 'ן' => 50,
        'ס' => 60,
        'ע' => 70,
        'פ' | 'ף' => 80,
        'צ' | 'ץ' => 90,
        'ק' => 100,
        'ר' => 200,
        'ש' => 300,
        'ת' => 400,
        _ => return None,
    };
    Some(value)
}

/// Single letter whose value is exactly `magnitude`, if one exists.
fn letter_for(magnitude: u32) -> Option<char> {
    let letter = match magnitude {
        1 => 'א',
        2 => 'ב',
        3 => 'ג',
        4 => 'ד',
        5 => 'ה',
        6 => 'ו',
        7 => 'ז',
        8 => 'ח',
        9 => 'ט',
        10 => 'י',
        20 => 'כ',
        30 => 'ל',
        40 => 'מ',
        50 => 'נ',
        60 => 'ס',
        70 => 'ע',
        80 => 'פ',
        90 => 'צ',
        100 => 'ק',
        200 => 'ר',
        300 => 'ש',
        400 => 'ת',
        _ => return None,
    };
    Some(letter)
}

/// Gematria sum of `word`.
///
/// With `year_form` set, a leading ה counts as 5000 rather than 5, the
/// conventional marker for a full year in the current millennium. The rule
/// applies to the first letter only. ASCII digits contribute their literal
/// value, a fallback for mixed input.
///
/// # Errors
/// Returns `InvalidArgument` unless `word` contains at least one Hebrew
/// letter and nothing besides Hebrew letters and digits.
pub fn sum(word: &str, year_form: bool) -> Result<u32, LuachError> {
    if !word.chars().any(|c| (ALEPH..=TAV).contains(&c)) {
        return Err(LuachError::invalid_argument(
            "the string must be in hebrew with no spaces",
        ));
    }

    let mut total: u32 = 0;
    for (i, c) in word.chars().enumerate() {
        if i == 0 && c == 'ה' && year_form {
            total += 5000;
        } else if let Some(digit) = c.to_digit(10) {
            total += digit;
        } else if let Some(value) = letter_value(c) {
            total += value;
        } else {
            return Err(LuachError::invalid_argument(format!(
                "unexpected character '{c}' in hebrew word"
            )));
        }
    }
    Ok(total)
}

/// Largest magnitude the accumulator table can spell (תתר).
const MAX_MAGNITUDE: u32 = 1000;

/// Appends the letter text for one place-value magnitude.
///
/// Magnitudes up to 400 map to a single letter. Above that the
/// accumulators are subtracted greedily, largest first and repeating while
/// they fit, and the remainder is looked up directly.
fn push_magnitude(magnitude: u32, out: &mut String) -> Result<(), LuachError> {
    if magnitude == 0 {
        return Ok(());
    }
    if magnitude <= 400 {
        let letter = letter_for(magnitude).ok_or_else(|| {
            LuachError::invalid_argument(format!("no hebrew numeral for magnitude {magnitude}"))
        })?;
        out.push(letter);
        return Ok(());
    }

    let mut remaining = magnitude;
    for (threshold, letter) in YEAR_ACCUMULATORS {
        while remaining >= threshold {
            out.push(letter);
            remaining -= threshold;
        }
    }
    if remaining > 0 {
        let letter = letter_for(remaining).ok_or_else(|| {
            LuachError::invalid_argument(format!("no hebrew numeral for magnitude {magnitude}"))
        })?;
        out.push(letter);
    }
    Ok(())
}

/// Letter text for a digit string, most significant place first.
fn digits_to_text(digits: &str) -> Result<String, LuachError> {
    let count = digits.len() as u32;
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        let digit = c.to_digit(10).ok_or_else(|| {
            LuachError::invalid_argument(format!("[{digits}] isn't a number"))
        })?;
        if digit == 0 {
            continue;
        }
        let magnitude = 10u32
            .checked_pow(count - 1 - i as u32)
            .and_then(|place| digit.checked_mul(place))
            .filter(|m| *m <= MAX_MAGNITUDE)
            .ok_or(LuachError::OutOfRange {
                value: i64::from(digit) * 10i64.pow((count - 1 - i as u32).min(18)),
                min: 0,
                max: i64::from(MAX_MAGNITUDE),
            })?;
        push_magnitude(magnitude, &mut out)?;
    }
    Ok(out)
}

/// Converts a decimal digit string to Hebrew year text.
///
/// A 4-digit input is treated as a full year: the thousands digit is
/// dropped and a literal ה is prepended, e.g. "5776" becomes "התשעו".
/// This shorthand is only meaningful while the millennium digit is 5; the
/// rule is deliberately not generalized to other millennia.
///
/// # Errors
/// Returns `InvalidArgument` unless the input is a non-empty string of
/// decimal digits.
pub fn to_hebrew_year_text(number: &str) -> Result<String, LuachError> {
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(LuachError::invalid_argument(format!(
            "[{number}] isn't a number"
        )));
    }

    if number.len() == 4 {
        let rest = digits_to_text(&number[1..])?;
        return Ok(format!("ה{rest}"));
    }

    digits_to_text(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_plain_words() {
        assert_eq!(sum("אבג", false).unwrap(), 6);
        assert_eq!(sum("תקעז", false).unwrap(), 577);
        // Final forms alias their base letters.
        assert_eq!(sum("ם", false).unwrap(), sum("מ", false).unwrap());
    }

    #[test]
    fn leading_he_counts_five_thousand_in_year_form() {
        assert_eq!(sum("התשעו", true).unwrap(), 5776);
        assert_eq!(sum("התשעו", false).unwrap(), 781);
        // Only position 0 gets the rule.
        assert_ne!(sum("הא", true).unwrap(), sum("אה", true).unwrap());
        assert_eq!(sum("הא", true).unwrap(), 5001);
        assert_eq!(sum("אה", true).unwrap(), 6);
    }

    #[test]
    fn digits_inside_a_word_keep_their_value() {
        assert_eq!(sum("א3", false).unwrap(), 4);
    }

    #[test]
    fn sum_rejects_non_hebrew_input() {
        assert!(matches!(
            sum("abc", false),
            Err(LuachError::InvalidArgument { .. })
        ));
        assert!(sum("123", false).is_err());
        assert!(sum("", false).is_err());
        assert!(sum("אב ג", false).is_err());
    }

    #[test]
    fn year_text_for_three_digit_years() {
        assert_eq!(to_hebrew_year_text("577").unwrap(), "תקעז");
        assert_eq!(to_hebrew_year_text("777").unwrap(), "תשעז");
        assert_eq!(to_hebrew_year_text("776").unwrap(), "תשעו");
    }

    #[test]
    fn four_digit_years_get_the_he_prefix() {
        assert_eq!(to_hebrew_year_text("5776").unwrap(), "התשעו");
        let full = to_hebrew_year_text("5777").unwrap();
        let rest = to_hebrew_year_text("777").unwrap();
        assert_eq!(full, format!("ה{rest}"));
    }

    #[test]
    fn zero_digits_contribute_nothing() {
        assert_eq!(to_hebrew_year_text("705").unwrap(), "תשה");
        assert_eq!(to_hebrew_year_text("100").unwrap(), "ק");
        assert_eq!(to_hebrew_year_text("0").unwrap(), "");
    }

    #[test]
    fn large_magnitudes_use_accumulators() {
        assert_eq!(to_hebrew_year_text("500").unwrap(), "תק");
        assert_eq!(to_hebrew_year_text("600").unwrap(), "תר");
        assert_eq!(to_hebrew_year_text("800").unwrap(), "תת");
        assert_eq!(to_hebrew_year_text("900").unwrap(), "תתק");
    }

    #[test]
    fn year_text_rejects_non_digits() {
        assert!(matches!(
            to_hebrew_year_text("12a"),
            Err(LuachError::InvalidArgument { .. })
        ));
        assert!(to_hebrew_year_text("").is_err());
        assert!(to_hebrew_year_text("תקעז").is_err());
    }

    #[test]
    fn year_text_sums_back_to_its_value() {
        for n in [5u32, 15, 48, 577, 708, 776, 999] {
            let text = to_hebrew_year_text(&n.to_string()).unwrap();
            assert_eq!(sum(&text, false).unwrap(), n, "{n}");
        }
        assert_eq!(sum(&to_hebrew_year_text("5776").unwrap(), true).unwrap(), 5776);
    }
}
