//! Timestamp parsing for the `last_update` descriptor.
//!
//! The aggregator writes dates such as `19 октября 2026, 08:17:03`, with the
//! month in Russian (genitive case). Month tokens are swapped for their
//! English names and the result goes through `chrono`.

use chrono::{NaiveDate, NaiveDateTime};

use crate::DateError;

/// Russian genitive month names and their English equivalents.
const MONTHS: [(&str, &str); 12] = [
    ("января", "January"),
    ("февраля", "February"),
    ("марта", "March"),
    ("апреля", "April"),
    ("мая", "May"),
    ("июня", "June"),
    ("июля", "July"),
    ("августа", "August"),
    ("сентября", "September"),
    ("октября", "October"),
    ("ноября", "November"),
    ("декабря", "December"),
];

/// Date-time layouts seen in the descriptor, tried in order.
const DATETIME_LAYOUTS: [&str; 8] = [
    "%d %B %Y, %H:%M:%S",
    "%d %B %Y %H:%M:%S",
    "%d %B %Y, %H:%M",
    "%d %B %Y %H:%M",
    "%H:%M:%S, %d %B %Y",
    "%H:%M:%S %d %B %Y",
    "%H:%M, %d %B %Y",
    "%H:%M %d %B %Y",
];

/// Date-only layout, read as midnight.
const DATE_LAYOUT: &str = "%d %B %Y";

fn push_word(out: &mut String, word: &mut String) {
    if word.is_empty() {
        return;
    }
    let lower = word.to_lowercase();
    match MONTHS.iter().find(|(ru, _)| *ru == lower) {
        Some((_, en)) => out.push_str(en),
        None => out.push_str(word),
    }
    word.clear();
}

/// Replaces every Russian month name in `value` with its English name.
///
/// Matching is case-insensitive and applies to whole alphabetic tokens only.
/// Tokens not in the table are left untouched.
#[must_use]
pub fn translate_months(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut word = String::new();

    for ch in value.chars() {
        if ch.is_alphabetic() {
            word.push(ch);
        } else {
            push_word(&mut out, &mut word);
            out.push(ch);
        }
    }
    push_word(&mut out, &mut word);

    out
}

/// Parses a `last_update` value.
///
/// # Errors
///
/// Returns [`DateError::Unrecognized`] if no layout matches, which is the
/// expected outcome for a month name missing from the translation table.
pub fn parse_last_update(value: &str) -> Result<NaiveDateTime, DateError> {
    let translated = translate_months(value.trim());

    DATETIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(&translated, layout).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(&translated, DATE_LAYOUT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| DateError::Unrecognized(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_translate_months() {
        assert_eq!(translate_months("19 октября 2026"), "19 October 2026");
        assert_eq!(translate_months("1 МАЯ 2024, 00:00"), "1 May 2024, 00:00");
        assert_eq!(translate_months("3 Декабря"), "3 December");
    }

    #[test]
    fn test_translate_months_whole_tokens_only() {
        // Prefix of a month name and unknown words stay as they are
        assert_eq!(translate_months("мартабря март"), "мартабря март");
        assert_eq!(translate_months("version 2.0"), "version 2.0");
    }

    #[test]
    fn test_every_month_translates() {
        for (month_no, (ru, en)) in MONTHS.iter().enumerate() {
            assert_eq!(translate_months(ru), *en);
            let parsed = parse_last_update(&format!("5 {ru} 2024, 10:20:30")).unwrap();
            assert_eq!(parsed.month() as usize, month_no + 1);
        }
    }

    #[test]
    fn test_parse_last_update() {
        let parsed = parse_last_update("19 октября 2026, 08:17:03").unwrap();
        assert_eq!(parsed.year(), 2026);
        assert_eq!(parsed.month(), 10);
        assert_eq!(parsed.day(), 19);
        assert_eq!(parsed.hour(), 8);
        assert_eq!(parsed.minute(), 17);
        assert_eq!(parsed.second(), 3);
    }

    #[test]
    fn test_parse_last_update_layouts() {
        assert!(parse_last_update("19 октября 2026 08:17:03").is_ok());
        assert!(parse_last_update("19 октября 2026, 08:17").is_ok());

        let midnight = parse_last_update("7 Января 2025").unwrap();
        assert_eq!(midnight.hour(), 0);
        assert_eq!(midnight.day(), 7);
    }

    #[test]
    fn test_parse_last_update_time_first() {
        let expected = parse_last_update("19 октября 2026, 11:56:35").unwrap();
        assert_eq!(parse_last_update("11:56:35, 19 октября 2026"), Ok(expected));
        assert_eq!(parse_last_update("11:56:35 19 октября 2026"), Ok(expected));

        let parsed = parse_last_update("11:56, 19 октября 2026").unwrap();
        assert_eq!(parsed.hour(), 11);
        assert_eq!(parsed.minute(), 56);
        assert_eq!(parsed.second(), 0);
        assert!(parse_last_update("11:56 19 октября 2026").is_ok());
    }

    #[test]
    fn test_parse_last_update_unknown_month() {
        let result = parse_last_update("19 брюмера 2026, 08:17:03");
        assert_eq!(
            result,
            Err(DateError::Unrecognized("19 брюмера 2026, 08:17:03".to_string()))
        );
    }
}
