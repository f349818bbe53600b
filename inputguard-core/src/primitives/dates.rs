//! Lenient date parsing and locale-style formatting.
//!
//! License: MIT OR APACHE 2.0

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: [&str; 8] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%a %b %d %Y",
];

/// Parses the common machine and human date spellings.
///
/// RFC 3339 timestamps keep the wall-clock time written in the input. Out of
/// range calendar dates such as `2023-02-30` are rejected rather than rolled
/// over into the next month.
pub fn parse_date(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Some(parsed.naive_local());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

/// `2023-12-25` -> `12/25/2023`.
pub fn format_locale_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}
