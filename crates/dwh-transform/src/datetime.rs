//! Tolerant date parsing and the decodable date surrogate key.
//!
//! Order dates arrive in whatever format the exporting system chose, so
//! parsing walks a ladder of known formats. The surrogate key is the date as
//! an eight-digit `YYYYMMDD` integer: computable from any order's date string
//! without a dimension lookup, which the fact assembler relies on.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Date key substituted when an order date cannot be parsed at all.
pub const SENTINEL_DATE_KEY: i64 = 19_000_101;

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%d-%b-%Y",
    "%d %b %Y",
    "%B %d, %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
];

/// Parses a date string under a mixed-format policy.
///
/// Datetime forms are accepted and truncated to the date. Ambiguous
/// slash-separated values resolve month-first, matching the dominant source
/// system. Returns `None` for blank or unparseable input.
pub fn parse_date_flexible(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt.date());
        }
    }
    None
}

/// Formats a date as its `YYYYMMDD` surrogate key.
pub fn date_key(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day())
}

/// English month name ("January" .. "December").
pub fn month_name(date: NaiveDate) -> String {
    date.format("%B").to_string()
}

/// Calendar quarter, 1 through 4.
pub fn quarter(date: NaiveDate) -> u32 {
    (date.month() - 1) / 3 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equivalent_dates_share_one_key() {
        let variants = [
            "1996-07-04",
            "1996/07/04",
            "07/04/1996",
            "4-Jul-1996",
            "1996-07-04 00:00:00",
            "July 4, 1996",
        ];
        for value in variants {
            let date = parse_date_flexible(value).unwrap_or_else(|| panic!("parse {value}"));
            assert_eq!(date_key(date), 19_960_704, "variant {value}");
        }
    }

    #[test]
    fn unparseable_and_blank_are_none() {
        assert_eq!(parse_date_flexible(""), None);
        assert_eq!(parse_date_flexible("   "), None);
        assert_eq!(parse_date_flexible("not a date"), None);
        assert_eq!(parse_date_flexible("1996-13-40"), None);
    }

    #[test]
    fn derived_parts() {
        let date = NaiveDate::from_ymd_opt(2024, 11, 7).unwrap();
        assert_eq!(date_key(date), 20_241_107);
        assert_eq!(month_name(date), "November");
        assert_eq!(quarter(date), 4);
        assert_eq!(quarter(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()), 1);
        assert_eq!(quarter(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()), 2);
    }
}
