//! Format-tolerant date parsing
//!
//! Accepts the formats news feeds and article bodies actually use: RFC 3339
//! and RFC 2822 timestamps, ISO dates, US-style numeric dates, and month-name
//! dates with an optional leading preposition. Every function returns `None`
//! rather than an error; callers pattern-match.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use chronicle_domain::parse_iso_date;
use regex::Regex;
use std::sync::LazyLock;

static NUMERIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})[/-](\d{1,2})[/-](\d{2,4})$").expect("valid regex")
});

static MONTH_FIRST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+)\.?\s+(\d{1,2})(?:st|nd|rd|th)?,?\s+(\d{4})$").expect("valid regex")
});

static DAY_FIRST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})(?:st|nd|rd|th)?\s+([A-Za-z]+)\.?,?\s+(\d{4})$").expect("valid regex")
});

static PREPOSITION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:on|by|since|until|from|to)\s+").expect("valid regex")
});

/// RFC 2822 shape with the weekday and zone set aside
static MAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[A-Za-z]+,\s*)?(\d{1,2}\s+[A-Za-z]{3}\s+\d{4}\s+\d{1,2}:\d{2}(?::\d{2})?)\s+(?:[+-]\d{4}|[A-Za-z]{1,5})$",
    )
    .expect("valid regex")
});

const MAIL_FORMATS: &[&str] = &["%d %b %Y %H:%M:%S", "%d %b %Y %H:%M"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%z", "%Y-%m-%d %H:%M:%S%z"];

/// Parse a date or timestamp into a timezone-naive datetime
///
/// A zoned timestamp keeps its wall-clock reading in the zone it was written
/// in; the zone itself is dropped.
///
/// # Examples
///
/// ```
/// use chronicle_extractor::parse_datetime;
///
/// let dt = parse_datetime("2024-01-15T10:30:00+05:00").unwrap();
/// assert_eq!(dt.to_string(), "2024-01-15 10:30:00");
/// assert!(parse_datetime("next blue moon").is_none());
/// ```
pub fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let candidate = PREPOSITION_RE.replace(trimmed, "");
    let candidate = candidate.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(candidate) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(candidate) {
        return Some(dt.naive_local());
    }
    if let Some(dt) = parse_mail_lenient(candidate) {
        return Some(dt);
    }
    if !starts_with_year(candidate) {
        return parse_calendar(candidate).map(|date| date.and_time(NaiveTime::MIN));
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(candidate, format) {
            return Some(dt.naive_local());
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(candidate, format) {
            return Some(dt);
        }
    }

    parse_calendar(candidate).map(|date| date.and_time(NaiveTime::MIN))
}

/// Parse a date, discarding any time of day
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    parse_datetime(text).map(|dt| dt.date())
}

/// RFC 2822 timestamps whose weekday disagrees with the date
///
/// Feeds get the weekday wrong often enough; the date and wall-clock time win.
fn parse_mail_lenient(candidate: &str) -> Option<NaiveDateTime> {
    let caps = MAIL_RE.captures(candidate)?;
    MAIL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&caps[1], format).ok())
}

/// Guards the chrono ISO formats, whose `%Y` would accept a one-digit year
fn starts_with_year(candidate: &str) -> bool {
    let bytes = candidate.as_bytes();
    bytes.len() >= 10 && bytes[..4].iter().all(u8::is_ascii_digit) && bytes[4] == b'-'
}

fn parse_calendar(candidate: &str) -> Option<NaiveDate> {
    if let Some(date) = parse_iso_date(candidate) {
        return Some(date);
    }
    if let Some(caps) = NUMERIC_RE.captures(candidate) {
        let first: u32 = caps[1].parse().ok()?;
        let second: u32 = caps[2].parse().ok()?;
        let year = expand_year(&caps[3])?;
        // Month first unless the first field cannot be a month
        let (month, day) = if first > 12 && second <= 12 {
            (second, first)
        } else {
            (first, second)
        };
        return NaiveDate::from_ymd_opt(year, month, day);
    }
    if let Some(caps) = MONTH_FIRST_RE.captures(candidate) {
        let month = month_number(&caps[1])?;
        let day: u32 = caps[2].parse().ok()?;
        let year: i32 = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }
    if let Some(caps) = DAY_FIRST_RE.captures(candidate) {
        let day: u32 = caps[1].parse().ok()?;
        let month = month_number(&caps[2])?;
        let year: i32 = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }
    None
}

/// Two-digit years pivot at 69, like `strptime`'s `%y`
fn expand_year(raw: &str) -> Option<i32> {
    let value: i32 = raw.parse().ok()?;
    match raw.len() {
        2 if value < 69 => Some(2000 + value),
        2 => Some(1900 + value),
        4 => Some(value),
        _ => None,
    }
}

fn month_number(name: &str) -> Option<u32> {
    const MONTHS: [&str; 12] = [
        "january",
        "february",
        "march",
        "april",
        "may",
        "june",
        "july",
        "august",
        "september",
        "october",
        "november",
        "december",
    ];

    let lower = name.to_lowercase();
    if lower == "sept" {
        return Some(9);
    }
    MONTHS
        .iter()
        .position(|month| *month == lower || (lower.len() == 3 && month.starts_with(&lower)))
        .map(|idx| idx as u32 + 1)
}
