//! Calendar dates as they flow through the timeline

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Canonical wire format for every date the pipeline emits
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a strict `YYYY-MM-DD` string
///
/// Surrounding whitespace is ignored. Anything else returns `None`.
///
/// # Examples
///
/// ```
/// use chronicle_domain::parse_iso_date;
///
/// assert!(parse_iso_date("2024-03-05").is_some());
/// assert!(parse_iso_date("March 5").is_none());
/// ```
pub fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if !has_iso_shape(trimmed) {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).ok()
}

/// Exactly four year digits, two month digits, two day digits
fn has_iso_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, b)| match idx {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// The date of a timeline entry, resolved once at ingestion
///
/// Entries coming from the LLM carry free-form strings. A string that does not
/// parse as `YYYY-MM-DD` is kept verbatim and orders before every calendar
/// date, so a malformed row never aborts consolidation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventDate {
    /// A date string that could not be parsed
    Unparsed(String),

    /// A valid calendar date
    Calendar(NaiveDate),
}

impl EventDate {
    /// Resolve a raw date string
    pub fn parse(raw: &str) -> Self {
        match parse_iso_date(raw) {
            Some(date) => EventDate::Calendar(date),
            None => EventDate::Unparsed(raw.trim().to_string()),
        }
    }

    /// The calendar date, if this entry has one
    pub fn calendar(&self) -> Option<NaiveDate> {
        match self {
            EventDate::Calendar(date) => Some(*date),
            EventDate::Unparsed(_) => None,
        }
    }

    /// Sort key: unparseable dates collapse to the minimum representable date
    pub fn sort_date(&self) -> NaiveDate {
        self.calendar().unwrap_or(NaiveDate::MIN)
    }
}

impl From<NaiveDate> for EventDate {
    fn from(date: NaiveDate) -> Self {
        EventDate::Calendar(date)
    }
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventDate::Calendar(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            EventDate::Unparsed(raw) => f.write_str(raw),
        }
    }
}

impl Serialize for EventDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EventDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(EventDate::parse(&raw))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn calendar_date() -> impl Strategy<Value = NaiveDate> {
        (1900i32..2100, 1u32..=12, 1u32..=28)
            .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    proptest! {
        /// Property: EventDate ordering agrees with calendar ordering
        #[test]
        fn test_order_matches_calendar(a in calendar_date(), b in calendar_date()) {
            prop_assert_eq!(EventDate::from(a).cmp(&EventDate::from(b)), a.cmp(&b));
        }

        /// Property: a formatted date parses back to itself
        #[test]
        fn test_display_parses_back(date in calendar_date()) {
            let rendered = EventDate::from(date).to_string();
            prop_assert_eq!(EventDate::parse(&rendered), EventDate::Calendar(date));
        }

        /// Property: anything unparseable sorts before any calendar date
        #[test]
        fn test_garbage_sorts_first(raw in "[a-z ]{1,20}", date in calendar_date()) {
            prop_assert!(EventDate::parse(&raw) < EventDate::from(date));
        }
    }
}
