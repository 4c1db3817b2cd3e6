//! Pattern classes used to locate date candidates in body text

use regex::Regex;
use std::sync::LazyLock;

static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b").expect("valid regex"));

static MONTH_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},?\s+\d{4}\b",
    )
    .expect("valid regex")
});

static ISO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{4}-\d{2}-\d{2}\b").expect("valid regex"));

static PREPOSITIONAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:on|by|since|until|from|to)\s+[A-Z][a-z]+\s+\d{1,2},?\s+\d{4}")
        .expect("valid regex")
});

/// A class of date-shaped substrings
///
/// Classes are scanned independently and their matches pooled in the order of
/// [`DatePattern::ALL`]. Overlapping matches across classes are expected; the
/// extractor's per-day dedup resolves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePattern {
    /// `3/5/2024`, `03-05-24`
    Numeric,

    /// `March 5, 2024`
    MonthName,

    /// `2024-03-05`
    Iso,

    /// `on March 5, 2024`, `since Mar 5 2024`
    Prepositional,
}

impl DatePattern {
    /// Every class, in scan order
    pub const ALL: [DatePattern; 4] = [
        DatePattern::Numeric,
        DatePattern::MonthName,
        DatePattern::Iso,
        DatePattern::Prepositional,
    ];

    fn regex(&self) -> &'static Regex {
        match self {
            DatePattern::Numeric => &NUMERIC,
            DatePattern::MonthName => &MONTH_NAME,
            DatePattern::Iso => &ISO,
            DatePattern::Prepositional => &PREPOSITIONAL,
        }
    }

    /// Byte spans of every match in `text`, left to right
    pub fn find_spans<'t>(&self, text: &'t str) -> impl Iterator<Item = (usize, usize)> + 't {
        self.regex().find_iter(text).map(|m| (m.start(), m.end()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(pattern: DatePattern, text: &str) -> Vec<&str> {
        pattern.find_spans(text).map(|(s, e)| &text[s..e]).collect()
    }

    #[test]
    fn test_numeric() {
        assert_eq!(
            matches(DatePattern::Numeric, "on 3/5/2024 and 12-25-23"),
            vec!["3/5/2024", "12-25-23"]
        );
        assert!(matches(DatePattern::Numeric, "2024-03-05").is_empty());
    }

    #[test]
    fn test_month_name_case_insensitive() {
        assert_eq!(
            matches(DatePattern::MonthName, "since MARCH 5 2024, and July 14, 2023"),
            vec!["MARCH 5 2024", "July 14, 2023"]
        );
    }

    #[test]
    fn test_iso() {
        assert_eq!(
            matches(DatePattern::Iso, "filed 2024-03-05, amended 2024-04-01."),
            vec!["2024-03-05", "2024-04-01"]
        );
        // A timestamp's time part runs on with no word boundary
        assert!(matches(DatePattern::Iso, "filed 2024-03-05T10:00").is_empty());
    }

    #[test]
    fn test_prepositional() {
        assert_eq!(
            matches(DatePattern::Prepositional, "Talks ran until Sept 5, 2023."),
            vec!["until Sept 5, 2023"]
        );
        assert!(matches(DatePattern::Prepositional, "up to 5 2023").is_empty());
    }
}
