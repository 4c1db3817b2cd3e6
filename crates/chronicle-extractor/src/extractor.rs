//! Date extraction from article text and publication metadata

use crate::parser::parse_datetime;
use crate::patterns::DatePattern;
use chrono::{Local, NaiveDateTime};
use chronicle_domain::DatedMention;
use std::collections::HashSet;
use tracing::debug;

/// Characters of context kept on each side of a match
pub const CONTEXT_CHARS: usize = 50;

/// Finds calendar dates in article text
///
/// Extraction is pure: no state is shared between calls, so articles may be
/// processed in any order as long as results are gathered back in input order.
#[derive(Debug, Clone, Default)]
pub struct DateExtractor {
    reference_time: Option<NaiveDateTime>,
}

impl DateExtractor {
    /// Create an extractor that rejects dates after the current local time
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin "now" to a fixed instant
    pub fn with_reference_time(mut self, now: NaiveDateTime) -> Self {
        self.reference_time = Some(now);
        self
    }

    /// Extract dated mentions from `text` and the raw publication timestamp
    ///
    /// The result holds at most one mention per calendar day, ascending. The
    /// publication date, when it parses, claims its day first. Candidates that
    /// fail to parse or fall after "now" are dropped; this never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronicle_extractor::DateExtractor;
    ///
    /// let mentions = DateExtractor::new()
    ///     .extract("The treaty was signed on March 5, 2021.", "2021-03-06T09:00:00Z");
    /// let days: Vec<String> = mentions.iter().map(|m| m.date_key()).collect();
    /// assert_eq!(days, ["2021-03-05", "2021-03-06"]);
    /// ```
    pub fn extract(&self, text: &str, published_at: &str) -> Vec<DatedMention> {
        let now = self
            .reference_time
            .unwrap_or_else(|| Local::now().naive_local());
        let mut seen = HashSet::new();
        let mut mentions = Vec::new();

        match parse_datetime(published_at) {
            Some(published) if published <= now => {
                let mention = DatedMention::metadata(published.date());
                seen.insert(mention.date);
                mentions.push(mention);
            }
            Some(published) => debug!("Publication date {} is in the future, skipped", published),
            None if !published_at.trim().is_empty() => {
                debug!("Unparseable publication date '{}'", published_at)
            }
            None => {}
        }

        for pattern in DatePattern::ALL {
            for (start, end) in pattern.find_spans(text) {
                let raw = &text[start..end];
                let Some(parsed) = parse_datetime(raw) else {
                    debug!("Skipping unparseable candidate '{}'", raw);
                    continue;
                };
                if parsed > now {
                    debug!("Skipping future candidate '{}'", raw);
                    continue;
                }
                if !seen.insert(parsed.date()) {
                    continue;
                }
                mentions.push(DatedMention::text(
                    parsed.date(),
                    context_window(text, start, end),
                ));
            }
        }

        mentions.sort_by_key(|mention| mention.date);
        debug!("Extracted {} dated mentions", mentions.len());
        mentions
    }
}

/// Up to [`CONTEXT_CHARS`] characters either side of a byte span, trimmed
fn context_window(text: &str, start: usize, end: usize) -> &str {
    let from = text[..start]
        .char_indices()
        .rev()
        .nth(CONTEXT_CHARS - 1)
        .map(|(idx, _)| idx)
        .unwrap_or(0);
    let to = text[end..]
        .char_indices()
        .nth(CONTEXT_CHARS)
        .map(|(idx, _)| end + idx)
        .unwrap_or(text.len());
    text[from..to].trim()
}
