//! Cross-module extraction tests

use crate::{ArticleProcessor, DateExtractor};
use chrono::{NaiveDate, NaiveDateTime};
use chronicle_domain::{Article, Provenance};
use proptest::prelude::*;

fn reference_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

#[test]
fn test_news_article_end_to_end() {
    let article = Article::new(
        "Lunar lander touches down",
        "Associated Press",
        "Fri, 24 Feb 2024 09:15:00 +0000",
        "<article><p>The lander, launched on February 15, 2024, touched down \
         on 2024-02-22 after a week in orbit.</p>\
         <p>A follow-up mission is planned for 2031-01-01.</p></article>",
    );

    let processor =
        ArticleProcessor::with_extractor(DateExtractor::new().with_reference_time(reference_time()));
    let processed = processor.process(article);

    let days: Vec<String> = processed.mentions.iter().map(|m| m.date_key()).collect();
    assert_eq!(days, ["2024-02-15", "2024-02-22", "2024-02-24"]);
    assert_eq!(processed.mentions[2].provenance, Provenance::Metadata);
    assert!(processed.mentions[..2]
        .iter()
        .all(|m| m.provenance == Provenance::Text));
}

#[test]
fn test_zoned_publication_keeps_local_day() {
    let extractor = DateExtractor::new().with_reference_time(reference_time());
    let mentions = extractor.extract("", "2024-03-01T23:30:00-08:00");
    assert_eq!(mentions[0].date_key(), "2024-03-01");
}

#[test]
fn test_extraction_is_independent_per_article() {
    let processor =
        ArticleProcessor::with_extractor(DateExtractor::new().with_reference_time(reference_time()));
    let a = Article::new("a", "X", "", "It began 2024-01-01.");
    let b = Article::new("b", "Y", "", "It began 2024-01-01 too.");
    let processed = processor.process_all(vec![a, b]);
    assert_eq!(processed[0].mentions.len(), 1);
    assert_eq!(processed[1].mentions.len(), 1);
}

proptest! {
    /// Property: no extracted mention is after the reference time
    #[test]
    fn test_no_future_mentions(
        years in proptest::collection::vec(1990i32..2040, 1..8),
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let text = years
            .iter()
            .map(|y| format!("Event on {:04}-{:02}-{:02}.", y, month, day))
            .collect::<Vec<_>>()
            .join(" ");
        let published = format!("{:04}-{:02}-{:02}", years[0], month, day);

        let now = reference_time();
        let mentions = DateExtractor::new()
            .with_reference_time(now)
            .extract(&text, &published);

        for mention in &mentions {
            prop_assert!(mention.date <= now.date());
        }
    }

    /// Property: output is strictly ascending, so one mention per day
    #[test]
    fn test_one_mention_per_day_ascending(
        days in proptest::collection::vec(1u32..=28, 0..12),
    ) {
        let text = days
            .iter()
            .map(|d| format!("2024-01-{:02}", d))
            .collect::<Vec<_>>()
            .join(" and ");
        let mentions = DateExtractor::new()
            .with_reference_time(reference_time())
            .extract(&text, "");

        for pair in mentions.windows(2) {
            prop_assert!(pair[0].date < pair[1].date);
        }
    }

    /// Property: arbitrary text never panics
    #[test]
    fn test_arbitrary_text_never_panics(text in "\\PC{0,200}", published in "\\PC{0,30}") {
        let _ = DateExtractor::new().extract(&text, &published);
    }
}
