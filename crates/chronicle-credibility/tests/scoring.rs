//! Credibility scoring scenarios and properties

use chronicle_credibility::CredibilityScorer;
use chronicle_domain::{Article, ChronicleConfig, ProcessedArticle};
use proptest::prelude::*;

fn article(title: &str, source: &str, content: &str) -> ProcessedArticle {
    ProcessedArticle::new(
        Article::new(title, source, "", content),
        content.to_string(),
        Vec::new(),
    )
}

#[test]
fn test_source_name_tiers() {
    let scorer = CredibilityScorer::default();

    let bbc = scorer.score_source("BBC News");
    assert_eq!(bbc.score, 95);
    assert!(bbc.is_reputable);
    assert_eq!(bbc.reason, "Highly reputable news source");

    let blog = scorer.score_source("My Cool Blog");
    assert_eq!(blog.score, 40);
    assert!(!blog.is_reputable);
    assert_eq!(blog.reason, "Blog or independent publication");
}

#[test]
fn test_heavy_clickbait_title() {
    let scorer = CredibilityScorer::default();
    let title = "Shocking! Amazing! Secret revealed!!!";
    let scored = scorer.score_article(&article(title, "Acme Corp", ""));

    assert_eq!(scored.bias_score, 35);
    assert!(scored.is_clickbait);
    assert!(scored
        .flags
        .iter()
        .any(|f| f == "Excessive exclamation marks"));

    // 55 * 0.7 + 65 * 0.3 = 58, less 20
    assert_eq!(scored.source_score, 55);
    assert_eq!(scored.overall_score, 38);
}

#[test]
fn test_penalty_floors_at_zero() {
    let config = ChronicleConfig {
        clickbait_words: (0..15).map(|i| format!("bait{}", i)).collect(),
        ..ChronicleConfig::default()
    };
    let scorer = CredibilityScorer::new(&config);
    let title: String = (0..15).map(|i| format!("bait{} ", i)).collect();
    let scored = scorer.score_article(&article(&title, "My Cool Blog", ""));

    assert_eq!(scored.bias_score, 100);
    assert_eq!(scored.content_score, 0);
    // round(40 * 0.7) = 28, less 20
    assert_eq!(scored.overall_score, 8);
}

proptest! {
    /// Property: every score stays within [0, 100]
    #[test]
    fn test_scores_clamped(
        source in "\\PC{0,30}",
        title in "[A-Za-z!' ]{0,80}",
        content in "[A-Za-z!' ]{0,300}",
        words in proptest::collection::vec("[a-z]{1,6}", 1..30),
    ) {
        let config = ChronicleConfig {
            clickbait_words: words,
            ..ChronicleConfig::default()
        };
        let scored = CredibilityScorer::new(&config).score_article(&article(&title, &source, &content));

        prop_assert!(scored.overall_score <= 100);
        prop_assert!(scored.content_score <= 100);
        prop_assert!(scored.bias_score <= 100);
        prop_assert_eq!(scored.content_score, 100 - scored.bias_score);
    }
}
