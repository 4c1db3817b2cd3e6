//! Clickbait and sensationalism signals

use chronicle_domain::{truncate_chars, ProcessedArticle};
use serde::{Deserialize, Serialize};

/// Content characters scanned for bias signals
pub const BIAS_SCAN_CHARS: usize = 1000;

/// Points added per clickbait phrase found
pub const CLICKBAIT_PHRASE_POINTS: u32 = 10;

/// Points added for excessive exclamation marks
pub const EXCLAMATION_POINTS: u32 = 5;

/// Exclamation marks tolerated before the penalty applies
pub const EXCLAMATION_LIMIT: usize = 3;

/// Bias score above which an article counts as clickbait
pub const CLICKBAIT_THRESHOLD: u32 = 15;

/// Outcome of a bias scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiasReport {
    /// Accumulated bias points, uncapped
    pub raw_score: u32,
    /// Reasons points were added
    pub flags: Vec<String>,
}

impl BiasReport {
    /// Bias score clamped to [0, 100]
    pub fn score(&self) -> u8 {
        self.raw_score.min(100) as u8
    }

    /// Whether the raw score exceeds [`CLICKBAIT_THRESHOLD`]
    pub fn is_clickbait(&self) -> bool {
        self.raw_score > CLICKBAIT_THRESHOLD
    }
}

/// Scan a title and body for clickbait phrases and exclamation marks
///
/// Only the first [`BIAS_SCAN_CHARS`] characters of the body are read. Each
/// phrase counts once however often it appears. `phrases` are expected in
/// lowercase.
pub fn detect_bias(title: &str, content: &str, phrases: &[String]) -> BiasReport {
    let content = truncate_chars(content, BIAS_SCAN_CHARS);
    let title_lower = title.to_lowercase();
    let content_lower = content.to_lowercase();

    let mut raw_score = 0;
    let mut flags = Vec::new();

    // 1. Clickbait phrases
    for phrase in phrases {
        if title_lower.contains(phrase.as_str()) || content_lower.contains(phrase.as_str()) {
            raw_score += CLICKBAIT_PHRASE_POINTS;
            flags.push(format!("Clickbait language detected: '{}'", phrase));
        }
    }

    // 2. Exclamation marks
    let exclamations = title.matches('!').count() + content.matches('!').count();
    if exclamations > EXCLAMATION_LIMIT {
        raw_score += EXCLAMATION_POINTS;
        flags.push("Excessive exclamation marks".to_string());
    }

    BiasReport { raw_score, flags }
}

/// [`detect_bias`] over an article's title and cleaned content
pub fn detect_article_bias(article: &ProcessedArticle, phrases: &[String]) -> BiasReport {
    detect_bias(article.title(), &article.cleaned_content, phrases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronicle_domain::config::DEFAULT_CLICKBAIT_WORDS;

    fn phrases() -> Vec<String> {
        DEFAULT_CLICKBAIT_WORDS.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_clean_text() {
        let report = detect_bias("Council approves budget", "The vote passed.", &phrases());
        assert_eq!(report.raw_score, 0);
        assert!(report.flags.is_empty());
        assert!(!report.is_clickbait());
    }

    #[test]
    fn test_phrase_counted_once() {
        let report = detect_bias("Shocking! Shocking!", "", &phrases());
        assert_eq!(report.raw_score, 10);
        assert_eq!(report.flags, ["Clickbait language detected: 'shocking'"]);
    }

    #[test]
    fn test_phrase_in_content() {
        let report = detect_bias("Plain", "You Won't Believe this", &phrases());
        assert_eq!(report.raw_score, 10);
    }

    #[test]
    fn test_content_scan_limited() {
        let content = format!("{} secret", "a".repeat(BIAS_SCAN_CHARS));
        assert_eq!(detect_bias("Plain", &content, &phrases()).raw_score, 0);
    }

    #[test]
    fn test_exclamation_threshold() {
        assert_eq!(detect_bias("Wow!!!", "", &phrases()).raw_score, 0);
        let report = detect_bias("Wow!!", "Yes!!", &phrases());
        assert_eq!(report.raw_score, 5);
        assert_eq!(report.flags, ["Excessive exclamation marks"]);
    }

    #[test]
    fn test_clickbait_threshold() {
        let two = detect_bias("Shocking secret", "", &phrases());
        assert_eq!(two.raw_score, 20);
        assert!(two.is_clickbait());

        let one_plus_bang = detect_bias("Amazing!!!!", "", &phrases());
        assert_eq!(one_plus_bang.raw_score, 15);
        assert!(!one_plus_bang.is_clickbait());
    }

    #[test]
    fn test_score_clamped() {
        let many: Vec<String> = (0..20).map(|i| format!("w{}", i)).collect();
        let title: String = many.join(" ");
        let report = detect_bias(&title, "", &many);
        assert_eq!(report.raw_score, 200);
        assert_eq!(report.score(), 100);
    }
}
