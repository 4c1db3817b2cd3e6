//! Source and article credibility scoring

use crate::bias::detect_article_bias;
use chronicle_domain::{
    AuthenticityLevel, ChronicleConfig, CredibilityReport, CredibilityScore, ProcessedArticle,
    SourceScore,
};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Words suggesting a news organization outside the reputable list
pub const NEWS_INDICATORS: &[&str] = &["news", "times", "post", "tribune"];

/// Words suggesting a blog platform
pub const BLOG_INDICATORS: &[&str] = &["blog", "medium", "substack"];

/// Penalty subtracted from clickbait articles
pub const CLICKBAIT_PENALTY: u8 = 20;

/// Weight of the source score in the overall score, in tenths
pub const SOURCE_WEIGHT_TENTHS: u32 = 7;

/// Weight of the content score in the overall score, in tenths
pub const CONTENT_WEIGHT_TENTHS: u32 = 3;

/// Tier a source name falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceTier {
    /// Top-tier reputable source
    TopTier,
    /// Other reputable source
    Reputable,
    /// Looks like a news organization
    NewsLike,
    /// Looks like a blog
    Blog,
    /// Nothing recognized
    Unknown,
}

impl SourceTier {
    /// Score for this tier
    pub fn score(&self) -> u8 {
        match self {
            SourceTier::TopTier => 95,
            SourceTier::Reputable => 88,
            SourceTier::NewsLike => 70,
            SourceTier::Blog => 40,
            SourceTier::Unknown => 55,
        }
    }

    /// Human-readable explanation
    pub fn reason(&self) -> &'static str {
        match self {
            SourceTier::TopTier => "Highly reputable news source",
            SourceTier::Reputable => "Known reputable news source",
            SourceTier::NewsLike => "Appears to be a news organization",
            SourceTier::Blog => "Blog or independent publication",
            SourceTier::Unknown => "Unknown source",
        }
    }

    /// Whether this tier is on the reputable list
    pub fn is_reputable(&self) -> bool {
        matches!(self, SourceTier::TopTier | SourceTier::Reputable)
    }
}

/// Scores sources and articles for credibility
///
/// Scoring is pure arithmetic over the configured word lists; it never feeds
/// back into the timeline.
#[derive(Debug, Clone)]
pub struct CredibilityScorer {
    reputable_sources: Vec<String>,
    top_tier_sources: Vec<String>,
    clickbait_words: Vec<String>,
}

impl Default for CredibilityScorer {
    fn default() -> Self {
        Self::new(&ChronicleConfig::default())
    }
}

fn lowercase_all(list: &[String]) -> Vec<String> {
    list.iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

impl CredibilityScorer {
    /// Create a scorer from the configured word lists
    pub fn new(config: &ChronicleConfig) -> Self {
        Self {
            reputable_sources: lowercase_all(&config.reputable_sources),
            top_tier_sources: lowercase_all(&config.top_tier_sources),
            clickbait_words: lowercase_all(&config.clickbait_words),
        }
    }

    /// Classify a source name by case-insensitive substring match
    pub fn classify_source(&self, name: &str) -> SourceTier {
        let lower = name.to_lowercase();
        let contains_any = |list: &[String]| list.iter().any(|entry| lower.contains(entry.as_str()));
        let contains_word = |list: &[&str]| list.iter().any(|entry| lower.contains(entry));

        if contains_any(&self.reputable_sources) {
            if contains_any(&self.top_tier_sources) {
                SourceTier::TopTier
            } else {
                SourceTier::Reputable
            }
        } else if contains_word(NEWS_INDICATORS) {
            SourceTier::NewsLike
        } else if contains_word(BLOG_INDICATORS) {
            SourceTier::Blog
        } else {
            SourceTier::Unknown
        }
    }

    /// Score a source name
    pub fn score_source(&self, name: &str) -> SourceScore {
        let tier = self.classify_source(name);
        SourceScore {
            score: tier.score(),
            is_reputable: tier.is_reputable(),
            reason: tier.reason().to_string(),
            source_name: name.to_string(),
        }
    }

    /// Score one article
    ///
    /// `overall = source * 0.7 + content * 0.3` rounded half to even, less
    /// [`CLICKBAIT_PENALTY`] for clickbait, kept within [0, 100].
    pub fn score_article(&self, article: &ProcessedArticle) -> CredibilityScore {
        let source_details = self.score_source(article.source());
        let bias = detect_article_bias(article, &self.clickbait_words);

        let bias_score = bias.score();
        let content_score = 100 - bias_score;
        let blended = blend_tenths(
            u32::from(source_details.score) * SOURCE_WEIGHT_TENTHS
                + u32::from(content_score) * CONTENT_WEIGHT_TENTHS,
        );
        let mut overall_score = blended.min(100) as u8;

        let is_clickbait = bias.is_clickbait();
        if is_clickbait {
            overall_score = overall_score.saturating_sub(CLICKBAIT_PENALTY);
        }

        debug!(
            "Scored '{}' ({}): overall {}, bias {}",
            article.title(),
            article.source(),
            overall_score,
            bias_score
        );

        CredibilityScore {
            overall_score: overall_score.min(100),
            source_score: source_details.score,
            content_score,
            bias_score,
            is_clickbait,
            flags: bias.flags,
            source_details,
        }
    }

    /// Score every article and aggregate per source
    pub fn score_all(&self, articles: &[ProcessedArticle]) -> CredibilityReport {
        let mut source_scores = BTreeMap::new();
        let mut article_scores = Vec::with_capacity(articles.len());

        for article in articles {
            source_scores
                .entry(article.source().to_string())
                .or_insert_with(|| self.score_source(article.source()));
            article_scores.push(self.score_article(article));
        }

        let average_authenticity = if article_scores.is_empty() {
            0
        } else {
            let total: usize = article_scores.iter().map(|s| s.overall_score as usize).sum();
            (total / article_scores.len()) as u8
        };

        let reputable_sources_count = source_scores.values().filter(|s| s.is_reputable).count();

        info!(
            "Scored {} articles from {} sources, average authenticity {}",
            article_scores.len(),
            source_scores.len(),
            average_authenticity
        );

        CredibilityReport {
            average_authenticity,
            total_sources: source_scores.len(),
            reputable_sources_count,
            source_scores,
            article_scores,
        }
    }

    /// Bucket a score
    pub fn authenticity_level(&self, score: u8) -> AuthenticityLevel {
        AuthenticityLevel::from_score(score)
    }
}

/// Round a value in tenths to the nearest integer, ties to even
fn blend_tenths(tenths: u32) -> u32 {
    let (whole, frac) = (tenths / 10, tenths % 10);
    if frac > 5 || (frac == 5 && whole % 2 == 1) {
        whole + 1
    } else {
        whole
    }
}

/// Article indices ordered by overall score, highest first
///
/// Ties keep input order.
pub fn display_order(scores: &[CredibilityScore]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].overall_score.cmp(&scores[a].overall_score));
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronicle_domain::Article;

    fn article(title: &str, source: &str, content: &str) -> ProcessedArticle {
        ProcessedArticle::new(
            Article::new(title, source, "", content),
            content.to_string(),
            Vec::new(),
        )
    }

    #[test]
    fn test_source_tiers() {
        let scorer = CredibilityScorer::default();
        let cases = [
            ("Reuters", 95, true),
            ("The Guardian", 88, true),
            ("Springfield Tribune", 70, false),
            ("Daily Post", 70, false),
            ("Medium", 40, false),
            ("Acme Corp", 55, false),
            ("", 55, false),
        ];
        for (name, score, reputable) in cases {
            let result = scorer.score_source(name);
            assert_eq!(result.score, score, "{}", name);
            assert_eq!(result.is_reputable, reputable, "{}", name);
            assert_eq!(result.source_name, name);
        }
    }

    #[test]
    fn test_news_indicator_beats_blog_indicator() {
        let scorer = CredibilityScorer::default();
        assert_eq!(scorer.classify_source("News Blog"), SourceTier::NewsLike);
    }

    #[test]
    fn test_reputable_substring_is_case_insensitive() {
        let scorer = CredibilityScorer::default();
        assert_eq!(scorer.classify_source("CNN International"), SourceTier::Reputable);
        assert_eq!(scorer.classify_source("reuters.com"), SourceTier::TopTier);
    }

    #[test]
    fn test_clean_article_score() {
        let scorer = CredibilityScorer::default();
        let score = scorer.score_article(&article("Council votes", "Reuters", "Vote held."));
        // 95 * 0.7 + 100 * 0.3 = 96.5, ties go to even
        assert_eq!(score.overall_score, 96);
        assert_eq!(score.content_score, 100);
        assert!(!score.is_clickbait);
    }

    #[test]
    fn test_blend_ties_round_to_even() {
        assert_eq!(blend_tenths(965), 96);
        assert_eq!(blend_tenths(595), 60);
        assert_eq!(blend_tenths(964), 96);
        assert_eq!(blend_tenths(966), 97);
        assert_eq!(blend_tenths(1000), 100);
    }

    #[test]
    fn test_clean_top_tier_article() {
        let scorer = CredibilityScorer::default();
        let score = scorer.score_article(&article("Council votes", "BBC News", "Vote held."));
        assert_eq!(score.overall_score, 96);
    }

    #[test]
    fn test_clickbait_penalty() {
        let scorer = CredibilityScorer::default();
        let score = scorer.score_article(&article("Shocking secret exposed", "Acme Corp", ""));
        // bias 30 → 55 * 0.7 + 70 * 0.3 = 59.5 → 60 - 20
        assert_eq!(score.bias_score, 30);
        assert!(score.is_clickbait);
        assert_eq!(score.overall_score, 40);
        assert_eq!(score.flags.len(), 3);
    }

    #[test]
    fn test_score_all_aggregates() {
        let scorer = CredibilityScorer::default();
        let report = scorer.score_all(&[
            article("a", "BBC News", ""),
            article("b", "BBC News", ""),
            article("c", "My Cool Blog", ""),
        ]);
        assert_eq!(report.total_sources, 2);
        assert_eq!(report.reputable_sources_count, 1);
        assert_eq!(report.article_scores.len(), 3);
        // 96, 96, round(40*0.7 + 30) = 58 → floor(250 / 3)
        assert_eq!(report.average_authenticity, 83);
    }

    #[test]
    fn test_score_all_empty() {
        let report = CredibilityScorer::default().score_all(&[]);
        assert_eq!(report.average_authenticity, 0);
        assert_eq!(report.total_sources, 0);
    }

    #[test]
    fn test_display_order_stable() {
        let scorer = CredibilityScorer::default();
        let scores: Vec<_> = [("x", "Acme"), ("y", "Reuters"), ("z", "Acme")]
            .iter()
            .map(|(t, s)| scorer.score_article(&article(t, s, "")))
            .collect();
        assert_eq!(display_order(&scores), [1, 0, 2]);
    }

    #[test]
    fn test_custom_lists() {
        let config = ChronicleConfig {
            reputable_sources: vec!["Daily Planet".to_string()],
            top_tier_sources: vec![],
            ..ChronicleConfig::default()
        };
        let scorer = CredibilityScorer::new(&config);
        assert_eq!(scorer.score_source("The Daily Planet").score, 88);
        assert_eq!(scorer.score_source("BBC").score, 55);
    }
}
