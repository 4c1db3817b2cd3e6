//! Chronicle Credibility
//!
//! Deterministic credibility scoring for news sources and articles.
//!
//! The scorer provides:
//! - Source tiers by substring match against the reputable list
//! - Bias detection from clickbait phrases and exclamation marks
//! - A weighted per-article score with a clickbait penalty
//! - An aggregate report with the average authenticity
//!
//! Scores are used for display ordering and export only.
//!
//! # Examples
//!
//! ```
//! use chronicle_credibility::CredibilityScorer;
//! use chronicle_domain::AuthenticityLevel;
//!
//! let scorer = CredibilityScorer::default();
//!
//! let bbc = scorer.score_source("BBC News");
//! assert_eq!(bbc.score, 95);
//! assert!(bbc.is_reputable);
//!
//! let blog = scorer.score_source("My Cool Blog");
//! assert_eq!(blog.score, 40);
//! assert_eq!(scorer.authenticity_level(blog.score), AuthenticityLevel::Low);
//! ```

#![warn(missing_docs)]

mod bias;
mod scorer;

pub use bias::{
    detect_article_bias, detect_bias, BiasReport, BIAS_SCAN_CHARS, CLICKBAIT_THRESHOLD,
};
pub use scorer::{
    display_order, CredibilityScorer, SourceTier, BLOG_INDICATORS, CLICKBAIT_PENALTY,
    NEWS_INDICATORS,
};
