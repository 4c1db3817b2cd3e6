//! Credibility scoring records

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Result of scoring a source name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceScore {
    /// Tier score in [0, 100]
    pub score: u8,

    /// Matched the reputable-source list
    pub is_reputable: bool,

    /// Human-readable tier explanation
    pub reason: String,

    /// The name that was scored
    pub source_name: String,
}

/// Per-article credibility
///
/// Invariant: `overall_score` is in [0, 100] even after the clickbait penalty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredibilityScore {
    /// Blended score in [0, 100]
    pub overall_score: u8,

    /// Source tier score in [0, 100]
    pub source_score: u8,

    /// `100 - bias_score`, floored at 0
    pub content_score: u8,

    /// Bias score clamped to [0, 100]
    pub bias_score: u8,

    /// Bias score exceeded the clickbait threshold
    pub is_clickbait: bool,

    /// Reasons the bias score was raised
    pub flags: Vec<String>,

    /// How the source itself scored
    pub source_details: SourceScore,
}

/// Aggregate credibility over an article set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredibilityReport {
    /// Floor of the mean overall score, 0 with no articles
    pub average_authenticity: u8,

    /// One entry per distinct source name
    pub source_scores: BTreeMap<String, SourceScore>,

    /// One entry per article, in input order
    pub article_scores: Vec<CredibilityScore>,

    /// Number of distinct sources
    pub total_sources: usize,

    /// Number of distinct sources on the reputable list
    pub reputable_sources_count: usize,
}

/// Coarse bucket for a numeric credibility score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthenticityLevel {
    /// 80 and above
    High,
    /// 60 to 79
    Medium,
    /// 40 to 59
    Low,
    /// Below 40
    #[serde(rename = "Very Low")]
    VeryLow,
}

impl AuthenticityLevel {
    /// Bucket a score
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => AuthenticityLevel::High,
            60..=79 => AuthenticityLevel::Medium,
            40..=59 => AuthenticityLevel::Low,
            _ => AuthenticityLevel::VeryLow,
        }
    }

    /// Display label
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthenticityLevel::High => "High",
            AuthenticityLevel::Medium => "Medium",
            AuthenticityLevel::Low => "Low",
            AuthenticityLevel::VeryLow => "Very Low",
        }
    }
}

impl fmt::Display for AuthenticityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
