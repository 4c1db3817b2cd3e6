//! Structured analysis payload produced by the LLM or the fallback

use serde::{Deserialize, Serialize};

/// One `{date, event}` row of an analysis timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Date as written, expected `YYYY-MM-DD`
    pub date: String,

    /// What happened
    pub event: String,
}

impl TimelineEntry {
    /// Create a timeline row
    pub fn new(date: impl Into<String>, event: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            event: event.into(),
        }
    }
}

/// A conflict between sources reported by the analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discrepancy {
    /// Short description of the conflict
    pub issue: String,

    /// Sources that disagree
    #[serde(default)]
    pub sources: Vec<String>,

    /// What each source says
    #[serde(default)]
    pub details: String,
}

/// Analysis of an article set
///
/// Every field may be empty; absence is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Chronological events, not necessarily sorted
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,

    /// Narrative summary
    #[serde(default)]
    pub summary: String,

    /// Key facts or milestones
    #[serde(default)]
    pub key_highlights: Vec<String>,

    /// Cross-source conflicts
    #[serde(default)]
    pub discrepancies: Vec<Discrepancy>,

    /// Facts corroborated by several sources
    #[serde(default)]
    pub verified_facts: Vec<String>,
}

impl AnalysisResult {
    /// True when the payload carries nothing usable
    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
            && self.summary.trim().is_empty()
            && self.key_highlights.is_empty()
            && self.discrepancies.is_empty()
            && self.verified_facts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_default() {
        let result: AnalysisResult = serde_json::from_str(r#"{"summary": "s"}"#).unwrap();
        assert_eq!(result.summary, "s");
        assert!(result.timeline.is_empty());
        assert!(!result.is_empty());
    }

    #[test]
    fn test_extra_keys_ignored() {
        let result: AnalysisResult =
            serde_json::from_str(r#"{"timeline": [], "confidence": 0.9}"#).unwrap();
        assert!(result.is_empty());
    }
}
