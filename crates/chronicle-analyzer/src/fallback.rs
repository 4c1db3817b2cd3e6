//! Deterministic summarizer used when no LLM analysis is available

use chronicle_domain::traits::EventAnalyzer;
use chronicle_domain::{truncate_chars, AnalysisResult, ProcessedArticle, TimelineEntry};
use std::collections::HashSet;
use tracing::debug;

/// Title characters kept in a fallback timeline row
pub const FALLBACK_TITLE_CHARS: usize = 100;

/// Articles whose titles and sources feed the summary and highlights
pub const FALLBACK_SAMPLE: usize = 5;

/// Summarizer that needs nothing but the articles themselves
///
/// Produces the same shape as the LLM path. Each calendar date appears at most
/// once in the timeline, attributed to the first article that mentioned it.
/// No cross-article claims are made, so discrepancies and verified facts stay
/// empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackAnalyzer;

impl FallbackAnalyzer {
    /// Create a fallback analyzer
    pub fn new() -> Self {
        Self
    }
}

impl EventAnalyzer for FallbackAnalyzer {
    fn analyze(&self, articles: &[ProcessedArticle], query: &str) -> AnalysisResult {
        let mut seen = HashSet::new();
        let mut timeline = Vec::new();
        for article in articles {
            for mention in &article.mentions {
                let key = mention.date_key();
                if !seen.insert(key.clone()) {
                    continue;
                }
                timeline.push(TimelineEntry::new(
                    key,
                    format!(
                        "News reported by {}: {}",
                        article.source(),
                        truncate_chars(article.title(), FALLBACK_TITLE_CHARS)
                    ),
                ));
            }
        }
        // Lexical order is chronological for YYYY-MM-DD
        timeline.sort_by(|a, b| a.date.cmp(&b.date));

        let mut sources: Vec<&str> = Vec::new();
        for article in articles.iter().take(FALLBACK_SAMPLE) {
            if !sources.contains(&article.source()) {
                sources.push(article.source());
            }
        }

        let summary = format!(
            "Analysis of {} articles about '{}'. Key sources include: {}.",
            articles.len(),
            query,
            sources.join(", ")
        );

        let key_highlights = articles
            .iter()
            .take(FALLBACK_SAMPLE)
            .map(|a| a.title().to_string())
            .collect();

        debug!("Fallback analysis built {} timeline rows", timeline.len());

        AnalysisResult {
            timeline,
            summary,
            key_highlights,
            discrepancies: Vec::new(),
            verified_facts: Vec::new(),
        }
    }
}
