//! Article processing: cleaning, date extraction, text assembly

use crate::clean::clean_content;
use crate::error::ExtractorError;
use crate::extractor::DateExtractor;
use chronicle_domain::{Article, ProcessedArticle};
use tracing::{debug, info, warn};

/// Turns raw articles into [`ProcessedArticle`]s
#[derive(Debug, Clone, Default)]
pub struct ArticleProcessor {
    extractor: DateExtractor,
}

impl ArticleProcessor {
    /// Create a processor using the current time as the future cutoff
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor around a configured extractor
    pub fn with_extractor(extractor: DateExtractor) -> Self {
        Self { extractor }
    }

    /// Clean one article and attach its dated mentions
    ///
    /// Dates are extracted from the cleaned body, which falls back to the
    /// description when the content is empty.
    pub fn process(&self, article: Article) -> ProcessedArticle {
        let cleaned = clean_content(article.body());
        let mentions = self.extractor.extract(&cleaned, &article.published_at);
        debug!(
            "Processed '{}' from {}: {} mentions",
            article.title,
            article.source,
            mentions.len()
        );
        ProcessedArticle::new(article, cleaned, mentions)
    }

    /// Process a batch, preserving input order
    pub fn process_all(&self, articles: Vec<Article>) -> Vec<ProcessedArticle> {
        let processed: Vec<ProcessedArticle> =
            articles.into_iter().map(|a| self.process(a)).collect();
        info!(
            "Processed {} articles, {} dated mentions",
            processed.len(),
            processed.iter().map(|a| a.mentions.len()).sum::<usize>()
        );
        processed
    }
}

/// Parse a JSON array of raw article records
///
/// Object entries with missing or null fields are defaulted. Entries that are
/// not objects at all are skipped with a warning.
pub fn parse_articles(json: &str) -> Result<Vec<Article>, ExtractorError> {
    let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let total = values.len();
    let articles: Vec<Article> = values
        .into_iter()
        .enumerate()
        .filter_map(|(idx, value)| match serde_json::from_value::<Article>(value) {
            Ok(article) => Some(article),
            Err(e) => {
                warn!("Skipping article #{}: {}", idx, e);
                None
            }
        })
        .collect();
    if articles.len() < total {
        warn!("Kept {} of {} article records", articles.len(), total);
    }
    Ok(articles)
}
