//! Error types for article ingestion

use thiserror::Error;

/// Errors raised while reading an article list
///
/// Date extraction itself never fails; only a payload that is not a JSON
/// array at all is rejected.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The payload is not a JSON array
    #[error("Article list is not a JSON array: {0}")]
    InvalidArticleList(#[from] serde_json::Error),
}
