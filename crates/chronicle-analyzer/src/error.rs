//! Error types for the analysis path

use std::time::Duration;
use thiserror::Error;

/// Reasons the LLM path produced nothing usable
///
/// None of these reach the pipeline's caller: the analyzer logs them and
/// switches to the fallback summarizer.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The provider returned an error
    #[error("LLM error: {0}")]
    Llm(String),

    /// The provider did not answer in time
    #[error("LLM call timed out after {0:?}")]
    Timeout(Duration),

    /// The blocking provider task panicked or was cancelled
    #[error("LLM task failed: {0}")]
    Task(String),

    /// The response held no JSON object
    #[error("No JSON object in response")]
    NoJson,

    /// The response JSON did not parse
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The response parsed but carried nothing usable
    #[error("Empty analysis")]
    Empty,
}
