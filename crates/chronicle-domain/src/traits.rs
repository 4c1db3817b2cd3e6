//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the pipeline core and its
//! collaborators. Implementations live in other crates.

use crate::{AnalysisResult, ProcessedArticle};

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (chronicle-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate text completion
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;

    /// Generate with structured output (if supported)
    fn generate_structured(&self, prompt: &str, schema: &str) -> Result<String, Self::Error>;

    /// Name of the model behind this provider
    fn model_name(&self) -> &str {
        "llm"
    }
}

/// Trait for turning an article set into an [`AnalysisResult`]
///
/// Implemented by the application layer (chronicle-analyzer)
pub trait EventAnalyzer {
    /// Summarize `articles` about `query`
    fn analyze(&self, articles: &[ProcessedArticle], query: &str) -> AnalysisResult;
}
