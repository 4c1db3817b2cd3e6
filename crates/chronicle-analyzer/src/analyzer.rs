//! Event analysis with LLM failover

use crate::error::AnalyzerError;
use crate::fallback::FallbackAnalyzer;
use crate::parser::parse_analysis_response;
use crate::prompt::{PromptBuilder, ANALYSIS_SCHEMA};
use chronicle_domain::traits::{EventAnalyzer, LlmProvider};
use chronicle_domain::{AnalysisResult, ChronicleConfig, ProcessedArticle, ProviderKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Which path produced an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    /// Parsed from the LLM response
    Llm,
    /// Built by [`FallbackAnalyzer`]
    Fallback,
}

impl AnalysisSource {
    /// Lowercase label used in exports
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisSource::Llm => "llm",
            AnalysisSource::Fallback => "fallback",
        }
    }
}

impl fmt::Display for AnalysisSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An analysis result and where it came from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisOutcome {
    /// The analysis payload
    pub result: AnalysisResult,
    /// LLM or fallback
    pub source: AnalysisSource,
}

/// Runs the LLM analysis and falls back to [`FallbackAnalyzer`] on any failure
///
/// A provider error, a timeout, an unparseable response, and an empty payload
/// all degrade to the fallback. None of them is surfaced to the caller.
pub struct Analyzer<L> {
    provider: Option<Arc<L>>,
    fallback: FallbackAnalyzer,
    timeout: Duration,
    max_articles: usize,
}

impl<L> Analyzer<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: fmt::Display,
{
    /// Create an analyzer
    ///
    /// The provider is dropped when the configuration is fallback-only.
    pub fn new(provider: Option<L>, config: &ChronicleConfig) -> Self {
        let provider = match config.provider {
            ProviderKind::Primary => provider.map(Arc::new),
            ProviderKind::FallbackOnly => None,
        };
        Self {
            provider,
            fallback: FallbackAnalyzer::new(),
            timeout: config.analysis_timeout(),
            max_articles: config.max_articles_for_llm,
        }
    }

    /// Override the per-call timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether an LLM call will be attempted
    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Analyze `articles` about `query`
    pub async fn analyze(&self, articles: &[ProcessedArticle], query: &str) -> AnalysisOutcome {
        if let Some(provider) = &self.provider {
            match self.analyze_with_llm(provider, articles, query).await {
                Ok(result) => {
                    info!(
                        "LLM analysis via '{}': {} timeline rows",
                        provider.model_name(),
                        result.timeline.len()
                    );
                    return AnalysisOutcome {
                        result,
                        source: AnalysisSource::Llm,
                    };
                }
                Err(e) => warn!("LLM analysis unavailable, using fallback: {}", e),
            }
        } else {
            debug!("No LLM provider configured, using fallback");
        }

        AnalysisOutcome {
            result: self.fallback.analyze(articles, query),
            source: AnalysisSource::Fallback,
        }
    }

    async fn analyze_with_llm(
        &self,
        provider: &Arc<L>,
        articles: &[ProcessedArticle],
        query: &str,
    ) -> Result<AnalysisResult, AnalyzerError> {
        let prompt = PromptBuilder::new(query, articles, self.max_articles).build();
        debug!("Prompt length: {} chars", prompt.len());

        let response = self.call_llm(provider, prompt).await?;
        debug!("LLM response length: {} chars", response.len());

        let result = parse_analysis_response(&response)?;
        if result.is_empty() {
            return Err(AnalyzerError::Empty);
        }
        Ok(result)
    }

    /// Call the provider on the blocking pool, bounded by the timeout
    async fn call_llm(&self, provider: &Arc<L>, prompt: String) -> Result<String, AnalyzerError> {
        let llm = Arc::clone(provider);
        let task = tokio::task::spawn_blocking(move || {
            llm.generate_structured(&prompt, ANALYSIS_SCHEMA)
                .map_err(|e| AnalyzerError::Llm(e.to_string()))
        });

        match timeout(self.timeout, task).await {
            Ok(joined) => joined.map_err(|e| AnalyzerError::Task(e.to_string()))?,
            Err(_) => Err(AnalyzerError::Timeout(self.timeout)),
        }
    }
}
