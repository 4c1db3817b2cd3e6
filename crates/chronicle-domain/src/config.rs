//! Explicit configuration passed to every pipeline component

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which analysis path to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderKind {
    /// Ask the configured LLM backend, falling back on failure
    Primary,
    /// Never call an LLM
    FallbackOnly,
}

impl Default for ProviderKind {
    fn default() -> Self {
        ProviderKind::Primary
    }
}

/// HTTP adapter realizing [`ProviderKind::Primary`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmBackend {
    /// Local Ollama server
    Ollama,
    /// OpenAI-compatible chat completions API
    OpenAi,
}

impl Default for LlmBackend {
    fn default() -> Self {
        LlmBackend::Ollama
    }
}

/// Reputable news organizations, matched as lowercase substrings
pub const DEFAULT_REPUTABLE_SOURCES: &[&str] = &[
    "bbc",
    "reuters",
    "ap news",
    "associated press",
    "the new york times",
    "the washington post",
    "the guardian",
    "cnn",
    "npr",
    "pbs",
    "al jazeera",
    "bloomberg",
    "wall street journal",
    "forbes",
    "time",
    "newsweek",
];

/// Subset of the reputable list scored highest
pub const DEFAULT_TOP_TIER_SOURCES: &[&str] = &[
    "bbc",
    "reuters",
    "associated press",
    "ap news",
    "the new york times",
];

/// Words that make an interior timeline event a milestone
pub const DEFAULT_MILESTONE_KEYWORDS: &[&str] = &[
    "launch",
    "announced",
    "completed",
    "achieved",
    "landed",
    "successful",
    "failed",
    "breakthrough",
    "discovery",
    "summit",
    "signed",
    "released",
];

/// Phrases that raise an article's bias score
pub const DEFAULT_CLICKBAIT_WORDS: &[&str] = &[
    "shocking",
    "amazing",
    "you won't believe",
    "secret",
    "exposed",
];

/// Configuration for a Chronicle analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChronicleConfig {
    /// Primary (LLM with failover) or fallback-only
    pub provider: ProviderKind,

    /// Backend used when `provider` is primary
    pub backend: LlmBackend,

    /// Model name passed to the backend
    pub model: String,

    /// Base URL override for the backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Environment variable holding the API key (OpenAI backend)
    pub api_key_env: String,

    /// Maximum time for a single LLM call (seconds)
    pub analysis_timeout_secs: u64,

    /// Articles included in the LLM prompt
    pub max_articles_for_llm: usize,

    /// Lowercase reputable source names
    pub reputable_sources: Vec<String>,

    /// Reputable sources scored highest
    pub top_tier_sources: Vec<String>,

    /// Keywords that mark interior events as milestones
    pub milestone_keywords: Vec<String>,

    /// Clickbait phrases for bias detection
    pub clickbait_words: Vec<String>,
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for ChronicleConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Primary,
            backend: LlmBackend::Ollama,
            model: "llama3".to_string(),
            endpoint: None,
            api_key_env: "OPENAI_API_KEY".to_string(),
            analysis_timeout_secs: 120,
            max_articles_for_llm: 10,
            reputable_sources: owned(DEFAULT_REPUTABLE_SOURCES),
            top_tier_sources: owned(DEFAULT_TOP_TIER_SOURCES),
            milestone_keywords: owned(DEFAULT_MILESTONE_KEYWORDS),
            clickbait_words: owned(DEFAULT_CLICKBAIT_WORDS),
        }
    }
}

impl ChronicleConfig {
    /// Offline preset: never calls an LLM
    pub fn offline() -> Self {
        Self {
            provider: ProviderKind::FallbackOnly,
            ..Self::default()
        }
    }

    /// Get the analysis timeout as a Duration
    pub fn analysis_timeout(&self) -> Duration {
        Duration::from_secs(self.analysis_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.analysis_timeout_secs == 0 {
            return Err(DomainError::Config(
                "analysis_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.max_articles_for_llm == 0 {
            return Err(DomainError::Config(
                "max_articles_for_llm must be greater than 0".to_string(),
            ));
        }
        if self.provider == ProviderKind::Primary && self.model.trim().is_empty() {
            return Err(DomainError::Config("model must not be empty".to_string()));
        }
        for (name, list) in [
            ("reputable_sources", &self.reputable_sources),
            ("milestone_keywords", &self.milestone_keywords),
            ("clickbait_words", &self.clickbait_words),
        ] {
            if list.iter().all(|entry| entry.trim().is_empty()) {
                return Err(DomainError::Config(format!("{} must not be empty", name)));
            }
        }
        let reputable: Vec<String> = self
            .reputable_sources
            .iter()
            .map(|s| s.to_lowercase())
            .collect();
        if let Some(stray) = self
            .top_tier_sources
            .iter()
            .find(|s| !reputable.contains(&s.to_lowercase()))
        {
            return Err(DomainError::Config(format!(
                "top tier source '{}' is not in reputable_sources",
                stray
            )));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, DomainError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, DomainError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
