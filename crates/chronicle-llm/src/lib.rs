//! Chronicle LLM Provider Layer
//!
//! Pluggable LLM provider implementations for the analysis stage.
//!
//! # Architecture
//!
//! This crate provides implementations of the `LlmProvider` trait from `chronicle-domain`.
//! The analyzer treats every provider as a black box that returns text or fails;
//! failures switch the run to the deterministic fallback.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OllamaProvider`: Local Ollama API integration
//! - `OpenAiProvider`: OpenAI-compatible chat completions
//! - `BackendProvider`: whichever of the two a `ChronicleConfig` selects
//!
//! # Examples
//!
//! ```
//! use chronicle_llm::MockProvider;
//! use chronicle_domain::traits::LlmProvider;
//!
//! let provider = MockProvider::new("{\"summary\": \"ok\"}");
//! let result = provider.generate("test prompt").unwrap();
//! assert_eq!(result, "{\"summary\": \"ok\"}");
//! ```

#![warn(missing_docs)]

pub mod backend;
pub mod ollama;
pub mod openai;

use chronicle_domain::traits::LlmProvider as LlmProviderTrait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use backend::BackendProvider;
pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// No API key configured for a hosted provider
    #[error("API key not configured: {0}")]
    MissingApiKey(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Run an async provider call to completion from synchronous code
///
/// Must not be called from inside an async task; the analyzer calls providers
/// from `spawn_blocking`.
pub(crate) fn block_on<F, T>(future: F) -> Result<T, LlmError>
where
    F: std::future::Future<Output = Result<T, LlmError>>,
{
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| LlmError::Other(format!("Failed to start runtime: {}", e)))?
        .block_on(future)
}

/// Mock LLM provider for deterministic testing
///
/// This provider returns pre-configured responses without making any network calls.
///
/// # Examples
///
/// ```
/// use chronicle_llm::MockProvider;
/// use chronicle_domain::traits::LlmProvider;
///
/// // Simple fixed response
/// let provider = MockProvider::new("Fixed response");
/// assert_eq!(provider.generate("any prompt").unwrap(), "Fixed response");
///
/// // Multiple responses
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "response1");
/// assert_eq!(provider.generate("prompt1").unwrap(), "response1");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: Option<String>,
    responses: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: Some(response.into()),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a MockProvider that fails every call, like an unreachable backend
    pub fn failing() -> Self {
        Self {
            default_response: None,
            ..Self::new("")
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.insert(prompt.into(), response.into());
        }
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        self.call_count.lock().map(|count| *count).unwrap_or(0)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        if let Ok(mut count) = self.call_count.lock() {
            *count = 0;
        }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        if let Ok(mut count) = self.call_count.lock() {
            *count += 1;
        }

        let responses = self
            .responses
            .lock()
            .map_err(|e| LlmError::Other(format!("Mock lock poisoned: {}", e)))?;
        if let Some(response) = responses.get(prompt) {
            return Ok(response.clone());
        }

        self.default_response
            .clone()
            .ok_or_else(|| LlmError::Communication("Mock provider unreachable".to_string()))
    }

    fn generate_structured(&self, prompt: &str, _schema: &str) -> Result<String, Self::Error> {
        self.generate(prompt)
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.generate("any prompt");
        assert_eq!(result.unwrap(), "Test response");
    }

    #[test]
    fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("hello", "world");
        provider.add_response("foo", "bar");

        assert_eq!(provider.generate("hello").unwrap(), "world");
        assert_eq!(provider.generate("foo").unwrap(), "bar");
        assert_eq!(provider.generate("unknown").unwrap(), "Default mock response");
    }

    #[test]
    fn test_mock_provider_call_count() {
        let provider = MockProvider::new("test");
        assert_eq!(provider.call_count(), 0);

        provider.generate("prompt1").unwrap();
        provider.generate("prompt2").unwrap();
        assert_eq!(provider.call_count(), 2);

        provider.reset_call_count();
        assert_eq!(provider.call_count(), 0);
    }

    #[test]
    fn test_mock_provider_failing() {
        let provider = MockProvider::failing();
        let result = provider.generate("anything");
        assert!(matches!(result, Err(LlmError::Communication(_))));
        assert_eq!(provider.call_count(), 1);
    }

    #[test]
    fn test_mock_provider_clone_shares_count() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.generate("test").unwrap();

        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }
}
