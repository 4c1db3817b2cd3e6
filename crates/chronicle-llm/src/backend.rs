//! Provider selection from configuration

use crate::{LlmError, OllamaProvider, OpenAiProvider};
use chronicle_domain::traits::LlmProvider as LlmProviderTrait;
use chronicle_domain::{ChronicleConfig, LlmBackend, ProviderKind};
use tracing::info;

/// The HTTP provider named by a [`ChronicleConfig`]
pub enum BackendProvider {
    /// Local Ollama server
    Ollama(OllamaProvider),
    /// OpenAI-compatible API
    OpenAi(OpenAiProvider),
}

impl BackendProvider {
    /// Build the configured provider
    ///
    /// Returns `Ok(None)` for a fallback-only configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::MissingApiKey`] when the OpenAI backend is selected
    /// and its key variable is unset.
    pub fn from_config(config: &ChronicleConfig) -> Result<Option<Self>, LlmError> {
        if config.provider == ProviderKind::FallbackOnly {
            return Ok(None);
        }

        let provider = match config.backend {
            LlmBackend::Ollama => {
                let endpoint = config
                    .endpoint
                    .as_deref()
                    .unwrap_or(crate::ollama::DEFAULT_ENDPOINT);
                BackendProvider::Ollama(OllamaProvider::new(endpoint, &config.model))
            }
            LlmBackend::OpenAi => BackendProvider::OpenAi(OpenAiProvider::from_env(
                &config.api_key_env,
                config.endpoint.as_deref(),
                &config.model,
            )?),
        };
        info!("Using {} model '{}'", provider.kind(), config.model);
        Ok(Some(provider))
    }

    fn kind(&self) -> &'static str {
        match self {
            BackendProvider::Ollama(_) => "ollama",
            BackendProvider::OpenAi(_) => "openai",
        }
    }
}

impl LlmProviderTrait for BackendProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        match self {
            BackendProvider::Ollama(p) => p.generate(prompt),
            BackendProvider::OpenAi(p) => p.generate(prompt),
        }
    }

    fn generate_structured(&self, prompt: &str, schema: &str) -> Result<String, Self::Error> {
        match self {
            BackendProvider::Ollama(p) => p.generate_structured(prompt, schema),
            BackendProvider::OpenAi(p) => p.generate_structured(prompt, schema),
        }
    }

    fn model_name(&self) -> &str {
        match self {
            BackendProvider::Ollama(p) => p.model_name(),
            BackendProvider::OpenAi(p) => p.model_name(),
        }
    }
}
