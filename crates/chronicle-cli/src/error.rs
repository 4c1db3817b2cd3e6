//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analysis configuration rejected by the domain layer
    #[error(transparent)]
    Domain(#[from] chronicle_domain::DomainError),

    /// Article list could not be read
    #[error(transparent)]
    Extractor(#[from] chronicle_extractor::ExtractorError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML writing error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Nothing cached under the query's key
    #[error("No cached articles for query '{0}'")]
    CacheMiss(String),

    /// The run was given zero articles
    #[error("No articles to analyze")]
    NoArticles,
}
