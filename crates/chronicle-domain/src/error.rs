//! Error types for the domain layer

use thiserror::Error;

/// Errors raised by domain-level operations
#[derive(Error, Debug)]
pub enum DomainError {
    /// Configuration failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration could not be read from TOML
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Configuration could not be written as TOML
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}
