//! Error types for partsfinder

use thiserror::Error;

/// Result type alias using PartsFinderError
pub type Result<T> = std::result::Result<T, PartsFinderError>;

/// Error type alias for convenience
pub type Error = PartsFinderError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const INVALID_INPUT: i32 = 2;
}

/// Main error type for partsfinder
#[derive(Debug, Error)]
pub enum PartsFinderError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Model contract violation: {0}")]
    ModelContract(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl PartsFinderError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => exit_codes::INVALID_INPUT,
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}
