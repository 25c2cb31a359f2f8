//! Error handling module for SplitX

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Main error type for SplitX operations
#[derive(Error, Debug)]
pub enum SplitXError {
    /// Input file not found or inaccessible
    #[error("Input file not found: {path}")]
    InputFileNotFound { path: String },

    /// Path without a usable file name
    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Domain rule violation or engine failure
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("Failed to serialize TOML config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SplitXError {
    /// Whether the error stems from user input
    pub fn is_validation(&self) -> bool {
        match self {
            SplitXError::Domain(err) => err.is_validation(),
            SplitXError::Config { .. } => true,
            _ => false,
        }
    }
}

/// Result type alias for SplitX operations
pub type SplitXResult<T> = std::result::Result<T, SplitXError>;
