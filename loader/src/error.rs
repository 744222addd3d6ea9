//! Error types for loading declarations and configuration.
//!
//! Provides a unified error type covering I/O, serialization, and
//! configuration validation failures.

use thiserror::Error;

/// Errors that can occur while loading or rendering.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// File extension does not map to a known format.
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Configuration failed validation (e.g., empty version).
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Convenience alias for results with [`LoaderError`].
pub type Result<T> = std::result::Result<T, LoaderError>;
