//! Error types for the financial companion core

use thiserror::Error;

/// Result type alias for companion operations
pub type Result<T> = std::result::Result<T, CompanionError>;

#[derive(Error, Debug)]
pub enum CompanionError {

    // =============================
    // Core Pipeline Errors
    // =============================

    #[error("Chat transport error: {0}")]
    ChatTransport(String),

    /// Response arrived but did not match the expected candidate shape.
    /// Fixed reason string so malformed payloads stay distinguishable from
    /// network-level failures.
    #[error("invalid response format")]
    InvalidResponse,

    #[error("Data transport error: {0}")]
    DataTransport(String),

    #[error("Cache write error: {0}")]
    CacheWrite(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    // =============================
    // External Library Conversions
    // =============================

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
