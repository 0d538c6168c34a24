//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid socket address '{0}'")]
    InvalidAddress(String),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Upload limit must be between 1 KiB and 100 MiB")]
    InvalidUploadLimit,

    #[error("Upload and result directories must differ")]
    SharedStorageDirectory,

    #[error("Invalid Resend API key format")]
    InvalidResendKey,

    #[error("Invalid from email address")]
    InvalidFromEmail,

    #[error("Invalid mail API base URL")]
    InvalidApiBaseUrl,

    #[error("Unknown ranking method '{0}'")]
    InvalidRankingMethod(String),

    #[error("Delimiter must be a single ASCII character other than '\"', CR or LF")]
    InvalidDelimiter,
}
