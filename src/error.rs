//! Error types for the pagewin pagination calculator.

use thiserror::Error;

/// Input validation errors raised by the checked pagination entry points
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("Invalid argument `{name}` = {value}: {reason}")]
    InvalidArgument {
        name: &'static str,
        value: usize,
        reason: String,
    },
}

/// Errors surfaced by configuration, logging and the CLI
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Pagination error: {0}")]
    Pagination(#[from] PaginationError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output error: {0}")]
    Output(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Output(err.to_string())
    }
}

impl From<toml::ser::Error> for ApiError {
    fn from(err: toml::ser::Error) -> Self {
        ApiError::Output(err.to_string())
    }
}
