//! Client error types

use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with an error body
    #[error("API error {status} ({code}): {message}")]
    Api {
        status: u16,
        code: ErrorCode,
        message: String,
    },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rejected locally, nothing was sent
    #[error("Validation error: {0}")]
    Validation(#[from] AppError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A newer request replaced this one before it completed
    #[error("Request superseded")]
    Superseded,

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// True when the error was produced without talking to a service
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ClientError::Validation(_) | ClientError::Config(_) | ClientError::Superseded
        )
    }

    pub fn is_superseded(&self) -> bool {
        matches!(self, ClientError::Superseded)
    }

    /// Unified error code
    pub fn code(&self) -> ErrorCode {
        match self {
            ClientError::Http(e) if e.is_timeout() => ErrorCode::TimeoutError,
            ClientError::Http(_) => ErrorCode::NetworkError,
            ClientError::Api { code, .. } => *code,
            ClientError::InvalidResponse(_) => ErrorCode::InvalidFormat,
            ClientError::Unauthorized => ErrorCode::NotAuthenticated,
            ClientError::Forbidden(_) => ErrorCode::PermissionDenied,
            ClientError::NotFound(_) => ErrorCode::NotFound,
            ClientError::Validation(e) => e.code,
            ClientError::Serialization(_) => ErrorCode::InvalidFormat,
            ClientError::Superseded => ErrorCode::RequestSuperseded,
            ClientError::Config(_) => ErrorCode::ConfigError,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
