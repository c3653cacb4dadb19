//! Error types for the ReviewClaw domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error type.

use thiserror::Error;

/// Errors raised by a remote text-generation backend.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response from provider: {0}")]
    InvalidResponse(String),
}

/// The surface taxonomy for a single review action.
///
/// Every failure from the admission pipeline, the prompt assembler, or the
/// remote call is converted to exactly one of these before it reaches the
/// presentation layer.
#[derive(Debug, Clone, Error)]
pub enum ReviewError {
    #[error("No API key configured. Set GEMINI_API_KEY or add api_key to your config file.")]
    MissingApiKey,

    #[error("No reviewable files were selected. Pick a folder containing source files.")]
    NoFilesSelected,

    #[error("Bundled files are too large to review: {size} bytes (limit {limit} bytes)")]
    PayloadTooLarge { size: usize, limit: usize },

    #[error("The service rejected the API key: {0}")]
    AuthRejected(String),

    #[error("The service rejected the request as too large: {0}")]
    PayloadRejected(String),

    #[error("The review request failed: {0}")]
    RemoteFailure(String),

    #[error("An unknown error occurred: {0}")]
    Unknown(String),
}
