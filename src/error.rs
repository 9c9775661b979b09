//! Error types for mentor generation and persistence.
//!
//! Defines the error taxonomies for the major subsystems:
//! - Generation endpoint client (transport, auth, quota)
//! - Prompt gateway (response contract enforcement)
//! - Document store clients
//! - Document export
//! - Environment configuration

use thiserror::Error;

/// Errors that can occur while calling the generation endpoint.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Missing API base URL: MENTOR_API_BASE environment variable not set")]
    MissingApiBase,

    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("API error ({code}): {message}")]
    ApiError { code: u16, message: String },

    #[error("Failed to decode API response: {0}")]
    DecodeError(String),
}

/// Errors surfaced by the prompt gateway.
///
/// Every generation call either fully succeeds with a well-typed result or
/// fails with one of these. There is no retry and no partial-success mode;
/// the caller decides how to present the failure.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The endpoint call itself failed (network, auth, quota). Propagated
    /// unchanged from the client.
    #[error("Upstream generation error: {0}")]
    Upstream(#[from] LlmError),

    /// The endpoint returned no usable text. Detected before any parse.
    #[error("Generation endpoint returned an empty response")]
    EmptyResponse,

    /// The returned text could not be parsed into the task's expected JSON
    /// shape, or the parsed shape failed its contract check.
    #[error("AI returned invalid data format: {0}")]
    ContractViolation(String),

    /// The generation task was aborted before it resolved.
    #[error("Generation was cancelled")]
    Cancelled,
}

/// Errors that can occur while talking to the document store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("User ID required")]
    MissingUserId,

    #[error("Store request failed: {0}")]
    RequestFailed(String),

    #[error("Store API error ({code}): {message}")]
    ApiError { code: u16, message: String },

    #[error("Failed to decode store response: {0}")]
    DecodeError(String),
}

/// Errors that can occur while exporting document artifacts.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Invalid export file name: {0}")]
    InvalidFileName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
}
