//! API error types for the Syve REST client.

use thiserror::Error;

/// API-specific error type for the Syve REST client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP/network error from reqwest
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with an `error` field in the body
    #[error("API error: {0}")]
    Api(String),

    /// The usage check rejected the API key
    #[error("Invalid API key: {0}")]
    InvalidApiKey(String),

    /// JSON deserialization error
    #[error("Deserialization error: {0}")]
    Deserialize(String),

    /// Invalid parameter provided
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Unexpected HTTP status code
    #[error("Unexpected status {0}: {1}")]
    UnexpectedStatus(u16, String),
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Collapsed failure returned by the fetch pipeline.
///
/// Every transport, deserialization or reshaping problem inside
/// [`fetch_ohlc`](crate::api::SyveApiClient::fetch_ohlc) maps to this one
/// kind; the cause is logged, not carried. Callers distinguish "call failed"
/// from "no data" by the result tag, never by sentinel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Something went wrong")]
pub struct FetchFailure;

/// Error response format from the API.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[serde(alias = "error")]
    pub message: Option<String>,
    /// Additional error details
    #[serde(default)]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Wrap a bare string as an error response.
    pub fn from_text(text: String) -> Self {
        Self {
            message: Some(text),
            details: None,
        }
    }

    /// Get the error message, preferring `message` over `details`.
    pub fn get_message(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.details.clone())
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}
