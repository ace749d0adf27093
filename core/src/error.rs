//! Error types for the ARI client.
//!
//! # Design
//! `AriError` is the one error family every operation returns. Callers that
//! only care whether a call failed match nothing; callers that care why
//! match on `Server` (5xx), `Api` (4xx) or `Transport` (no response at
//! all). Both status-driven variants carry the same `ErrorDetail`.

use serde_json::Value;
use thiserror::Error;

use crate::http::TransportError;

/// Result type alias for ARI operations.
pub type AriResult<T> = Result<T, AriError>;

/// What the server said when it rejected a request.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorDetail {
    pub status: u16,
    /// Response body exactly as received.
    pub body: String,
    /// The body decoded as JSON, when it is JSON.
    pub data: Option<Value>,
}

impl ErrorDetail {
    pub fn new(status: u16, body: &str) -> Self {
        let data = serde_json::from_str(body).ok();
        Self {
            status,
            body: body.to_string(),
            data,
        }
    }

    /// The upstream `message` field, if the body carried one.
    pub fn message(&self) -> Option<&str> {
        self.data.as_ref()?.get("message")?.as_str()
    }
}

/// Errors returned by `AriClient` operations.
#[derive(Debug, Error)]
pub enum AriError {
    /// The server answered with a 5xx status.
    #[error("ARI server error (HTTP {}): {}", .0.status, .0.body.trim())]
    Server(ErrorDetail),

    /// The server answered with a 4xx status.
    #[error("ARI request rejected (HTTP {}): {}", .0.status, .0.body.trim())]
    Api(ErrorDetail),

    /// No response was received.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A successful response claimed to be JSON but did not parse.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// Request parameters could not be encoded.
    #[error("failed to encode parameters: {0}")]
    Encode(String),

    /// The client configuration is invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl AriError {
    fn detail(&self) -> Option<&ErrorDetail> {
        match self {
            AriError::Server(detail) | AriError::Api(detail) => Some(detail),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.detail().map(|d| d.status)
    }

    pub fn body(&self) -> Option<&str> {
        self.detail().map(|d| d.body.as_str())
    }

    pub fn data(&self) -> Option<&Value> {
        self.detail()?.data.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.detail()?.message()
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self, AriError::Server(_))
    }

    pub fn is_api_error(&self) -> bool {
        matches!(self, AriError::Api(_))
    }
}
