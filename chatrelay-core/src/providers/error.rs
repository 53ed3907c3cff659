//! Provider error types and handling

use crate::protocol::types::ErrorBody;
use std::time::Duration;
use thiserror::Error;

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Errors that can occur while serving a request through an adapter
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Invocation method other than POST
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Malformed or empty message list
    #[error("{0}")]
    InvalidRequest(String),

    /// Required credential missing from the process configuration
    #[error("Server misconfigured: {key} is missing")]
    Configuration { key: String },

    /// The cancellation timer fired before the upstream answered
    #[error("Request timed out after {} ms ({setting})", .after.as_millis())]
    Timeout { after: Duration, setting: String },

    /// Provider rejected or failed the call
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// Provider accepted the call but produced no usable text
    #[error("{provider} returned empty content")]
    EmptyContent { provider: String },

    /// Network or connection error
    #[error("Network error: {0}")]
    Network(String),

    /// Response parsing error
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ProviderError {
    /// HTTP status the caller should see for this failure
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MethodNotAllowed => 405,
            Self::InvalidRequest(_) => 400,
            Self::Upstream { status, .. } => *status,
            Self::Configuration { .. }
            | Self::Timeout { .. }
            | Self::EmptyContent { .. }
            | Self::Network(_)
            | Self::Parse(_) => 500,
        }
    }

    /// Whether the caller is at fault (no upstream call was attempted)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MethodNotAllowed | Self::InvalidRequest(_))
    }

    /// Whether this is the timeout failure
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// The `{error}` envelope for this failure
    pub fn error_body(&self) -> ErrorBody {
        ErrorBody::new(self.to_string())
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            ProviderError::Network(format!("Connection failed: {}", err))
        } else if err.is_decode() {
            ProviderError::Parse(err.to_string())
        } else {
            ProviderError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::Parse(err.to_string())
    }
}
