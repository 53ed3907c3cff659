//! HTTP client module for making API requests to LLM providers
//!
//! This module implements the HTTP layer for the adapters, handling:
//! - Connection pooling and client management
//! - Per-call cancellation deadlines
//! - Error message extraction from provider bodies
//! - Request ID generation and correlation

pub mod client;
pub mod deadline;
pub mod error;

pub use client::HttpClient;
pub use deadline::Deadline;
pub use error::{extract_error_message, map_http_error, ErrorShape};

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use uuid::Uuid;

/// Type of API call being made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallKind {
    /// Chat completions (`messages` in, `choices` out)
    ChatCompletions,
    /// Responses (`input` in, `output` items out)
    Responses,
}

impl CallKind {
    /// Get the endpoint path for this call kind
    pub fn endpoint(&self) -> &'static str {
        match self {
            CallKind::ChatCompletions => "/chat/completions",
            CallKind::Responses => "/responses",
        }
    }
}

/// Options for an HTTP request
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// Type of API call
    pub call_kind: CallKind,

    /// Unique request ID for correlation
    pub request_id: Uuid,

    /// Time allowed before the call is cancelled
    pub timeout: Duration,

    /// Name of the setting that configured `timeout`, reported on expiry
    pub timeout_setting: String,
}

impl RequestOptions {
    /// Create new request options with a generated request ID
    pub fn new(call_kind: CallKind) -> Self {
        Self {
            call_kind,
            request_id: Uuid::new_v4(),
            timeout: Duration::from_secs(45),
            timeout_setting: "timeout".to_string(),
        }
    }

    /// Full URL of this call's endpoint under `base_url`
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.call_kind.endpoint())
    }

    /// Set the timeout for this request
    pub fn with_timeout(mut self, timeout: Duration, setting: impl Into<String>) -> Self {
        self.timeout = timeout;
        self.timeout_setting = setting.into();
        self
    }
}

/// What came back from the provider, before any interpretation
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,

    /// Body parsed as JSON; `None` when it was not JSON
    pub body: Option<Value>,

    /// Body as received
    pub raw: String,
}

impl UpstreamReply {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
