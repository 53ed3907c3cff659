//! HTTP error mapping utilities

use crate::providers::error::ProviderError;
use crate::providers::lenient;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

/// Which fields a provider may use to describe a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorShape {
    /// `error.message`, then a top-level `message`
    NestedOrTopLevel,
    /// `error.message` only
    NestedOnly,
}

/// Error envelope, decoded leniently
#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    #[serde(default, deserialize_with = "lenient::object")]
    error: Option<ErrorDetail>,

    #[serde(default, deserialize_with = "lenient::text")]
    message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorDetail {
    #[serde(default, deserialize_with = "lenient::text")]
    message: Option<String>,
}

/// Map a non-success status and its (possibly unparseable) body to an
/// `Upstream` error that carries the original status.
pub fn map_http_error(
    status: StatusCode,
    body: Option<&Value>,
    raw: &str,
    shape: ErrorShape,
) -> ProviderError {
    ProviderError::Upstream {
        status: status.as_u16(),
        message: extract_error_message(status, body, raw, shape),
    }
}

/// Best-effort human readable message.
///
/// Tries the structured fields allowed by `shape`, then the serialized body,
/// then the raw text, then `HTTP {status}`.
pub fn extract_error_message(
    status: StatusCode,
    body: Option<&Value>,
    raw: &str,
    shape: ErrorShape,
) -> String {
    let envelope = body
        .and_then(|b| serde_json::from_value::<ErrorEnvelope>(b.clone()).ok())
        .unwrap_or_default();

    let nested = envelope.error.and_then(|e| e.message);
    let top_level = match shape {
        ErrorShape::NestedOrTopLevel => envelope.message,
        ErrorShape::NestedOnly => None,
    };

    nested
        .into_iter()
        .chain(top_level)
        .find(|m| !m.is_empty())
        .or_else(|| body.and_then(|b| serde_json::to_string(b).ok()))
        .or_else(|| Some(raw.trim().to_string()).filter(|r| !r.is_empty()))
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}
