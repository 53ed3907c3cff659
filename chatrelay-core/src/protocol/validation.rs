//! Inbound request gate shared by all adapters

use crate::protocol::types::{ChatRequest, Message};
use crate::providers::error::{ProviderError, ProviderResult};
use reqwest::Method;
use serde_json::Value;

const EMPTY_MESSAGES: &str = "Bad Request: messages must be a non-empty array";

/// Check the invocation method and decode the raw body.
///
/// The method is checked before the body is looked at.
pub fn validate_request(method: &Method, body: &[u8]) -> ProviderResult<ChatRequest> {
    if *method != Method::POST {
        return Err(ProviderError::MethodNotAllowed);
    }

    // An absent body is treated like `{}`
    if body.iter().all(u8::is_ascii_whitespace) {
        return parse_request(Value::Object(Default::default()));
    }

    let value: Value = serde_json::from_slice(body).map_err(|e| {
        ProviderError::InvalidRequest(format!("Bad Request: body is not valid JSON: {}", e))
    })?;

    parse_request(value)
}

/// Decode an already-parsed body into a `ChatRequest`
pub fn parse_request(body: Value) -> ProviderResult<ChatRequest> {
    let Value::Object(mut fields) = body else {
        return Err(ProviderError::InvalidRequest(EMPTY_MESSAGES.to_string()));
    };

    let raw_messages = match fields.remove("messages") {
        Some(Value::Array(items)) if !items.is_empty() => items,
        _ => return Err(ProviderError::InvalidRequest(EMPTY_MESSAGES.to_string())),
    };

    let messages = raw_messages
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<Message>(item).map_err(|e| {
                ProviderError::InvalidRequest(format!(
                    "Bad Request: messages[{}] is invalid: {}",
                    index, e
                ))
            })
        })
        .collect::<ProviderResult<Vec<_>>>()?;

    let meta = fields.remove("meta").filter(|meta| !meta.is_null());

    Ok(ChatRequest { messages, meta })
}
