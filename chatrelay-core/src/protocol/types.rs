//! Core protocol types for the adapter layer
//!
//! These are the provider-agnostic shapes that enter and leave an adapter:
//! - `ChatRequest` is what the caller sends
//! - `NormalizedResponse` is what every adapter returns on success
//! - `ErrorBody` is the `{error}` envelope returned on failure

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role of a message in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instructions that guide the model's behavior
    System,
    /// User input message
    User,
    /// Assistant (model) response
    Assistant,
}

/// A message in the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message sender
    pub role: MessageRole,

    /// Text content of the message
    pub content: String,
}

impl Message {
    /// Create a new message
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

/// Normalized inbound request.
///
/// `meta` is caller-defined correlation data and is never inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Conversation in order; never empty once validated
    pub messages: Vec<Message>,

    /// Opaque pass-through value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl ChatRequest {
    /// Create a request without metadata
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            meta: None,
        }
    }

    /// Attach caller metadata
    pub fn with_meta(mut self, meta: Value) -> Self {
        self.meta = Some(meta);
        self
    }
}

/// The uniform success payload, identical for every provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedResponse {
    /// Flattened text produced by the model
    pub content: String,

    /// The request's `meta`, or `null`
    pub meta: Value,

    /// Identifier of the provider that served the request
    pub provider: String,

    /// Model reported by the provider, or the configured one
    pub model: String,
}

/// Failure envelope returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
