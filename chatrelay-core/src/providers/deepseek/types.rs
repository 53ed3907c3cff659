//! DeepSeek API types
//!
//! Request types match the chat-completions wire format exactly. Response
//! types are decoded leniently: every field is optional and a field of the
//! wrong JSON type is treated as absent.

use crate::protocol::types::Message;
use crate::providers::lenient;
use serde::{Deserialize, Serialize};

/// Chat completion request
#[derive(Debug, Serialize)]
pub struct DeepSeekRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
    pub stream: bool,
    pub temperature: f64,
    pub max_tokens: u32,
    pub response_format: ResponseFormat,
}

/// Response format selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub format_type: &'static str,
}

impl ResponseFormat {
    /// Ask the provider for a single JSON object
    pub fn json_object() -> Self {
        Self {
            format_type: "json_object",
        }
    }
}

/// Chat completion response
#[derive(Debug, Default, Deserialize)]
pub struct DeepSeekResponse {
    #[serde(default, deserialize_with = "lenient::text")]
    pub model: Option<String>,

    /// Only `choices[0]` is ever read
    #[serde(default, rename = "choices", deserialize_with = "lenient::first")]
    pub first_choice: Option<DeepSeekChoice>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DeepSeekChoice {
    #[serde(default, deserialize_with = "lenient::object")]
    pub message: Option<DeepSeekMessage>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DeepSeekMessage {
    #[serde(default, deserialize_with = "lenient::text")]
    pub content: Option<String>,
}
