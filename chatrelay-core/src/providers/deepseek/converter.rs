//! Conversion between the normalized protocol and DeepSeek's format

use super::types::{DeepSeekRequest, DeepSeekResponse, ResponseFormat};
use crate::config::DeepSeekConfig;
use crate::protocol::types::ChatRequest;

/// Fixed sampling temperature
pub const TEMPERATURE: f64 = 0.2;

/// Build the upstream payload; messages are passed through as-is
pub fn to_deepseek_request<'a>(
    request: &'a ChatRequest,
    config: &'a DeepSeekConfig,
) -> DeepSeekRequest<'a> {
    DeepSeekRequest {
        model: &config.model,
        messages: &request.messages,
        stream: false,
        temperature: TEMPERATURE,
        max_tokens: config.max_tokens,
        response_format: ResponseFormat::json_object(),
    }
}

/// The assistant text at `choices[0].message.content`, if it has any
/// non-whitespace characters. Returned untrimmed.
pub fn extract_content(response: &DeepSeekResponse) -> Option<&str> {
    response
        .first_choice
        .as_ref()
        .and_then(|choice| choice.message.as_ref())
        .and_then(|message| message.content.as_deref())
        .filter(|content| !content.trim().is_empty())
}
