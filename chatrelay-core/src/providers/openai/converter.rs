//! Conversion between the normalized protocol and the Responses format

use super::types::{OpenAIRequest, OutputItem};
use crate::config::OpenAIConfig;
use crate::protocol::types::ChatRequest;

/// Fixed sampling temperature
pub const TEMPERATURE: f64 = 0.2;

/// Build the upstream payload; messages go under `input` unchanged
pub fn to_openai_request<'a>(request: &'a ChatRequest, config: &'a OpenAIConfig) -> OpenAIRequest<'a> {
    OpenAIRequest {
        model: &config.model,
        input: &request.messages,
        store: false,
        temperature: TEMPERATURE,
        max_output_tokens: config.max_output_tokens,
    }
}

/// Flatten output items into one string.
///
/// Every `output_text` segment with a string `text` is kept, in item order
/// then segment order. Kept strings are joined with `\n` and the result is
/// trimmed. Everything else is skipped.
pub fn collect_output_text(items: &[OutputItem]) -> String {
    items
        .iter()
        .flat_map(|item| item.content.iter())
        .filter_map(|segment| segment.text())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
