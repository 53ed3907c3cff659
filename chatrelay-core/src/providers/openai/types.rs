//! OpenAI Responses API types
//!
//! These types match the Responses wire format. The response side is
//! decoded leniently so that unexpected item or segment shapes are skipped
//! rather than failing the whole body.

use crate::protocol::types::Message;
use crate::providers::lenient;
use serde::{Deserialize, Serialize};

/// Responses request
#[derive(Debug, Serialize)]
pub struct OpenAIRequest<'a> {
    pub model: &'a str,
    pub input: &'a [Message],
    pub store: bool,
    pub temperature: f64,
    pub max_output_tokens: u32,
}

/// Responses body
#[derive(Debug, Default, Deserialize)]
pub struct OpenAIResponse {
    #[serde(default, deserialize_with = "lenient::text")]
    pub model: Option<String>,

    /// Output items in emission order
    #[serde(default, deserialize_with = "lenient::seq")]
    pub output: Vec<OutputItem>,
}

/// One output item (message, reasoning, tool call, ...)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OutputItem {
    #[serde(default, deserialize_with = "lenient::seq")]
    pub content: Vec<OutputSegment>,
}

/// One content segment of an output item
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum OutputSegment {
    /// Model-generated text
    #[serde(rename = "output_text")]
    OutputText {
        #[serde(default, deserialize_with = "lenient::text")]
        text: Option<String>,
    },

    /// Refusals, annotations, anything else
    #[serde(other)]
    Other,
}

impl OutputSegment {
    pub fn output_text(text: impl Into<String>) -> Self {
        OutputSegment::OutputText {
            text: Some(text.into()),
        }
    }

    /// Text carried by a qualifying segment
    pub fn text(&self) -> Option<&str> {
        match self {
            OutputSegment::OutputText { text } => text.as_deref(),
            OutputSegment::Other => None,
        }
    }
}

impl OutputItem {
    pub fn new(content: Vec<OutputSegment>) -> Self {
        Self { content }
    }
}
