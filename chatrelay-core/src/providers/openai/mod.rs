//! OpenAI provider implementation
//!
//! This module provides an adapter for the OpenAI Responses API, translating
//! the normalized request into `input` and flattening the heterogeneous
//! `output` items back into a single text.

mod client;
pub mod converter;
pub mod types;

pub use client::OpenAIAdapter;
pub use converter::collect_output_text;
pub use types::{OpenAIRequest, OpenAIResponse, OutputItem, OutputSegment};
