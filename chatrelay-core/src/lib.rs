//! Chatrelay Core Library
//!
//! Provider adapters that accept a normalized chat request, forward it to one
//! of several LLM APIs, and return a single normalized text payload.

pub mod config;
pub mod http;
pub mod protocol;
pub mod providers;

pub use protocol::{ChatRequest, ErrorBody, Message, MessageRole, NormalizedResponse};
pub use providers::{AdapterRegistry, ProviderAdapter, ProviderError, ProviderKind, ProviderResult};

/// Returns the version of the Chatrelay Core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
