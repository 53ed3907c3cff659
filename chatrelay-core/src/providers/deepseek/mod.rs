//! DeepSeek provider implementation
//!
//! Chat-completions adapter with JSON output mode and a per-call deadline.

mod client;
pub mod converter;
pub mod types;

pub use client::DeepSeekAdapter;
pub use types::{DeepSeekRequest, DeepSeekResponse};
