//! Protocol module for the normalized request/response envelope
//!
//! These structures are what callers exchange with every adapter, regardless
//! of which provider ends up serving the request.

pub mod types;
pub mod validation;

pub use types::{ChatRequest, ErrorBody, Message, MessageRole, NormalizedResponse};
pub use validation::{parse_request, validate_request};
