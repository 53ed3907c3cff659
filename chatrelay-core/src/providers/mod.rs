//! Provider adapters
//!
//! Each adapter translates the normalized request into one provider's wire
//! format, makes a single call, and normalizes the answer back.

pub mod adapter;
pub mod deepseek;
pub mod error;
pub mod lenient;
pub mod openai;

pub use adapter::{AdapterRegistry, ProviderAdapter, ProviderKind};
pub use error::{ProviderError, ProviderResult};

// Re-export concrete adapters
pub use deepseek::DeepSeekAdapter;
pub use openai::OpenAIAdapter;
