//! Configuration module
//!
//! Adapter settings are read from environment-style sources once, at
//! startup, and handed to adapters as plain values.

mod env;
mod error;
mod schema;
mod secrets;
mod validator;

pub use env::{EnvSource, ProcessEnv};
pub use error::{ConfigError, ConfigResult, ValidationError, ValidationErrorKind};
pub use schema::{DeepSeekConfig, OpenAIConfig, RelayConfig};
pub use secrets::{SafeLogging, SecretString};
pub use validator::ConfigValidator;
