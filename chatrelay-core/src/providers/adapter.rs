//! Provider adapter trait and selection
//!
//! Every adapter takes the same normalized `ChatRequest` and returns the same
//! `NormalizedResponse`. Adapters do not depend on each other; a caller picks
//! one per request.

use crate::config::{ConfigError, RelayConfig};
use crate::http::HttpClient;
use crate::protocol::types::{ChatRequest, NormalizedResponse};
use crate::providers::deepseek::DeepSeekAdapter;
use crate::providers::error::{ProviderError, ProviderResult};
use crate::providers::openai::OpenAIAdapter;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Core trait that all provider adapters implement
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// Provider identifier reported in `NormalizedResponse::provider`
    fn name(&self) -> &str;

    /// Model used when the provider does not report one
    fn default_model(&self) -> &str;

    /// Forward one request and normalize the answer.
    ///
    /// At most one outbound call is made. Requests with no messages fail
    /// before any configuration or network access.
    async fn complete(&self, request: &ChatRequest) -> ProviderResult<NormalizedResponse>;
}

/// Reject requests that would send an empty conversation upstream
pub(crate) fn ensure_messages(request: &ChatRequest) -> ProviderResult<()> {
    if request.messages.is_empty() {
        return Err(ProviderError::InvalidRequest(
            "Bad Request: messages must be a non-empty array".to_string(),
        ));
    }
    Ok(())
}

/// Provider type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// JSON-mode chat completions
    DeepSeek,
    /// Responses API
    OpenAI,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::DeepSeek => DeepSeekAdapter::PROVIDER_ID,
            ProviderKind::OpenAI => OpenAIAdapter::PROVIDER_ID,
        }
    }

    /// Create an adapter instance for this type
    pub fn create_adapter(&self, config: &RelayConfig, http: HttpClient) -> Arc<dyn ProviderAdapter> {
        match self {
            ProviderKind::DeepSeek => Arc::new(DeepSeekAdapter::new(config.deepseek.clone(), http)),
            ProviderKind::OpenAI => Arc::new(OpenAIAdapter::new(config.openai.clone(), http)),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deepseek" => Ok(ProviderKind::DeepSeek),
            "openai" => Ok(ProviderKind::OpenAI),
            other => Err(ConfigError::Invalid {
                message: format!("unknown provider '{}' (expected deepseek or openai)", other),
            }),
        }
    }
}

/// Both adapters, plus the one used when the caller does not choose
#[derive(Clone)]
pub struct AdapterRegistry {
    default_kind: ProviderKind,
    deepseek: Arc<dyn ProviderAdapter>,
    openai: Arc<dyn ProviderAdapter>,
}

impl AdapterRegistry {
    pub fn from_config(config: &RelayConfig, default_kind: ProviderKind, http: HttpClient) -> Self {
        Self {
            default_kind,
            deepseek: ProviderKind::DeepSeek.create_adapter(config, http.clone()),
            openai: ProviderKind::OpenAI.create_adapter(config, http),
        }
    }

    pub fn default_kind(&self) -> ProviderKind {
        self.default_kind
    }

    pub fn get(&self, kind: ProviderKind) -> Arc<dyn ProviderAdapter> {
        match kind {
            ProviderKind::DeepSeek => self.deepseek.clone(),
            ProviderKind::OpenAI => self.openai.clone(),
        }
    }

    pub fn default_adapter(&self) -> Arc<dyn ProviderAdapter> {
        self.get(self.default_kind)
    }
}
