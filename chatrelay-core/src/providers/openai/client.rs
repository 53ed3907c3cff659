//! OpenAI Responses adapter implementation

use super::converter::{collect_output_text, to_openai_request};
use super::types::OpenAIResponse;
use crate::config::OpenAIConfig;
use crate::http::{map_http_error, CallKind, ErrorShape, HttpClient, RequestOptions};
use crate::protocol::types::{ChatRequest, NormalizedResponse};
use crate::providers::adapter::{ensure_messages, ProviderAdapter};
use crate::providers::error::{ProviderError, ProviderResult};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{error, info, warn};

/// OpenAI Responses adapter
pub struct OpenAIAdapter {
    config: OpenAIConfig,
    http: HttpClient,
}

impl OpenAIAdapter {
    pub const PROVIDER_ID: &'static str = "openai";

    pub fn new(config: OpenAIConfig, http: HttpClient) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &OpenAIConfig {
        &self.config
    }
}

#[async_trait]
impl ProviderAdapter for OpenAIAdapter {
    fn name(&self) -> &str {
        Self::PROVIDER_ID
    }

    fn default_model(&self) -> &str {
        &self.config.model
    }

    async fn complete(&self, request: &ChatRequest) -> ProviderResult<NormalizedResponse> {
        ensure_messages(request)?;

        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| ProviderError::Configuration {
                key: OpenAIConfig::API_KEY_VAR.to_string(),
            })?;

        let options = RequestOptions::new(CallKind::Responses)
            .with_timeout(self.config.timeout, OpenAIConfig::TIMEOUT_VAR);

        info!(
            "Forwarding {} messages to {} [request_id: {}]",
            request.messages.len(),
            Self::PROVIDER_ID,
            options.request_id
        );

        let payload = to_openai_request(request, &self.config);
        let reply = self
            .http
            .post_json(&options.url(&self.config.base_url), api_key, &payload, &options)
            .await?;

        if !reply.is_success() {
            warn!(
                "Request failed with status {} for {} [request_id: {}]",
                reply.status,
                Self::PROVIDER_ID,
                options.request_id
            );
            return Err(map_http_error(
                reply.status,
                reply.body.as_ref(),
                &reply.raw,
                ErrorShape::NestedOnly,
            ));
        }

        let body = reply.body.ok_or_else(|| {
            error!(
                "Failed to parse response from {} [request_id: {}]",
                Self::PROVIDER_ID,
                options.request_id
            );
            ProviderError::Parse(format!(
                "response body is not JSON [request_id: {}]",
                options.request_id
            ))
        })?;
        let response: OpenAIResponse = serde_json::from_value(body)?;

        let content = collect_output_text(&response.output);
        if content.is_empty() {
            warn!(
                "Empty content from {} [request_id: {}]",
                Self::PROVIDER_ID,
                options.request_id
            );
            return Err(ProviderError::EmptyContent {
                provider: Self::PROVIDER_ID.to_string(),
            });
        }

        info!(
            "Request completed successfully for {} [request_id: {}]",
            Self::PROVIDER_ID,
            options.request_id
        );

        Ok(NormalizedResponse {
            content,
            meta: request.meta.clone().unwrap_or(Value::Null),
            provider: Self::PROVIDER_ID.to_string(),
            model: response
                .model
                .filter(|model| !model.is_empty())
                .unwrap_or_else(|| self.config.model.clone()),
        })
    }
}
