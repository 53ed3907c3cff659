//! DeepSeek adapter implementation

use super::converter::{extract_content, to_deepseek_request};
use super::types::DeepSeekResponse;
use crate::config::DeepSeekConfig;
use crate::http::{map_http_error, CallKind, ErrorShape, HttpClient, RequestOptions};
use crate::protocol::types::{ChatRequest, NormalizedResponse};
use crate::providers::adapter::{ensure_messages, ProviderAdapter};
use crate::providers::error::{ProviderError, ProviderResult};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};

/// DeepSeek chat-completions adapter
pub struct DeepSeekAdapter {
    config: DeepSeekConfig,
    http: HttpClient,
}

impl DeepSeekAdapter {
    pub const PROVIDER_ID: &'static str = "deepseek";

    pub fn new(config: DeepSeekConfig, http: HttpClient) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &DeepSeekConfig {
        &self.config
    }
}

#[async_trait]
impl ProviderAdapter for DeepSeekAdapter {
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
                key: DeepSeekConfig::API_KEY_VAR.to_string(),
            })?;

        let options = RequestOptions::new(CallKind::ChatCompletions)
            .with_timeout(self.config.timeout, DeepSeekConfig::TIMEOUT_VAR);

        info!(
            "Forwarding {} messages to {} [request_id: {}]",
            request.messages.len(),
            Self::PROVIDER_ID,
            options.request_id
        );

        let payload = to_deepseek_request(request, &self.config);
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
                ErrorShape::NestedOrTopLevel,
            ));
        }

        // A body that is not a JSON object reads as an empty response
        let response: DeepSeekResponse = reply
            .body
            .and_then(|body| serde_json::from_value(body).ok())
            .unwrap_or_default();

        let content = extract_content(&response).ok_or_else(|| {
            warn!(
                "Empty content from {} [request_id: {}]",
                Self::PROVIDER_ID,
                options.request_id
            );
            ProviderError::EmptyContent {
                provider: Self::PROVIDER_ID.to_string(),
            }
        })?;

        info!(
            "Request completed successfully for {} [request_id: {}]",
            Self::PROVIDER_ID,
            options.request_id
        );

        Ok(NormalizedResponse {
            content: content.to_string(),
            meta: request.meta.clone().unwrap_or(Value::Null),
            provider: Self::PROVIDER_ID.to_string(),
            model: response
                .model
                .clone()
                .filter(|model| !model.is_empty())
                .unwrap_or_else(|| self.config.model.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_is_configuration_error() {
        let adapter = DeepSeekAdapter::new(DeepSeekConfig::default(), HttpClient::new().unwrap());
        let request = ChatRequest::new(vec![crate::protocol::Message::user("hi")]);

        match adapter.complete(&request).await {
            Err(ProviderError::Configuration { key }) => assert_eq!(key, "DEEPSEEK_API_KEY"),
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }
}
