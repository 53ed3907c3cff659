//! HTTP client implementation using reqwest

use crate::config::SecretString;
use crate::http::deadline::Deadline;
use crate::http::{RequestOptions, UpstreamReply};
use crate::providers::error::{ProviderError, ProviderResult};
use reqwest::{Client, ClientBuilder, Response};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Maximum response size (10MB)
const MAX_RESPONSE_SIZE: usize = 10 * 1024 * 1024;

/// Default user agent
const USER_AGENT: &str = concat!("chatrelay/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client with connection pooling
#[derive(Clone)]
pub struct HttpClient {
    /// The underlying reqwest client
    client: Arc<Client>,

    /// Maximum response size to prevent OOM
    max_response_size: usize,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> ProviderResult<Self> {
        Self::with_config(Duration::from_secs(10), 10)
    }

    /// Create a new HTTP client with custom pool settings.
    ///
    /// There is no client-wide request timeout; each call carries its own
    /// `Deadline`.
    pub fn with_config(connect_timeout: Duration, max_idle_per_host: usize) -> ProviderResult<Self> {
        let client = ClientBuilder::new()
            .pool_max_idle_per_host(max_idle_per_host)
            .pool_idle_timeout(Duration::from_secs(90))
            .connect_timeout(connect_timeout)
            .user_agent(USER_AGENT)
            .gzip(true)
            .build()
            .map_err(|e| ProviderError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client: Arc::new(client),
            max_response_size: MAX_RESPONSE_SIZE,
        })
    }

    /// POST `payload` as JSON with bearer authentication.
    ///
    /// The send and the body read both run under a `Deadline` armed for
    /// `options.timeout`; the deadline is dropped, and so disarmed, before
    /// this returns on every path. The body is parsed as JSON whatever the
    /// status; a parse failure leaves `body` as `None`.
    pub async fn post_json<P: Serialize + ?Sized>(
        &self,
        url: &str,
        api_key: &SecretString,
        payload: &P,
        options: &RequestOptions,
    ) -> ProviderResult<UpstreamReply> {
        let request_id = options.request_id;
        debug!("Request URL: {} [request_id: {}]", url, request_id);

        let request = self
            .client
            .post(url)
            .bearer_auth(api_key.expose_secret())
            .header("Content-Type", "application/json")
            .header("X-Request-ID", request_id.to_string())
            .json(payload);

        let deadline = Deadline::arm(options.timeout, options.timeout_setting.clone());

        let exchange = async {
            let response = request.send().await.map_err(|e| {
                error!("Request error [request_id: {}]: {}", request_id, e);
                ProviderError::from(e)
            })?;
            self.check_content_length(&response)?;

            let status = response.status();
            let raw = response.text().await.map_err(|e| {
                ProviderError::Network(format!(
                    "Failed to read response body: {} [request_id: {}]",
                    e, request_id
                ))
            })?;
            Ok::<_, ProviderError>((status, raw))
        };

        let (status, raw) = match deadline.run(exchange).await {
            Ok(reply) => reply,
            Err(e) => {
                if deadline.is_expired() {
                    warn!(
                        "Request timed out after {:?} [request_id: {}]",
                        options.timeout, request_id
                    );
                }
                return Err(e);
            }
        };
        drop(deadline);

        if raw.len() > self.max_response_size {
            return Err(ProviderError::Parse(format!(
                "Response size {} exceeds maximum {} [request_id: {}]",
                raw.len(),
                self.max_response_size,
                request_id
            )));
        }

        debug!("Response status: {} [request_id: {}]", status, request_id);

        let body = serde_json::from_str(&raw).ok();
        Ok(UpstreamReply { status, body, raw })
    }

    /// Check response size to prevent OOM
    fn check_content_length(&self, response: &Response) -> ProviderResult<()> {
        if let Some(content_length) = response.content_length() {
            if content_length as usize > self.max_response_size {
                return Err(ProviderError::Parse(format!(
                    "Response size {} exceeds maximum {}",
                    content_length, self.max_response_size
                )));
            }
        }

        Ok(())
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("max_response_size", &self.max_response_size)
            .finish()
    }
}
