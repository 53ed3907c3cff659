//! HTTP entry point for the chatrelay adapters
//!
//! Routes:
//! - `POST /api/ai` forwards to the configured default provider
//! - `POST /api/ai/{provider}` forwards to `deepseek` or `openai`
//! - `GET /health` liveness probe

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use chatrelay_core::protocol::{validate_request, ErrorBody};
use chatrelay_core::providers::{AdapterRegistry, ProviderAdapter, ProviderError, ProviderKind};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

/// Shared, read-only server state
pub struct AppState {
    pub registry: AdapterRegistry,
}

/// Build the router
pub fn app(registry: AdapterRegistry) -> Router {
    let state = Arc::new(AppState { registry });

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/ai", any(relay_default_handler))
        .route("/api/ai/{provider}", any(relay_named_handler))
        .with_state(state)
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": chatrelay_core::version(),
    }))
}

async fn relay_default_handler(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    match body {
        Ok(body) => relay(state.registry.default_adapter(), &method, &body).await,
        Err(rejection) => rejected_body(&method, rejection),
    }
}

async fn relay_named_handler(
    State(state): State<Arc<AppState>>,
    Path(provider): Path<String>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let Ok(kind) = provider.parse::<ProviderKind>() else {
        let message = format!("Unknown provider '{}'", provider);
        return (StatusCode::NOT_FOUND, Json(ErrorBody::new(message))).into_response();
    };

    match body {
        Ok(body) => relay(state.registry.get(kind), &method, &body).await,
        Err(rejection) => rejected_body(&method, rejection),
    }
}

/// A body axum refused to buffer (over the size limit, or a broken stream)
fn rejected_body(method: &Method, rejection: BytesRejection) -> Response {
    if method != Method::POST {
        return error_response(&ProviderError::MethodNotAllowed);
    }

    warn!(status = rejection.status().as_u16(), "Request body rejected: {}", rejection);
    (rejection.status(), Json(ErrorBody::new(rejection.body_text()))).into_response()
}

/// Validate, forward, and render the outcome
async fn relay(adapter: Arc<dyn ProviderAdapter>, method: &Method, body: &[u8]) -> Response {
    let result = match validate_request(method, body) {
        Ok(request) => adapter.complete(&request).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(response) => {
            info!(provider = %response.provider, model = %response.model, "Relayed request");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            warn!(provider = adapter.name(), status = e.status_code(), "Relay failed: {}", e);
            error_response(&e)
        }
    }
}

/// `{error}` body with the status the error maps to
pub fn error_response(error: &ProviderError) -> Response {
    let status =
        StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut response = (status, Json(error.error_body())).into_response();

    if matches!(error, ProviderError::MethodNotAllowed) {
        response
            .headers_mut()
            .insert(header::ALLOW, header::HeaderValue::from_static("POST"));
    }

    response
}
