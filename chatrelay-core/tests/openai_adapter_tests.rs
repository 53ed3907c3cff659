//! Tests for the OpenAI Responses adapter against a mock upstream

use chatrelay_core::config::OpenAIConfig;
use chatrelay_core::http::HttpClient;
use chatrelay_core::protocol::{ChatRequest, Message};
use chatrelay_core::providers::{OpenAIAdapter, ProviderAdapter, ProviderError};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn adapter_for(server: &MockServer) -> OpenAIAdapter {
    let config = OpenAIConfig::default()
        .with_api_key("sk-test")
        .with_base_url(server.uri());
    OpenAIAdapter::new(config, HttpClient::new().expect("Failed to create client"))
}

fn eval_request() -> ChatRequest {
    ChatRequest::new(vec![
        Message::system("Answer in JSON"),
        Message::user("List three colors"),
        Message::assistant("{\"colors\": []}"),
        Message::user("Try again"),
    ])
    .with_meta(json!({"type": "eval"}))
}

#[tokio::test]
async fn test_success_flattens_output_items() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/responses"))
        .and(header("Authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-mini",
            "input": [
                {"role": "system", "content": "Answer in JSON"},
                {"role": "user", "content": "List three colors"},
                {"role": "assistant", "content": "{\"colors\": []}"},
                {"role": "user", "content": "Try again"}
            ],
            "store": false,
            "temperature": 0.2,
            "max_output_tokens": 2200
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "resp_1",
            "model": "gpt-4o-mini-2024-07-18",
            "output": [
                {"type": "reasoning", "summary": []},
                {
                    "type": "message",
                    "role": "assistant",
                    "content": [
                        {"type": "output_text", "text": "{\"colors\":", "annotations": []},
                        {"type": "output_text", "text": "[\"red\"]}", "annotations": []}
                    ]
                }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = adapter_for(&mock_server)
        .complete(&eval_request())
        .await
        .expect("Expected successful response");

    assert_eq!(response.content, "{\"colors\":\n[\"red\"]}");
    assert_eq!(response.meta, json!({"type": "eval"}));
    assert_eq!(response.provider, "openai");
    assert_eq!(response.model, "gpt-4o-mini-2024-07-18");
}

#[tokio::test]
async fn test_documented_skip_example() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output": [
                {"content": [{"type": "output_text", "text": "A"}]},
                {"content": [{"type": "other"}]},
                {"content": [{"type": "output_text", "text": "B"}]}
            ]
        })))
        .mount(&mock_server)
        .await;

    let response = adapter_for(&mock_server)
        .complete(&eval_request())
        .await
        .unwrap();

    assert_eq!(response.content, "A\nB");
    assert_eq!(response.model, "gpt-4o-mini");
}

#[tokio::test]
async fn test_nested_error_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(
            ResponseTemplate::new(429).set_body_json(json!({"error": {"message": "rate limited"}})),
        )
        .mount(&mock_server)
        .await;

    match adapter_for(&mock_server).complete(&eval_request()).await {
        Err(ProviderError::Upstream { status, message }) => {
            assert_eq!(status, 429);
            assert_eq!(message, "rate limited");
        }
        other => panic!("Expected Upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_top_level_message_is_not_probed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"message": "bad input"})))
        .mount(&mock_server)
        .await;

    let error = adapter_for(&mock_server)
        .complete(&eval_request())
        .await
        .unwrap_err();

    assert_eq!(error.status_code(), 400);
    assert_eq!(error.to_string(), r#"{"message":"bad input"}"#);
}

#[tokio::test]
async fn test_empty_output_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "gpt-4o-mini",
            "output": [{"type": "message", "content": [{"type": "refusal", "refusal": "no"}]}]
        })))
        .mount(&mock_server)
        .await;

    let error = adapter_for(&mock_server)
        .complete(&eval_request())
        .await
        .unwrap_err();

    assert!(matches!(error, ProviderError::EmptyContent { .. }));
    assert_eq!(error.to_string(), "openai returned empty content");
}

#[tokio::test]
async fn test_unparseable_success_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let error = adapter_for(&mock_server)
        .complete(&eval_request())
        .await
        .unwrap_err();

    assert!(matches!(error, ProviderError::Parse(_)));
    assert_eq!(error.status_code(), 500);
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&mock_server)
        .await;

    let config = OpenAIConfig::default()
        .with_api_key("sk-test")
        .with_base_url(mock_server.uri())
        .with_timeout(Duration::from_millis(100));
    let adapter = OpenAIAdapter::new(config, HttpClient::new().unwrap());

    let error = adapter.complete(&eval_request()).await.unwrap_err();

    assert!(error.is_timeout(), "Expected timeout, got {:?}", error);
    assert!(error.to_string().contains("OPENAI_TIMEOUT_MS"));
}

#[tokio::test]
async fn test_empty_messages_never_reach_upstream() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let error = adapter_for(&mock_server)
        .complete(&ChatRequest::new(vec![]).with_meta(json!({"type": "eval"})))
        .await
        .unwrap_err();

    assert_eq!(error.status_code(), 400);
}

#[tokio::test]
async fn test_missing_key_names_variable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let adapter = OpenAIAdapter::new(
        OpenAIConfig::default().with_base_url(mock_server.uri()),
        HttpClient::new().unwrap(),
    );

    let error = adapter.complete(&eval_request()).await.unwrap_err();

    assert_eq!(error.status_code(), 500);
    assert_eq!(
        error.error_body().error,
        "Server misconfigured: OPENAI_API_KEY is missing"
    );
}

#[tokio::test]
async fn test_empty_upstream_model_falls_back_to_configured() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "",
            "output": [{"content": [{"type": "output_text", "text": "{}"}]}]
        })))
        .mount(&mock_server)
        .await;

    let response = adapter_for(&mock_server)
        .complete(&eval_request())
        .await
        .unwrap();

    assert_eq!(response.content, "{}");
    assert_eq!(response.model, "gpt-4o-mini");
}
