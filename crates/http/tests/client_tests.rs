//! Integration tests for the Taskdeck HTTP client

use serde_json::json;
use std::time::Duration;
use taskdeck_http::{ClientError, TaskdeckClient};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_client_builder() {
    let client = TaskdeckClient::builder()
        .base_url("http://localhost:5000/")
        .timeout(Duration::from_secs(5))
        .build();

    assert!(client.is_ok());
    let client = client.unwrap();
    assert_eq!(client.base_url(), "http://localhost:5000");
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let result = TaskdeckClient::builder().build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_request_with_token_sets_bearer_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tasks": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = TaskdeckClient::new(mock_server.uri()).unwrap();
    let request = client.request_with_token(reqwest::Method::GET, "/api/tasks", "test-token");
    let body: serde_json::Value = client.execute(request, "Failed").await.unwrap();
    assert_eq!(body, json!({ "tasks": [] }));
}

#[tokio::test]
async fn test_error_body_message_is_used() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({ "error": "Permission denied" })))
        .mount(&mock_server)
        .await;

    let client = TaskdeckClient::new(mock_server.uri()).unwrap();
    let request = client.request(reqwest::Method::GET, "/api/tasks");
    let result: Result<serde_json::Value, _> = client.execute(request, "Failed to load tasks").await;

    let error = result.unwrap_err();
    assert!(matches!(error, ClientError::Forbidden(_)));
    assert_eq!(error.user_message(), "Permission denied");
}

#[tokio::test]
async fn test_fallback_message_without_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = TaskdeckClient::new(mock_server.uri()).unwrap();
    let request = client.request(reqwest::Method::GET, "/api/tasks");
    let result: Result<serde_json::Value, _> = client.execute(request, "Failed to load tasks").await;

    let error = result.unwrap_err();
    assert!(matches!(error, ClientError::ServerError { status: 500, .. }));
    assert_eq!(error.user_message(), "Failed to load tasks");
}

#[tokio::test]
async fn test_undecodable_success_body_is_serialization_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tasks": "none" })))
        .mount(&mock_server)
        .await;

    let client = TaskdeckClient::new(mock_server.uri()).unwrap();
    let request = client.request(reqwest::Method::GET, "/api/tasks");
    let result: Result<taskdeck_http::types::TaskListResponse, _> =
        client.execute(request, "Failed to load tasks").await;

    let error = result.unwrap_err();
    assert!(matches!(error, ClientError::Serialization(_)));
    assert_eq!(error.user_message(), "Unexpected response from the server");
}
