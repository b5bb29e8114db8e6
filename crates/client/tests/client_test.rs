//! Integration tests for the request/response contract.
//!
//! Each test stands up a wiremock server and checks one observable
//! behavior: URL building, header defaults and overrides, and the
//! fixed response contract (JSON success, non-JSON fallback, status
//! errors, transport errors).

use fetchkit_client::{
    ApiClient, ApiError, ClientConfig, QueryParams, RequestOptions, StaticToken,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize, PartialEq)]
struct Post {
    id: u64,
    title: String,
}

fn client_for(server: &MockServer) -> ApiClient {
    let config = ClientConfig::default()
        .with_base_url(server.uri())
        .with_timeout(Duration::from_secs(5));
    ApiClient::with_config(config).unwrap()
}

#[tokio::test]
async fn get_parses_json_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"id": 1, "title": "hello"}])),
        )
        .mount(&server)
        .await;

    let posts: Vec<Post> = assert_ok!(client_for(&server).get("/posts").await);
    assert_eq!(
        posts,
        vec![Post {
            id: 1,
            title: "hello".to_string()
        }]
    );
}

#[tokio::test]
async fn query_params_keep_order_and_skip_absent_values() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let params = QueryParams::new()
        .with("page", 2)
        .with_opt("filter", None::<&str>)
        .with("active", true)
        .with("q", "rust");
    let options = RequestOptions::new().with_params(params);

    let _: Value = client_for(&server).get_with("/posts", options).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    // `filter` must be absent entirely, not serialized as `filter=undefined`.
    assert_eq!(requests[0].url.query(), Some("page=2&active=true&q=rust"));
}

#[tokio::test]
async fn non_json_success_resolves_to_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("pong", "text/plain"))
        .mount(&server)
        .await;

    let value: Value = client_for(&server).get("/ping").await.unwrap();
    assert_eq!(value, json!({}));
}

#[tokio::test]
async fn post_body_is_json_and_204_resolves_to_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/items"))
        .and(body_json(json!({"name": "a"})))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let value: Value = client_for(&server)
        .post("/items", &json!({"name": "a"}))
        .await
        .unwrap();
    assert_eq!(value, json!({}));
}

#[tokio::test]
async fn post_without_body_sends_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/items/1/publish"))
        .and(wiremock::matchers::body_string(""))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let value: Value = client_for(&server)
        .post_with::<Value, ()>("/items/1/publish", None, RequestOptions::new())
        .await
        .unwrap();
    assert_eq!(value, json!({}));
}

#[tokio::test]
async fn error_status_carries_body_text_as_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts/999"))
        .respond_with(ResponseTemplate::new(404).set_body_raw("not found", "text/plain"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get::<Value>("/posts/999")
        .await
        .unwrap_err();
    match err {
        ApiError::Status {
            status,
            ref status_text,
            ref message,
        } => {
            assert_eq!(status, 404);
            assert_eq!(status_text, "Not Found");
            assert_eq!(message, "not found");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_status_with_empty_body_uses_default_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).get::<Value>("/broken").await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "API Error: 500 Internal Server Error");
    assert!(err.is_server_error());
}

#[tokio::test]
async fn bearer_token_and_content_type_sent_by_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("authorization", "Bearer secret"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7})))
        .mount(&server)
        .await;

    let config = ClientConfig::default()
        .with_base_url(server.uri())
        .with_auth(StaticToken::new("secret"));
    let client = ApiClient::with_config(config).unwrap();

    let value: Value = client.get("/me").await.unwrap();
    assert_eq!(value, json!({"id": 7}));
}

#[tokio::test]
async fn caller_headers_override_defaults() {
    use reqwest::header::{HeaderValue, CONTENT_TYPE};

    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/items/1"))
        .and(header("content-type", "application/merge-patch+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let options = RequestOptions::new().with_header(
        CONTENT_TYPE,
        HeaderValue::from_static("application/merge-patch+json"),
    );
    let value: Value = client_for(&server)
        .patch_with("/items/1", Some(&json!({"title": "b"})), options)
        .await
        .unwrap();
    assert_eq!(value, json!({"ok": true}));
}

#[tokio::test]
async fn put_and_delete_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/items/1"))
        .and(body_json(json!({"title": "b"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "title": "b"})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/items/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let updated: Post = client.put("/items/1", &json!({"title": "b"})).await.unwrap();
    assert_eq!(updated.title, "b");

    let gone: Value = client.delete("/items/1").await.unwrap();
    assert_eq!(gone, json!({}));
}

#[tokio::test]
async fn transport_failure_has_no_status_code() {
    // Nothing listens on this port: connection refused, not an HTTP error.
    let config = ClientConfig::default()
        .with_base_url("http://127.0.0.1:1")
        .with_timeout(Duration::from_secs(2));
    let client = ApiClient::with_config(config).unwrap();

    let err = client.get::<Value>("/posts").await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.status(), None);
}
