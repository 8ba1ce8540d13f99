//! Integration tests for the chat directory client using wiremock mock server

use tandem_chat::{ChatDirectory, ChatError, ChatUser, StreamChatClient};

use std::time::Duration;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, header_exists, method, path, query_param},
};

fn asha() -> ChatUser {
    ChatUser {
        id: "6f1c2a8e-0000-4000-8000-000000000001".to_string(),
        name: "Asha".to_string(),
        image: "https://avatar.iran.liara.run/public/12.png".to_string(),
    }
}

fn client(uri: &str, timeout: Duration) -> StreamChatClient {
    StreamChatClient::new(uri, "test-key", "test-secret", timeout).unwrap()
}

#[tokio::test]
async fn test_upsert_user_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .and(query_param("api_key", "test-key"))
        .and(header("Stream-Auth-Type", "jwt"))
        .and(header_exists("Authorization"))
        .and(body_json(json!({
            "users": {
                "6f1c2a8e-0000-4000-8000-000000000001": {
                    "id": "6f1c2a8e-0000-4000-8000-000000000001",
                    "name": "Asha",
                    "image": "https://avatar.iran.liara.run/public/12.png"
                }
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "users": {},
            "duration": "1.23ms"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server.uri(), Duration::from_secs(5));
    let result = client.upsert_user(&asha()).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_upsert_user_twice_is_idempotent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"users": {}})))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server.uri(), Duration::from_secs(5));

    assert!(client.upsert_user(&asha()).await.is_ok());
    assert!(client.upsert_user(&asha()).await.is_ok());
}

#[tokio::test]
async fn test_upsert_user_api_error_carries_status_and_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": 5,
            "message": "api_key not valid",
            "StatusCode": 401
        })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server.uri(), Duration::from_secs(5));
    let result = client.upsert_user(&asha()).await;

    match result {
        Err(ChatError::Api {
            status, message, ..
        }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "api_key not valid");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_upsert_user_non_json_error_keeps_body_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server.uri(), Duration::from_secs(5));
    let err = client.upsert_user(&asha()).await.unwrap_err();

    assert!(err.to_string().contains("bad gateway"));
    assert!(err.to_string().contains("502"));
}

#[tokio::test]
async fn test_upsert_user_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(201).set_delay(Duration::from_secs(2)))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server.uri(), Duration::from_millis(100));
    let result = client.upsert_user(&asha()).await;

    assert!(matches!(result, Err(ChatError::Http { .. })));
}

#[tokio::test]
async fn test_upsert_user_unreachable_directory() {
    // Nothing listens on port 9 locally
    let client = client("http://127.0.0.1:9", Duration::from_secs(1));
    let result = client.upsert_user(&asha()).await;

    assert!(matches!(result, Err(ChatError::Http { .. })));
}
