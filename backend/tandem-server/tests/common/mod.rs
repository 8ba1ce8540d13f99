#![allow(dead_code)]

//! Test infrastructure for tandem-server API tests

use tandem_chat::{ChatDirectory, ChatError, ChatUser, Result as ChatErrorResult};
use tandem_db::MIGRATOR;
use tandem_server::{AppState, build_router};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes-long";

/// In-process chat directory that records upserts and can be made to fail
#[derive(Default)]
pub struct FakeChatDirectory {
    upserts: Mutex<Vec<ChatUser>>,
    failing: AtomicBool,
    rejected_names: Mutex<Vec<String>>,
}

impl FakeChatDirectory {
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Reject every upsert for users with this display name, like a remote 400
    pub fn reject_name(&self, name: &str) {
        self.rejected_names.lock().unwrap().push(name.to_string());
    }

    pub fn upserts(&self) -> Vec<ChatUser> {
        self.upserts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatDirectory for FakeChatDirectory {
    async fn upsert_user(&self, user: &ChatUser) -> ChatErrorResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ChatError::api_error(503, "directory unavailable".to_string()));
        }
        if self.rejected_names.lock().unwrap().contains(&user.name) {
            return Err(ChatError::api_error(400, "invalid user data".to_string()));
        }
        self.upserts.lock().unwrap().push(user.clone());
        Ok(())
    }

    fn issue_user_token(&self, user_id: &str) -> ChatErrorResult<String> {
        Ok(format!("chat-token-for-{}", user_id))
    }
}

pub struct TestApp {
    pub state: AppState,
    pub chat: Arc<FakeChatDirectory>,
}

impl TestApp {
    pub fn router(&self) -> Router {
        build_router(self.state.clone(), &[])
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.state.pool
    }
}

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(SqliteConnectOptions::new().filename(":memory:"))
        .await
        .expect("Failed to create test database");

    MIGRATOR.run(&pool).await.expect("Failed to run migrations");

    pool
}

/// Create an app over a fresh database and a healthy fake chat directory
pub async fn create_test_app() -> TestApp {
    create_test_app_with(false).await
}

pub async fn create_test_app_with(secure_cookies: bool) -> TestApp {
    let pool = create_test_pool().await;
    let chat = Arc::new(FakeChatDirectory::default());
    let state = AppState::new(pool, TEST_JWT_SECRET, chat.clone(), secure_cookies);

    TestApp { state, chat }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub json: Value,
}

impl TestResponse {
    pub fn set_cookie(&self) -> Option<&str> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
    }

    /// The `jwt=<token>` pair to send back as a `Cookie` header
    pub fn session_cookie(&self) -> String {
        self.set_cookie()
            .and_then(|c| c.split(';').next())
            .expect("response did not set a session cookie")
            .to_string()
    }
}

pub async fn send(app: &TestApp, request: Request<Body>) -> TestResponse {
    let response = app.router().oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };

    TestResponse {
        status,
        headers,
        json,
    }
}

pub fn json_request(method: &str, uri: &str, body: &Value, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: &str, uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

/// Sign up through the API and return the response
pub async fn signup(app: &TestApp, full_name: &str, email: &str, password: &str) -> TestResponse {
    let body = serde_json::json!({
        "fullName": full_name,
        "email": email,
        "password": password,
    });
    send(app, json_request("POST", "/api/auth/signup", &body, None)).await
}

pub async fn count_users_with_email(pool: &SqlitePool, email: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
        .bind(email)
        .fetch_one(pool)
        .await
        .expect("Failed to count users")
}

pub async fn chat_sync_pending(pool: &SqlitePool, email: &str) -> bool {
    sqlx::query_scalar("SELECT chat_sync_pending FROM users WHERE email = ?")
        .bind(email)
        .fetch_one(pool)
        .await
        .expect("Failed to read chat_sync_pending")
}

pub fn onboarding_body() -> Value {
    serde_json::json!({
        "fullName": "Asha Rao",
        "bio": "Learning Spanish for travel",
        "nativeLanguage": "Hindi",
        "learningLanguage": "Spanish",
        "location": "Pune, India",
    })
}
