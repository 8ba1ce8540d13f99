use crate::{ChatDirectory, ChatError, ChatUser, Result as ChatErrorResult};

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use reqwest::Client as ReqwestClient;
use serde::Serialize;
use serde_json::{Value, json};

/// Server-side client for a Stream-compatible chat directory.
///
/// Requests are authenticated with a server token signed by the API secret.
/// There are no retries here; a failed upsert is left to the caller.
pub struct StreamChatClient {
    pub base_url: String,
    api_key: String,
    encoding_key: EncodingKey,
    client: ReqwestClient,
}

#[derive(Serialize)]
struct UserTokenClaims<'a> {
    user_id: &'a str,
    iat: i64,
}

#[derive(Serialize)]
struct UpsertUsersRequest<'a> {
    users: HashMap<&'a str, &'a ChatUser>,
}

impl StreamChatClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Directory API URL (e.g., "https://chat.stream-io-api.com")
    /// * `timeout` - Upper bound for each HTTP request
    pub fn new(
        base_url: &str,
        api_key: &str,
        api_secret: &str,
        timeout: Duration,
    ) -> ChatErrorResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            encoding_key: EncodingKey::from_secret(api_secret.as_bytes()),
            client,
        })
    }

    fn server_token(&self) -> ChatErrorResult<String> {
        let token = encode(
            &Header::new(Algorithm::HS256),
            &json!({ "server": true }),
            &self.encoding_key,
        )?;
        Ok(token)
    }

    /// Check the response status, pulling the remote message out of error bodies
    async fn execute(&self, req: reqwest::RequestBuilder) -> ChatErrorResult<()> {
        let response = req.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let text = response.text().await?;
        let message = serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|body| body.get("message").and_then(|m| m.as_str()).map(String::from))
            .unwrap_or(text);

        Err(ChatError::api_error(status.as_u16(), message))
    }
}

#[async_trait]
impl ChatDirectory for StreamChatClient {
    async fn upsert_user(&self, user: &ChatUser) -> ChatErrorResult<()> {
        let url = format!("{}/users?api_key={}", self.base_url, self.api_key);
        let body = UpsertUsersRequest {
            users: HashMap::from([(user.id.as_str(), user)]),
        };

        let req = self
            .client
            .post(&url)
            .header("Authorization", self.server_token()?)
            .header("Stream-Auth-Type", "jwt")
            .json(&body);

        self.execute(req).await?;
        log::debug!("Upserted chat user {}", user.id);
        Ok(())
    }

    fn issue_user_token(&self, user_id: &str) -> ChatErrorResult<String> {
        let claims = UserTokenClaims {
            user_id,
            iat: chrono::Utc::now().timestamp(),
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }
}
