use crate::Result as ChatErrorResult;

use tandem_core::User;

use async_trait::async_trait;
use serde::Serialize;

/// The identity record mirrored into the chat directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatUser {
    pub id: String,
    pub name: String,
    pub image: String,
}

impl From<&User> for ChatUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.full_name.clone(),
            image: user.profile_pic.clone(),
        }
    }
}

#[async_trait]
pub trait ChatDirectory: Send + Sync {
    /// Create or update the directory record for `user`. Idempotent.
    async fn upsert_user(&self, user: &ChatUser) -> ChatErrorResult<()>;

    /// Mint a token the chat client can connect with as `user_id`
    fn issue_user_token(&self, user_id: &str) -> ChatErrorResult<String>;
}
