//! User entity - the identity record owned by the credential store.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered user.
///
/// `password_hash` holds the one-way derived credential (argon2 PHC string).
/// The plaintext credential never reaches this type.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    /// Login key, unique and case-sensitive as stored
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub bio: Option<String>,
    pub profile_pic: String,
    pub native_language: Option<String>,
    pub learning_language: Option<String>,
    pub location: Option<String>,
    /// Flips false -> true on onboarding, never back
    pub is_onboarded: bool,
    /// Set while the chat directory record is known to be stale
    pub chat_sync_pending: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a freshly registered (not yet onboarded) user
    pub fn new(full_name: String, email: String, password_hash: String, profile_pic: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            full_name,
            bio: None,
            profile_pic,
            native_language: None,
            learning_language: None,
            location: None,
            is_onboarded: false,
            chat_sync_pending: true,
            created_at: now,
            updated_at: now,
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("full_name", &self.full_name)
            .field("bio", &self.bio)
            .field("profile_pic", &self.profile_pic)
            .field("native_language", &self.native_language)
            .field("learning_language", &self.learning_language)
            .field("location", &self.location)
            .field("is_onboarded", &self.is_onboarded)
            .field("chat_sync_pending", &self.chat_sync_pending)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}
