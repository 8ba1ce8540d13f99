use tandem_core::User;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// User DTO for JSON serialization. Never carries the password hash.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub bio: String,
    pub profile_pic: String,
    pub native_language: String,
    pub learning_language: String,
    pub location: String,
    pub is_onboarded: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_string(),
            email: u.email,
            full_name: u.full_name,
            bio: u.bio.unwrap_or_default(),
            profile_pic: u.profile_pic,
            native_language: u.native_language.unwrap_or_default(),
            learning_language: u.learning_language.unwrap_or_default(),
            location: u.location.unwrap_or_default(),
            is_onboarded: u.is_onboarded,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}
