//! User repository - the credential store.
//!
//! ## Email uniqueness
//!
//! Duplicate registrations are rejected by the `idx_users_email` UNIQUE
//! index, never by a read-then-insert check. Two concurrent signups for the
//! same address both reach `INSERT`; exactly one commits and the other gets
//! `DbError::DuplicateEmail`.
//!
//! ## Chat sync flag
//!
//! `chat_sync_pending` is set by every write that changes what the chat
//! directory mirrors (id, name, avatar) and cleared by `mark_chat_synced`
//! only if the row has not changed since the synced snapshot was taken.
//!
//! A failed upsert stamps `chat_sync_attempted_at` past every other stamp,
//! so the pending queue is served least-recently-attempted first and a user
//! the directory keeps rejecting cannot hold the head of the queue.

use crate::{DbError, Result as DbErrorResult};

use tandem_core::{OnboardingProfile, User};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

const USER_COLUMNS: &str = "id, email, password_hash, full_name, bio, profile_pic, \
     native_language, learning_language, location, is_onboarded, chat_sync_pending, \
     created_at, updated_at";

#[derive(FromRow)]
struct UserRow {
    id: String,
    email: String,
    password_hash: String,
    full_name: String,
    bio: Option<String>,
    profile_pic: String,
    native_language: Option<String>,
    learning_language: Option<String>,
    location: Option<String>,
    is_onboarded: bool,
    chat_sync_pending: bool,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    #[track_caller]
    fn try_from(r: UserRow) -> DbErrorResult<Self> {
        Ok(User {
            id: Uuid::parse_str(&r.id).map_err(|e| DbError::Initialization {
                message: format!("Invalid UUID in users.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            email: r.email,
            password_hash: r.password_hash,
            full_name: r.full_name,
            bio: r.bio,
            profile_pic: r.profile_pic,
            native_language: r.native_language,
            learning_language: r.learning_language,
            location: r.location,
            is_onboarded: r.is_onboarded,
            chat_sync_pending: r.chat_sync_pending,
            created_at: from_millis(r.created_at, "users.created_at")?,
            updated_at: from_millis(r.updated_at, "users.updated_at")?,
        })
    }
}

#[track_caller]
fn from_millis(millis: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new user. Fails with `DuplicateEmail` on a uniqueness violation.
    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        let result = sqlx::query(
            r#"
                INSERT INTO users (
                    id, email, password_hash, full_name, bio, profile_pic,
                    native_language, learning_language, location,
                    is_onboarded, chat_sync_pending, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.full_name)
        .bind(&user.bio)
        .bind(&user.profile_pic)
        .bind(&user.native_language)
        .bind(&user.learning_language)
        .bind(&user.location)
        .bind(user.is_onboarded)
        .bind(user.chat_sync_pending)
        .bind(user.created_at.timestamp_millis())
        .bind(user.updated_at.timestamp_millis())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(DbError::DuplicateEmail {
                    email: user.email.clone(),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    /// Exact, case-sensitive lookup by login email
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = ?"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    /// Apply an onboarding profile and mark the user onboarded.
    ///
    /// Only the allow-listed profile fields are written. `is_onboarded` is
    /// only ever set to 1 here. Returns `None` when the user does not exist.
    pub async fn complete_onboarding(
        &self,
        id: Uuid,
        profile: &OnboardingProfile,
    ) -> DbErrorResult<Option<User>> {
        let now = Utc::now().timestamp_millis();

        let result = sqlx::query(
            r#"
                UPDATE users
                SET full_name = ?,
                    bio = ?,
                    native_language = ?,
                    learning_language = ?,
                    location = ?,
                    profile_pic = COALESCE(?, profile_pic),
                    is_onboarded = 1,
                    chat_sync_pending = 1,
                    chat_sync_attempted_at = NULL,
                    updated_at = MAX(?, updated_at + 1)
                WHERE id = ?
            "#,
        )
        .bind(&profile.full_name)
        .bind(&profile.bio)
        .bind(&profile.native_language)
        .bind(&profile.learning_language)
        .bind(&profile.location)
        .bind(&profile.profile_pic)
        .bind(now)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Clear the pending flag if the row still matches the synced snapshot.
    ///
    /// Returns false when the user changed after `user` was read; the flag
    /// then stays set for the next reconciliation sweep.
    pub async fn mark_chat_synced(&self, user: &User) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET chat_sync_pending = 0,
                    chat_sync_attempted_at = NULL
                WHERE id = ? AND updated_at = ?
            "#,
        )
        .bind(user.id.to_string())
        .bind(user.updated_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Move a pending user to the back of the sync queue after a failed upsert
    pub async fn record_chat_sync_failure(&self, id: Uuid) -> DbErrorResult<()> {
        let now = Utc::now().timestamp_millis();

        sqlx::query(
            r#"
                UPDATE users
                SET chat_sync_attempted_at = MAX(
                    ?,
                    (SELECT COALESCE(MAX(chat_sync_attempted_at), 0) + 1 FROM users)
                )
                WHERE id = ? AND chat_sync_pending = 1
            "#,
        )
        .bind(now)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Users whose chat directory record is stale.
    ///
    /// Never-attempted users come first, then the least recently failed.
    pub async fn find_chat_sync_pending(&self, limit: i64) -> DbErrorResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE chat_sync_pending = 1 \
             ORDER BY chat_sync_attempted_at IS NOT NULL, chat_sync_attempted_at, updated_at \
             LIMIT ?"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(User::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }
}
