//! Best-effort mirroring of users into the chat directory.
//!
//! A failed upsert never fails the request that triggered it. The user
//! keeps `chat_sync_pending` set and moves to the back of the reconciler's
//! queue.

use tandem_chat::{ChatDirectory, ChatUser};
use tandem_core::User;
use tandem_db::UserRepository;

use log::{debug, warn};
use sqlx::SqlitePool;

/// Upsert `user` and clear its pending flag. Returns true if the flag was cleared.
pub async fn sync_user(pool: &SqlitePool, chat: &dyn ChatDirectory, user: &User) -> bool {
    let repo = UserRepository::new(pool.clone());

    if let Err(e) = chat.upsert_user(&ChatUser::from(user)).await {
        warn!("Chat sync failed for user {}, left pending: {}", user.id, e);
        if let Err(e) = repo.record_chat_sync_failure(user.id).await {
            warn!("Failed to record chat sync attempt for user {}: {}", user.id, e);
        }
        return false;
    }

    match repo.mark_chat_synced(user).await {
        Ok(true) => {
            debug!("Chat user {} in sync", user.id);
            true
        }
        Ok(false) => {
            debug!("User {} changed during chat sync, left pending", user.id);
            false
        }
        Err(e) => {
            warn!("Failed to clear chat sync flag for user {}: {}", user.id, e);
            false
        }
    }
}
