use crate::chat_sync;

use tandem_chat::ChatDirectory;
use tandem_db::{Result as DbErrorResult, UserRepository};

use std::sync::Arc;
use std::time::Duration;

use log::{error, info};
use sqlx::SqlitePool;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Periodically re-upserts users whose chat directory record is stale
pub struct ChatReconciler {
    pool: SqlitePool,
    chat: Arc<dyn ChatDirectory>,
    interval: Duration,
    batch_size: u32,
}

impl ChatReconciler {
    pub fn new(
        pool: SqlitePool,
        chat: Arc<dyn ChatDirectory>,
        interval: Duration,
        batch_size: u32,
    ) -> Self {
        Self {
            pool,
            chat,
            interval,
            batch_size,
        }
    }

    /// Run one pass over at most `batch_size` pending users.
    /// Returns how many were brought in sync.
    pub async fn sweep(&self) -> DbErrorResult<usize> {
        let repo = UserRepository::new(self.pool.clone());
        let pending = repo
            .find_chat_sync_pending(i64::from(self.batch_size))
            .await?;

        if pending.is_empty() {
            return Ok(0);
        }

        let mut synced = 0;
        for user in &pending {
            if chat_sync::sync_user(&self.pool, self.chat.as_ref(), user).await {
                synced += 1;
            }
        }

        info!(
            "Chat reconciliation: {}/{} pending users synced",
            synced,
            pending.len()
        );
        Ok(synced)
    }

    /// Sweep on every tick until `shutdown` fires
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Err(e) = self.sweep().await {
                        error!("Chat reconciliation sweep failed: {}", e);
                    }
                }
                _ = shutdown.recv() => {
                    info!("Chat reconciler stopping");
                    break;
                }
            }
        }
    }

    pub fn spawn(self, shutdown: broadcast::Receiver<()>) -> JoinHandle<()> {
        info!(
            "Chat reconciler started: every {}s, batch {}",
            self.interval.as_secs(),
            self.batch_size
        );
        tokio::spawn(self.run(shutdown))
    }
}
