use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CHAT_BASE_URL, DEFAULT_CHAT_TIMEOUT_SECS,
    DEFAULT_RECONCILE_BATCH_SIZE, DEFAULT_RECONCILE_INTERVAL_SECS, MAX_RECONCILE_BATCH_SIZE,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub base_url: String,
    /// Per-request timeout for directory calls
    pub timeout_secs: u64,
    /// Seconds between reconciliation sweeps
    pub reconcile_interval_secs: u64,
    /// Pending users upserted per sweep
    pub reconcile_batch_size: u32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_secret: None,
            base_url: String::from(DEFAULT_CHAT_BASE_URL),
            timeout_secs: DEFAULT_CHAT_TIMEOUT_SECS,
            reconcile_interval_secs: DEFAULT_RECONCILE_INTERVAL_SECS,
            reconcile_batch_size: DEFAULT_RECONCILE_BATCH_SIZE,
        }
    }
}

impl ChatConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.api_key.as_deref().is_none_or(str::is_empty) {
            return Err(ConfigError::chat(
                "chat.api_key is required (set TANDEM_CHAT_API_KEY)",
            ));
        }

        if self.api_secret.as_deref().is_none_or(str::is_empty) {
            return Err(ConfigError::chat(
                "chat.api_secret is required (set TANDEM_CHAT_API_SECRET)",
            ));
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::chat(format!(
                "chat.base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::chat("chat.timeout_secs must be > 0"));
        }

        if self.reconcile_interval_secs == 0 {
            return Err(ConfigError::chat("chat.reconcile_interval_secs must be > 0"));
        }

        if self.reconcile_batch_size == 0 || self.reconcile_batch_size > MAX_RECONCILE_BATCH_SIZE {
            return Err(ConfigError::chat(format!(
                "chat.reconcile_batch_size must be 1-{}, got {}",
                MAX_RECONCILE_BATCH_SIZE, self.reconcile_batch_size
            )));
        }

        Ok(())
    }
}
