use crate::{
    AuthConfig, ChatConfig, ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig,
    ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub chat: ChatConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for TANDEM_CONFIG_DIR env var, else use ./.tandem/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply TANDEM_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: TANDEM_CONFIG_DIR env var > ./.tandem/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("TANDEM_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".tandem"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.chat.validate()?;
        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get absolute path to the log file, if file logging is enabled.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(file) = &self.logging.file else {
            return Ok(None);
        };
        let config_dir = Self::config_dir()?;
        Ok(Some(config_dir.join(&self.logging.dir).join(file)))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (cors: {})",
            self.server.host,
            self.server.port,
            self.server.cors_origins.join(", ")
        );
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  auth: HS256 ({}, secret {})",
            self.auth.environment,
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "missing"
            }
        );
        info!(
            "  chat: {} (timeout={}s, reconcile every {}s, batch {})",
            self.chat.base_url,
            self.chat.timeout_secs,
            self.chat.reconcile_interval_secs,
            self.chat.reconcile_batch_size
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("none")
        );
    }

    fn apply_env_overrides(&mut self) -> ConfigErrorResult<()> {
        // Server
        Self::apply_env_string("TANDEM_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("TANDEM_SERVER_PORT", &mut self.server.port);
        Self::apply_env_list("TANDEM_CORS_ORIGINS", &mut self.server.cors_origins);

        // Database
        Self::apply_env_string("TANDEM_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "TANDEM_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_option_string("TANDEM_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        if let Ok(val) = std::env::var("TANDEM_ENVIRONMENT") {
            // Rejected rather than defaulted: it controls the Secure cookie flag
            self.auth.environment = val
                .parse()
                .map_err(|e| ConfigError::auth(format!("TANDEM_ENVIRONMENT: {}", e)))?;
        }

        // Chat
        Self::apply_env_option_string("TANDEM_CHAT_API_KEY", &mut self.chat.api_key);
        Self::apply_env_option_string("TANDEM_CHAT_API_SECRET", &mut self.chat.api_secret);
        Self::apply_env_string("TANDEM_CHAT_BASE_URL", &mut self.chat.base_url);
        Self::apply_env_parse("TANDEM_CHAT_TIMEOUT_SECS", &mut self.chat.timeout_secs);
        Self::apply_env_parse(
            "TANDEM_CHAT_RECONCILE_INTERVAL_SECS",
            &mut self.chat.reconcile_interval_secs,
        );
        Self::apply_env_parse(
            "TANDEM_CHAT_RECONCILE_BATCH_SIZE",
            &mut self.chat.reconcile_batch_size,
        );

        // Logging
        Self::apply_env_parse("TANDEM_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TANDEM_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("TANDEM_LOG_FILE", &mut self.logging.file);

        Ok(())
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Apply environment variable override for comma-separated lists
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
    }
}
