mod auth_config;
mod chat_config;
mod config;
mod database_config;
mod environment;
mod error;
mod log_level;
mod logging_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use chat_config::ChatConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use environment::Environment;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5001;
const MIN_PORT: u16 = 1024;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

const DEFAULT_DATABASE_FILENAME: &str = "tandem.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;

const MIN_JWT_SECRET_LENGTH: usize = 32;

const DEFAULT_CHAT_BASE_URL: &str = "https://chat.stream-io-api.com";
const DEFAULT_CHAT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_RECONCILE_INTERVAL_SECS: u64 = 60;
const DEFAULT_RECONCILE_BATCH_SIZE: u32 = 50;
const MAX_RECONCILE_BATCH_SIZE: u32 = 1000;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
