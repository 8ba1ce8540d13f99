use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Startup failures
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] tandem_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] tandem_db::DbError),

    #[error("Chat client error: {0}")]
    Chat(#[from] tandem_chat::ChatError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error: {source} {location}")]
    Io {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl From<std::io::Error> for ServerError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        ServerError::Io {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for ServerError {
    #[track_caller]
    fn from(source: sqlx::migrate::MigrateError) -> Self {
        ServerError::Database(tandem_db::DbError::from(source))
    }
}

impl From<sqlx::Error> for ServerError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        ServerError::Database(tandem_db::DbError::from(source))
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
