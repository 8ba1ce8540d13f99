use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors from the chat directory
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Chat API error: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Token signing failed: {source} {location}")]
    Token {
        location: ErrorLocation,
        #[source]
        source: jsonwebtoken::errors::Error,
    },
}

impl ChatError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ChatError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn api_error(status: u16, message: String) -> Self {
        ChatError::Api {
            status,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ChatError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ChatError::from_reqwest(err)
    }
}

impl From<jsonwebtoken::errors::Error> for ChatError {
    #[track_caller]
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        ChatError::Token {
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, ChatError>;
