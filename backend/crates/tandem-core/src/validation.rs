//! Input rules shared by signup and login.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::sync::LazyLock;

use error_location::ErrorLocation;
use regex::Regex;

pub const MIN_PASSWORD_LENGTH: usize = 6;

pub(crate) const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

// Compiled once on first use
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// A value counts as present when it was supplied and is not empty
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Check the basic `local@domain.tld` shape
#[track_caller]
pub fn validate_email(email: &str) -> CoreErrorResult<()> {
    if !EMAIL_RE.is_match(email) {
        return Err(CoreError::Validation {
            message: "Invalid email format".to_string(),
            field: Some("email".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}

#[track_caller]
pub fn validate_password(password: &str) -> CoreErrorResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Validation {
            message: format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
            field: Some("password".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}
