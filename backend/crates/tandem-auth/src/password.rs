//! One-way credential hashing (argon2id, PHC string format).
//!
//! The async entry points run on the blocking pool.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use error_location::ErrorLocation;
use password_hash::{PasswordHash, SaltString};

const SALT_LEN: usize = 16;

/// Derive a PHC hash string from `password`
pub async fn hash_password(password: &str) -> AuthErrorResult<String> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || hash_password_blocking(&password))
        .await
        .map_err(|e| AuthError::PasswordHash {
            message: format!("hashing task failed: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?
}

/// Check `password` against a stored PHC hash. Malformed hashes never verify.
pub async fn verify_password(password: &str, hash: &str) -> AuthErrorResult<bool> {
    let password = password.to_owned();
    let hash = hash.to_owned();
    tokio::task::spawn_blocking(move || verify_password_blocking(&password, &hash))
        .await
        .map_err(|e| AuthError::PasswordHash {
            message: format!("verification task failed: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })
}

#[track_caller]
pub fn hash_password_blocking(password: &str) -> AuthErrorResult<String> {
    let mut salt_bytes = [0u8; SALT_LEN];
    getrandom::getrandom(&mut salt_bytes).map_err(|e| AuthError::PasswordHash {
        message: format!("salt generation failed: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| AuthError::PasswordHash {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let phc = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?
        .to_string();

    Ok(phc)
}

pub fn verify_password_blocking(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}
