use tandem_auth::{JwtValidator, SessionIssuer};
use tandem_chat::ChatDirectory;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state, built once at startup and read-only afterwards
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub session_issuer: Arc<SessionIssuer>,
    pub jwt_validator: Arc<JwtValidator>,
    pub chat: Arc<dyn ChatDirectory>,
    /// Add `Secure` to session cookies (production)
    pub secure_cookies: bool,
}

impl AppState {
    /// Build state where sessions are signed and validated with one HS256 secret
    pub fn new(
        pool: SqlitePool,
        jwt_secret: &[u8],
        chat: Arc<dyn ChatDirectory>,
        secure_cookies: bool,
    ) -> Self {
        Self {
            pool,
            session_issuer: Arc::new(SessionIssuer::with_hs256(jwt_secret)),
            jwt_validator: Arc::new(JwtValidator::with_hs256(jwt_secret)),
            chat,
            secure_cookies,
        }
    }
}
