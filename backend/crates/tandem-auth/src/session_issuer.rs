use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use chrono::{DateTime, Duration, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

/// Session lifetime: 7 days
pub const SESSION_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// A freshly signed session token
#[derive(Debug, Clone)]
pub struct SessionToken {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Signs stateless session tokens binding a request to a user id.
///
/// Tokens are independent: issuing a new one does not invalidate earlier
/// ones, and nothing server-side can revoke them before `exp`.
pub struct SessionIssuer {
    encoding_key: EncodingKey,
    header: Header,
    ttl: Duration,
}

impl SessionIssuer {
    /// Create issuer with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            header: Header::new(Algorithm::HS256),
            ttl: Duration::seconds(SESSION_TTL_SECS),
        }
    }

    /// Issue a token for `user_id`, valid from now for the session TTL
    #[track_caller]
    pub fn issue(&self, user_id: Uuid) -> AuthErrorResult<SessionToken> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issue a token as if the current time were `issued_at`
    #[track_caller]
    pub fn issue_at(&self, user_id: Uuid, issued_at: DateTime<Utc>) -> AuthErrorResult<SessionToken> {
        let expires_at = issued_at + self.ttl;
        let claims = Claims {
            sub: user_id.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&self.header, &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(SessionToken {
            token,
            issued_at,
            expires_at,
        })
    }
}
