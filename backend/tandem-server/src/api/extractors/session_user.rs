//! Axum extractor for cookie/bearer session authentication

use crate::{ApiError, AppState};

use tandem_auth::extract_session_token;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

/// The authenticated user id from a valid session token.
///
/// Reads the `jwt` cookie, falling back to `Authorization: Bearer`. Any
/// missing, expired, or tampered token rejects the request with 401.
#[derive(Debug, Clone, Copy)]
pub struct SessionUser(pub Uuid);

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let token = extract_session_token(&parts.headers)
                .ok_or_else(|| ApiError::unauthorized("Unauthorized - No token provided"))?;

            let claims = state.jwt_validator.validate(&token).map_err(|e| {
                log::debug!("Rejected session token: {}", e);
                ApiError::unauthorized("Unauthorized - Invalid token")
            })?;

            let user_id = claims.user_id().map_err(|e| {
                log::warn!("Session token with malformed subject: {}", e);
                ApiError::unauthorized("Unauthorized - Invalid token")
            })?;

            Ok(SessionUser(user_id))
        }
    }
}
