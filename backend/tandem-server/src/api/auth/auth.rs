//! Auth REST API handlers
//!
//! Signup and login issue a session cookie; logout clears it. Onboarding
//! and the current-user lookup require a valid session.

use crate::{
    ApiError, ApiResult, AppState, LoginRequest, LogoutResponse, OnboardRequest, SessionUser,
    SignupRequest, SignupResponse, UserDto, UserResponse, chat_sync,
};

use tandem_auth::{clear_session_cookie, hash_password, session_cookie, verify_password};
use tandem_core::{OnboardingProfile, User, is_present, random_avatar_url, validate_email, validate_password};
use tandem_db::UserRepository;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use http::{HeaderValue, StatusCode, header::SET_COOKIE};
use log::info;
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/auth/signup
///
/// Create an account, sign the user in, and mirror them into the chat directory
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(req) = payload?;

    let (Some(full_name), Some(email), Some(password)) = (
        required(req.full_name),
        required(req.email),
        required(req.password),
    ) else {
        return Err(ApiError::validation("All fields are required", None));
    };

    validate_password(&password)?;
    validate_email(&email)?;

    let password_hash = hash_password(&password).await?;
    let user = User::new(full_name, email, password_hash, random_avatar_url());

    // The UNIQUE index decides duplicate emails, including concurrent signups
    let repo = UserRepository::new(state.pool.clone());
    repo.create(&user).await?;
    info!("User {} signed up", user.id);

    chat_sync::sync_user(&state.pool, state.chat.as_ref(), &user).await;

    let cookie = issue_session_cookie(&state, user.id)?;

    Ok((
        StatusCode::CREATED,
        [(SET_COOKIE, cookie)],
        Json(SignupResponse {
            message: "User created successfully".to_string(),
            user: user.into(),
        }),
    )
        .into_response())
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(req) = payload?;

    let (Some(email), Some(password)) = (required(req.email), required(req.password)) else {
        return Err(ApiError::validation(
            "Email and password are required",
            None,
        ));
    };

    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .find_by_email(&email)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    if !verify_password(&password, &user.password_hash).await? {
        return Err(ApiError::unauthorized("Invalid password"));
    }

    let cookie = issue_session_cookie(&state, user.id)?;
    info!("User {} logged in", user.id);

    Ok(([(SET_COOKIE, cookie)], Json(UserResponse::ok(user.into()))).into_response())
}

/// POST or GET /api/auth/logout
///
/// Always succeeds. The token stays valid until expiry for anyone holding a copy.
pub async fn logout(State(state): State<AppState>) -> ApiResult<Response> {
    let cookie = clear_session_cookie(state.secure_cookies)
        .map_err(|e| ApiError::internal(format!("Failed to build clear-cookie header: {}", e)))?;

    Ok((
        [(SET_COOKIE, cookie)],
        Json(LogoutResponse {
            success: true,
            message: "Logout successful".to_string(),
        }),
    )
        .into_response())
}

/// POST /api/auth/onboard
///
/// Complete the profile and mark the user onboarded. Repeating it overwrites
/// the profile and leaves the user onboarded.
pub async fn onboard(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    payload: Result<Json<OnboardRequest>, JsonRejection>,
) -> ApiResult<Json<UserResponse>> {
    let Json(req) = payload?;

    let profile = OnboardingProfile::from_parts(
        req.full_name,
        req.bio,
        req.native_language,
        req.learning_language,
        req.location,
        req.profile_pic,
    )?;

    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .complete_onboarding(user_id, &profile)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    info!("User {} completed onboarding", user.id);

    chat_sync::sync_user(&state.pool, state.chat.as_ref(), &user).await;

    Ok(Json(UserResponse::ok(user.into())))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
) -> ApiResult<Json<UserResponse>> {
    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(UserResponse::ok(UserDto::from(user))))
}

// =============================================================================
// Helpers
// =============================================================================

fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| is_present(Some(v.as_str())))
}

fn issue_session_cookie(state: &AppState, user_id: Uuid) -> ApiResult<HeaderValue> {
    let session = state.session_issuer.issue(user_id)?;
    session_cookie(&session.token, state.secure_cookies)
        .map_err(|e| ApiError::internal(format!("Failed to build session cookie: {}", e)))
}
