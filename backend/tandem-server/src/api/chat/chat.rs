//! Chat REST API handlers

use crate::{ApiResult, AppState, ChatTokenResponse, SessionUser};

use axum::{Json, extract::State};

/// GET /api/chat/token
///
/// Mint a chat client token for the signed-in user
pub async fn chat_token(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
) -> ApiResult<Json<ChatTokenResponse>> {
    let token = state.chat.issue_user_token(&user_id.to_string())?;

    Ok(Json(ChatTokenResponse { token }))
}
