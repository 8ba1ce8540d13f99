pub mod api;
pub mod app_state;
pub mod chat_sync;
pub mod error;
pub mod health;
pub mod logger;
pub mod reconciler;
pub mod routes;
pub mod shutdown;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, logout, me, onboard, signup},
        login_request::LoginRequest,
        logout_response::LogoutResponse,
        onboard_request::OnboardRequest,
        signup_request::SignupRequest,
        signup_response::SignupResponse,
        user_dto::UserDto,
        user_response::UserResponse,
    },
    chat::{chat::chat_token, chat_token_response::ChatTokenResponse},
    error::ApiError,
    error::Result as ApiResult,
    extractors::session_user::SessionUser,
};
pub use app_state::AppState;
pub use reconciler::ChatReconciler;
pub use shutdown::ShutdownCoordinator;

pub use crate::routes::build_router;
