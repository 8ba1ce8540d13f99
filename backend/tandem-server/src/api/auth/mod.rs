pub mod auth;
pub mod login_request;
pub mod logout_response;
pub mod onboard_request;
pub mod signup_request;
pub mod signup_response;
pub mod user_dto;
pub mod user_response;
