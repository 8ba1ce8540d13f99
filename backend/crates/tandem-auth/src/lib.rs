pub mod claims;
pub mod error;
pub mod jwt_validator;
pub mod password;
pub mod session_cookie;
pub mod session_issuer;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;
pub use password::{hash_password, verify_password};
pub use session_cookie::{
    SESSION_COOKIE_NAME, clear_session_cookie, extract_session_token, session_cookie,
};
pub use session_issuer::{SESSION_TTL_SECS, SessionIssuer, SessionToken};
