pub mod avatar;
pub mod error;
pub mod models;
pub mod validation;

pub use avatar::{AVATAR_POOL_SIZE, avatar_url, random_avatar_url};
pub use error::{CoreError, Result};
pub use models::onboarding_profile::{ONBOARDING_FIELDS, OnboardingProfile};
pub use models::user::User;
pub use validation::{MIN_PASSWORD_LENGTH, is_present, validate_email, validate_password};

#[cfg(test)]
mod tests;
