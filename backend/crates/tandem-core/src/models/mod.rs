pub mod onboarding_profile;
pub mod user;
