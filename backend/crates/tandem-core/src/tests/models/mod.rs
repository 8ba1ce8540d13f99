mod onboarding_profile;
mod user;
