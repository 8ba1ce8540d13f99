use tandem_core::{OnboardingProfile, User};

/// Creates a not-yet-onboarded user with a stub credential hash
pub fn create_test_user(email: &str) -> User {
    User::new(
        "Test User".to_string(),
        email.to_string(),
        "$argon2id$v=19$m=19456,t=2,p=1$stub$stub".to_string(),
        "https://avatar.iran.liara.run/public/1.png".to_string(),
    )
}

/// Creates a complete onboarding profile
pub fn create_onboarding_profile() -> OnboardingProfile {
    OnboardingProfile {
        full_name: "Asha Rao".to_string(),
        bio: "Learning Spanish one conversation at a time".to_string(),
        native_language: "hindi".to_string(),
        learning_language: "spanish".to_string(),
        location: "Pune, India".to_string(),
        profile_pic: None,
    }
}
