//! Onboarding profile - the allow-listed set of fields a user may submit
//! when completing their profile.

use crate::{CoreError, Result as CoreErrorResult, is_present};

use std::panic::Location;

use error_location::ErrorLocation;

/// Required onboarding fields, in the order they are reported when missing.
pub const ONBOARDING_FIELDS: [&str; 5] = [
    "fullName",
    "bio",
    "nativeLanguage",
    "learningLanguage",
    "location",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingProfile {
    pub full_name: String,
    pub bio: String,
    pub native_language: String,
    pub learning_language: String,
    pub location: String,
    /// Optional avatar replacement
    pub profile_pic: Option<String>,
}

impl OnboardingProfile {
    /// Build a profile from raw request values.
    ///
    /// Absent and empty values both count as missing. On failure every
    /// missing field is reported, in `ONBOARDING_FIELDS` order.
    #[track_caller]
    pub fn from_parts(
        full_name: Option<String>,
        bio: Option<String>,
        native_language: Option<String>,
        learning_language: Option<String>,
        location: Option<String>,
        profile_pic: Option<String>,
    ) -> CoreErrorResult<Self> {
        let values = [
            &full_name,
            &bio,
            &native_language,
            &learning_language,
            &location,
        ];

        let missing: Vec<String> = ONBOARDING_FIELDS
            .iter()
            .zip(values)
            .filter(|(_, value)| !is_present(value.as_deref()))
            .map(|(name, _)| name.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(CoreError::MissingFields {
                fields: missing,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        // All five were checked above
        Ok(Self {
            full_name: full_name.unwrap_or_default(),
            bio: bio.unwrap_or_default(),
            native_language: native_language.unwrap_or_default(),
            learning_language: learning_language.unwrap_or_default(),
            location: location.unwrap_or_default(),
            profile_pic: profile_pic.filter(|p| !p.is_empty()),
        })
    }
}
