use crate::{CoreError, OnboardingProfile};

fn some(s: &str) -> Option<String> {
    Some(s.to_string())
}

#[test]
fn test_complete_profile_is_accepted() {
    let profile = OnboardingProfile::from_parts(
        some("Asha Rao"),
        some("Learning Spanish"),
        some("Hindi"),
        some("Spanish"),
        some("Pune"),
        None,
    )
    .unwrap();

    assert_eq!(profile.full_name, "Asha Rao");
    assert_eq!(profile.learning_language, "Spanish");
    assert!(profile.profile_pic.is_none());
}

#[test]
fn test_single_missing_field_is_reported() {
    let result = OnboardingProfile::from_parts(
        some("Asha Rao"),
        None,
        some("Hindi"),
        some("Spanish"),
        some("Pune"),
        None,
    );

    match result {
        Err(CoreError::MissingFields { fields, .. }) => assert_eq!(fields, vec!["bio"]),
        other => panic!("expected MissingFields, got {:?}", other),
    }
}

#[test]
fn test_empty_string_counts_as_missing() {
    let result = OnboardingProfile::from_parts(
        some("Asha Rao"),
        some("bio"),
        some(""),
        some("Spanish"),
        some("Pune"),
        None,
    );

    match result {
        Err(CoreError::MissingFields { fields, .. }) => {
            assert_eq!(fields, vec!["nativeLanguage"])
        }
        other => panic!("expected MissingFields, got {:?}", other),
    }
}

#[test]
fn test_missing_fields_keep_canonical_order() {
    let result = OnboardingProfile::from_parts(None, some("bio"), None, some("Spanish"), None, None);

    match result {
        Err(CoreError::MissingFields { fields, .. }) => {
            assert_eq!(fields, vec!["fullName", "nativeLanguage", "location"])
        }
        other => panic!("expected MissingFields, got {:?}", other),
    }
}

#[test]
fn test_all_fields_missing() {
    let result = OnboardingProfile::from_parts(None, None, None, None, None, None);

    match result {
        Err(CoreError::MissingFields { fields, .. }) => assert_eq!(
            fields,
            vec![
                "fullName",
                "bio",
                "nativeLanguage",
                "learningLanguage",
                "location"
            ]
        ),
        other => panic!("expected MissingFields, got {:?}", other),
    }
}

#[test]
fn test_empty_profile_pic_is_dropped() {
    let profile = OnboardingProfile::from_parts(
        some("Asha Rao"),
        some("bio"),
        some("Hindi"),
        some("Spanish"),
        some("Pune"),
        some(""),
    )
    .unwrap();

    assert!(profile.profile_pic.is_none());
}
