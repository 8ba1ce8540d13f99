use crate::User;

#[test]
fn test_user_new_is_not_onboarded() {
    let user = User::new(
        "Asha".to_string(),
        "asha@example.com".to_string(),
        "$argon2id$stub".to_string(),
        "https://avatar.iran.liara.run/public/7.png".to_string(),
    );

    assert_eq!(user.full_name, "Asha");
    assert_eq!(user.email, "asha@example.com");
    assert!(!user.is_onboarded);
    assert!(user.chat_sync_pending);
    assert!(user.bio.is_none());
    assert_eq!(user.created_at, user.updated_at);
}

#[test]
fn test_user_ids_are_unique() {
    let a = User::new("A".into(), "a@x.io".into(), "h".into(), "p".into());
    let b = User::new("B".into(), "b@x.io".into(), "h".into(), "p".into());

    assert_ne!(a.id, b.id);
}

#[test]
fn test_user_debug_redacts_password_hash() {
    let user = User::new(
        "Asha".into(),
        "asha@example.com".into(),
        "$argon2id$v=19$secret-material".into(),
        "p".into(),
    );

    let debug = format!("{:?}", user);

    assert!(!debug.contains("secret-material"));
    assert!(debug.contains("<redacted>"));
}
