use crate::UserDto;

use tandem_core::User;

fn user() -> User {
    User::new(
        "Asha".to_string(),
        "asha@example.com".to_string(),
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        "https://avatar.iran.liara.run/public/3.png".to_string(),
    )
}

#[test]
fn test_user_dto_uses_camel_case_keys() {
    let json = serde_json::to_value(UserDto::from(user())).unwrap();

    for key in [
        "id",
        "email",
        "fullName",
        "bio",
        "profilePic",
        "nativeLanguage",
        "learningLanguage",
        "location",
        "isOnboarded",
        "createdAt",
        "updatedAt",
    ] {
        assert!(json.get(key).is_some(), "missing key {}", key);
    }
    assert_eq!(json["isOnboarded"], false);
    assert_eq!(json["bio"], "");
}

#[test]
fn test_user_dto_never_exposes_credentials() {
    let json = serde_json::to_string(&UserDto::from(user())).unwrap();

    assert!(!json.contains("argon2"));
    assert!(!json.contains("password"));
    assert!(!json.contains("chatSyncPending"));
}
