use crate::ApiError;

use tandem_core::{CoreError, OnboardingProfile};
use tandem_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "User not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "User not found");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::validation("Invalid email format", Some("email"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "email");
    assert!(json["error"].get("missingFields").is_none());
}

#[tokio::test]
async fn test_missing_fields_serialized_in_camel_case() {
    let core = OnboardingProfile::from_parts(
        Some("Asha".into()),
        None,
        Some("Hindi".into()),
        Some("Spanish".into()),
        Some("Pune".into()),
        None,
    )
    .unwrap_err();

    let (status, json) = body_json(ApiError::from(core)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["message"], "All fields are required");
    assert_eq!(json["error"]["missingFields"], serde_json::json!(["bio"]));
}

#[tokio::test]
async fn test_duplicate_email_maps_to_400_conflict() {
    let db = DbError::DuplicateEmail {
        email: "asha@example.com".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(ApiError::from(db)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let (status, json) = body_json(ApiError::unauthorized("Invalid password")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert_eq!(json["error"]["message"], "Invalid password");
}

#[tokio::test]
async fn test_internal_error_hides_detail() {
    let db = DbError::Initialization {
        message: "Invalid UUID in users.id".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(ApiError::from(db)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "Internal Server Error");
    assert!(!json.to_string().contains("users.id"));
}

#[test]
fn test_core_validation_keeps_field() {
    let core = tandem_core::validate_password("abc").unwrap_err();

    match ApiError::from(core) {
        ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("password")),
        other => panic!("expected Validation, got {:?}", other),
    }
}

#[test]
fn test_core_missing_fields_become_missing_fields() {
    let core = CoreError::MissingFields {
        fields: vec!["fullName".into(), "location".into()],
        location: ErrorLocation::from(Location::caller()),
    };

    match ApiError::from(core) {
        ApiError::MissingFields { fields, .. } => {
            assert_eq!(fields, vec!["fullName", "location"])
        }
        other => panic!("expected MissingFields, got {:?}", other),
    }
}
