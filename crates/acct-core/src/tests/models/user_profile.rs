use crate::UserProfile;

use googletest::assert_that;
use googletest::prelude::eq;
use serde_json::json;

#[test]
fn given_camel_case_body_when_decoded_then_fields_populated() {
    // Given
    let body = json!({
        "name": "Ada",
        "email": "ada@example.com",
        "phoneNumber": "+44 1234",
        "avatarUrl": "https://cdn.example.com/ada.png",
        "hasApiKey": true,
        "tokenBalance": 1200
    });

    // When
    let profile = UserProfile::from_value(&body).unwrap();

    // Then
    assert_that!(profile.name.as_str(), eq("Ada"));
    assert_that!(profile.email.as_str(), eq("ada@example.com"));
    assert_eq!(profile.phone.as_deref(), Some("+44 1234"));
    assert_that!(profile.has_api_key, eq(true));
    assert_that!(profile.token_balance, eq(1200));
}

#[test]
fn given_user_envelope_with_snake_case_when_decoded_then_unwrapped() {
    // Given
    let body = json!({ "user": { "name": "Bo", "token_balance": 5, "has_key": false } });

    // When
    let profile = UserProfile::from_value(&body).unwrap();

    // Then
    assert_that!(profile.name.as_str(), eq("Bo"));
    assert_that!(profile.token_balance, eq(5));
    assert!(profile.avatar_url.is_none());
}

#[test]
fn given_sparse_body_when_decoded_then_defaults_apply() {
    let profile = UserProfile::from_value(&json!({})).unwrap();

    assert_eq!(profile, UserProfile::default());
}

#[test]
fn test_usage_percent() {
    let profile = UserProfile {
        token_balance: 750,
        tokens_used: Some(250),
        ..UserProfile::default()
    };
    assert_eq!(profile.usage_percent(), Some(25.0));

    let unknown = UserProfile::default();
    assert_eq!(unknown.usage_percent(), None);

    let empty = UserProfile {
        tokens_used: Some(0),
        ..UserProfile::default()
    };
    assert_eq!(empty.usage_percent(), None);
}
