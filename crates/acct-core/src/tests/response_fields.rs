use crate::response_fields::{api_key, error_message, has_api_key};

use serde_json::json;

#[test]
fn test_api_key_from_top_level_and_envelope() {
    assert_eq!(api_key(&json!({ "apiKey": "sk_1" })).as_deref(), Some("sk_1"));
    assert_eq!(api_key(&json!({ "key": "sk_2" })).as_deref(), Some("sk_2"));
    assert_eq!(
        api_key(&json!({ "data": { "api_key": "sk_3" } })).as_deref(),
        Some("sk_3")
    );
    assert_eq!(api_key(&json!({ "success": true })), None);
    assert_eq!(api_key(&json!({ "key": 42 })), None);
}

#[test]
fn test_has_api_key_variants() {
    assert_eq!(has_api_key(&json!({ "hasKey": true })), Some(true));
    assert_eq!(has_api_key(&json!({ "data": { "has_key": false } })), Some(false));
    assert_eq!(has_api_key(&json!(true)), Some(true));
    assert_eq!(has_api_key(&json!({ "hasKey": "yes" })), None);
}

#[test]
fn test_error_message_variants() {
    assert_eq!(
        error_message(&json!({ "message": "Wrong password" })).as_deref(),
        Some("Wrong password")
    );
    assert_eq!(
        error_message(&json!({ "error": "Phone already in use" })).as_deref(),
        Some("Phone already in use")
    );
    assert_eq!(
        error_message(&json!({ "error": { "code": "X", "message": "Nested" } })).as_deref(),
        Some("Nested")
    );
    assert_eq!(error_message(&json!({ "message": "   " })), None);
    assert_eq!(error_message(&json!({ "status": 500 })), None);
}

#[test]
fn test_error_message_skips_blank_candidates() {
    assert_eq!(
        error_message(&json!({ "message": "", "error": "Plan limit reached" })).as_deref(),
        Some("Plan limit reached")
    );
    assert_eq!(
        error_message(&json!({ "message": " ", "error": { "message": "Nested" } })).as_deref(),
        Some("Nested")
    );
    assert_eq!(
        error_message(&json!({ "message": "", "error": "  " })),
        None
    );
}
