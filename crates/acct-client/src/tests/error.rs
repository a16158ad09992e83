use crate::ClientError;

use acct_core::{ApiKeyFlow, CoreError};

#[test]
fn test_api_error_prefers_server_message() {
    let err = ClientError::api_error(400, Some("Phone number already in use".to_string()));

    assert_eq!(err.user_message(), "Phone number already in use");
    assert!(err.to_string().contains("400"));
}

#[test]
fn test_api_error_without_message_is_generic() {
    let err = ClientError::api_error(500, None);

    assert_eq!(err.user_message(), "Something went wrong. Please try again.");
    assert!(err.to_string().contains("no message"));
}

#[test]
fn test_unauthorized_message() {
    let err = ClientError::unauthorized();

    assert!(err.is_unauthorized());
    assert!(err.user_message().contains("log in again"));
}

#[test]
fn test_core_errors_map_to_banner_text() {
    let mismatch: ClientError = CoreError::confirmation_mismatch().into();
    let busy: ClientError = CoreError::busy().into();
    let missing: ClientError = CoreError::missing_field("apiKey").into();

    assert_eq!(mismatch.user_message(), "The confirmation text does not match.");
    assert_eq!(busy.user_message(), "Please wait for the current request to finish.");
    assert_eq!(
        missing.user_message(),
        "The server response was incomplete. Please try again."
    );
    assert!(!mismatch.is_unauthorized());
}

#[test]
fn test_json_error_conversion() {
    let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: ClientError = parse_err.into();

    assert!(matches!(err, ClientError::Json { .. }));
    assert!(err.to_string().starts_with("JSON parse error"));
}

#[test]
fn test_generate_with_existing_key_points_to_regenerate() {
    let mut flow = ApiKeyFlow::from_has_key(true);

    let err = ClientError::from(flow.begin_generate().unwrap_err());

    assert_eq!(
        err.user_message(),
        "An API key already exists. Use regenerate to replace it."
    );
}

#[test]
fn test_regenerate_without_key_points_to_generate() {
    let mut flow = ApiKeyFlow::from_has_key(false);

    let err = ClientError::from(flow.request_regenerate().unwrap_err());

    assert_eq!(
        err.user_message(),
        "There is no API key yet. Generate one first."
    );
}

#[test]
fn test_other_transitions_and_missing_fields_have_specific_text() {
    let err = ClientError::from(CoreError::invalid_transition("accept a key", "idle"));
    assert_eq!(err.user_message(), "That action is not available right now.");

    let err = ClientError::from(CoreError::missing_field("apiKey"));
    assert_eq!(
        err.user_message(),
        "The server response was incomplete. Please try again."
    );
}
