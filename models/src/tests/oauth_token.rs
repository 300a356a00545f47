use crate::OAuthToken;

/// **VALUE**: Verifies the token endpoint's JSON maps onto the token record.
///
/// **BUG THIS CATCHES**: Would catch field renames (camelCase vs snake_case) that
/// silently leave `refresh_token` empty and break every later refresh.
#[test]
fn given_token_endpoint_json_when_deserialized_then_all_fields_populated() {
    // GIVEN: A token endpoint response body
    let body = r#"{
        "access_token": "CKW0EhKGAgAg",
        "token_type": "Bearer",
        "expires_in": 3600,
        "refresh_token": "CLi0EhKGAgAg",
        "refresh_expires_in": 7776000,
        "membership_id": "4611686018467284386"
    }"#;

    // WHEN
    let token: OAuthToken = serde_json::from_str(body).unwrap();

    // THEN
    assert_eq!(token.access_token, "CKW0EhKGAgAg");
    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.expires_in, 3600);
    assert_eq!(token.refresh_token, "CLi0EhKGAgAg");
    assert_eq!(token.refresh_expires_in, 7_776_000);
    assert_eq!(token.membership_id, "4611686018467284386");
}

#[test]
fn given_public_client_response_when_deserialized_then_refresh_fields_default() {
    let body = r#"{"access_token":"abc","expires_in":3600,"membership_id":42}"#;

    let token: OAuthToken = serde_json::from_str(body).unwrap();

    assert_eq!(token.token_type, "Bearer");
    assert!(!token.has_refresh_token());
    assert_eq!(token.membership_id, "42");
}

#[test]
fn given_json_without_access_token_when_deserialized_then_fails() {
    let result = serde_json::from_str::<OAuthToken>(r#"{"token_type":"Bearer"}"#);
    assert!(result.is_err());
}

#[test]
fn given_token_when_debug_formatted_then_token_values_hidden() {
    let token = OAuthToken::new("access-value", "refresh-value");

    let debug = format!("{token:?}");

    assert!(!debug.contains("access-value"));
    assert!(!debug.contains("refresh-value"));
    assert!(debug.contains("Bearer"));
}

#[test]
fn given_token_when_serialized_and_reloaded_then_caller_can_persist_it() {
    let mut token = OAuthToken::new("a", "r");
    token.membership_id = String::from("7");

    let json = serde_json::to_string(&token).unwrap();
    let reloaded: OAuthToken = serde_json::from_str(&json).unwrap();

    assert_eq!(reloaded, token);
}

#[test]
fn given_blank_access_token_when_checked_then_reports_missing() {
    assert!(!OAuthToken::new("  ", "r").has_access_token());
    assert!(OAuthToken::new("a", "r").has_access_token());
}
