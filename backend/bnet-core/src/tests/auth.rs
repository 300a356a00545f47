use crate::request_client::Authorization;

use models::{Credentials, OAuthToken};

use base64::{Engine as _, engine::general_purpose::STANDARD};

fn credentials(secret: Option<&str>) -> Credentials {
    let mut builder = Credentials::builder()
        .with_api_key("api-key")
        .with_client_id("12345");
    if let Some(secret) = secret {
        builder = builder.with_client_secret(secret);
    }
    builder.build().unwrap()
}

/// **VALUE**: A user token selects Bearer authorization.
#[test]
fn given_token_when_select_then_bearer() {
    let token = OAuthToken::new("access-abc", "refresh-xyz");

    let auth = Authorization::select(&credentials(Some("s3cret")), Some(&token));

    assert_eq!(auth.header_value(), "Bearer access-abc");
    assert_eq!(auth.mode(), "bearer");
}

/// **VALUE**: Without a token, Basic carries `client_id:client_secret`.
///
/// **BUG THIS CATCHES**: Would catch the id and secret being swapped or
/// joined with something other than a colon.
#[test]
fn given_no_token_when_select_then_basic_with_client_pair() {
    let auth = Authorization::select(&credentials(Some("s3cret")), None);

    let expected = format!("Basic {}", STANDARD.encode("12345:s3cret"));
    assert_eq!(auth.header_value(), expected);
}

#[test]
fn given_no_secret_when_select_then_basic_with_empty_secret() {
    let auth = Authorization::select(&credentials(None), None);

    assert_eq!(auth.header_value(), "Basic MTIzNDU6");
}

#[test]
fn given_token_with_empty_access_when_select_then_falls_back_to_basic() {
    let token = OAuthToken::new("  ", "refresh-xyz");

    let auth = Authorization::select(&credentials(Some("s3cret")), Some(&token));

    assert_eq!(auth.mode(), "basic");
}

#[test]
fn given_authorization_when_debug_formatted_then_secret_hidden() {
    let auth = Authorization::select(&credentials(Some("s3cret")), None);

    let debug = format!("{auth:?}");

    assert!(debug.contains("REDACTED"));
    assert!(!debug.contains(&STANDARD.encode("12345:s3cret")));
}
