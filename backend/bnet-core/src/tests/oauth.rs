use crate::config::PlatformConfig;
use crate::oauth::session::UserSession;
use crate::oauth::{OAuthManager, RefreshGrant};
use crate::request_client::RequestClient;

use models::{Credentials, OAuthToken};

use std::sync::Arc;

fn manager() -> OAuthManager {
    let credentials = Credentials::builder()
        .with_api_key("key")
        .with_client_id("12345")
        .with_client_secret("secret")
        .build()
        .unwrap();
    let client = RequestClient::new(Arc::new(credentials), PlatformConfig::default()).unwrap();
    OAuthManager::new(Arc::new(client))
}

/// **VALUE**: The authorization URL carries the client id and the state.
///
/// **BUG THIS CATCHES**: Would catch an unencoded state value breaking the
/// query string on the authorize page.
#[test]
fn given_state_when_authorization_url_then_includes_encoded_state() {
    let url = manager().authorization_url(Some("a b&c"));

    assert_eq!(
        url,
        "https://www.bungie.net/en/OAuth/Authorize?response_type=code&client_id=12345&state=a+b%26c"
    );
}

#[test]
fn given_no_state_when_authorization_url_then_state_omitted() {
    let url = manager().authorization_url(None);

    assert!(url.ends_with("?response_type=code&client_id=12345"));
}

#[test]
fn given_token_or_string_when_into_refresh_grant_then_same_refresh_token() {
    let token = OAuthToken::new("access", "refresh-1");
    let raw = String::from("refresh-1");

    assert_eq!(RefreshGrant::from(&token).refresh_token(), "refresh-1");
    assert_eq!(RefreshGrant::from(raw.as_str()).refresh_token(), "refresh-1");
    assert_eq!(RefreshGrant::from(&raw).refresh_token(), "refresh-1");
}

#[test]
fn given_new_session_when_inspected_then_unauthenticated() {
    let session = UserSession::default();

    assert!(!session.is_authorized());
    assert!(session.token().is_none());
}

#[test]
fn given_authorized_session_when_sign_out_then_token_dropped() {
    let mut session = UserSession::Authorized(OAuthToken::new("a", "r"));

    session.sign_out();

    assert_eq!(session, UserSession::Unauthenticated);
}
