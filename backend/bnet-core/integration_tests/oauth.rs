use crate::helpers::{CLIENT_SECRET, basic_header, client_for, credentials};

use bnet_core::error::OAuthError;
use bnet_core::oauth::session::UserSession;
use bnet_core::{OAuthManager, OAuthToken, PlatformConfig, RequestClient};

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN_PATH: &str = "/Platform/App/OAuth/token/";

fn token_body(access: &str, refresh: &str) -> serde_json::Value {
    json!({
        "access_token": access,
        "token_type": "Bearer",
        "expires_in": 3600,
        "refresh_token": refresh,
        "refresh_expires_in": 7776000,
        "membership_id": "4611686018"
    })
}

/// **VALUE**: The authorization-code grant posts a form with Basic auth and
/// returns the issued token.
///
/// **WHY THIS MATTERS**: The token endpoint only accepts confidential
/// clients authenticated with Basic; Bearer or a JSON body is rejected.
///
/// **BUG THIS CATCHES**: Would catch the grant type being misspelled, the
/// body being sent as JSON, or a user token leaking into the exchange.
#[tokio::test]
async fn given_code_when_request_access_token_then_form_posted_with_basic_auth() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(header("Authorization", basic_header().as_str()))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string("grant_type=authorization_code&code=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("access-1", "refresh-1")))
        .expect(1)
        .mount(&server)
        .await;
    let manager = OAuthManager::new(client_for(&server, Some(CLIENT_SECRET)));

    // WHEN
    let token = manager.request_access_token("abc123").await.unwrap();

    // THEN
    assert_eq!(token.access_token, "access-1");
    assert_eq!(token.refresh_token, "refresh-1");
    assert_eq!(token.expires_in, 3600);
    assert_eq!(token.membership_id, "4611686018");
}

#[tokio::test]
async fn given_token_when_refresh_access_token_then_refresh_grant_posted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(header("Authorization", basic_header().as_str()))
        .and(body_string("grant_type=refresh_token&refresh_token=refresh-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("access-2", "refresh-2")))
        .expect(2)
        .mount(&server)
        .await;
    let manager = OAuthManager::new(client_for(&server, Some(CLIENT_SECRET)));
    let current = OAuthToken::new("access-1", "refresh-1");

    let from_token = manager.refresh_access_token(&current).await.unwrap();
    let from_str = manager.refresh_access_token("refresh-1").await.unwrap();

    assert_eq!(from_token.access_token, "access-2");
    assert_eq!(from_token, from_str);
}

/// **VALUE**: OAuth `error` bodies become a typed rejection.
///
/// **BUG THIS CATCHES**: Would catch a spent refresh token being reported as
/// a malformed token, hiding that the user must sign in again.
#[tokio::test]
async fn given_invalid_grant_when_refresh_then_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "AuthorizationRecordExpired"
        })))
        .mount(&server)
        .await;
    let manager = OAuthManager::new(client_for(&server, Some(CLIENT_SECRET)));

    let err = manager.refresh_access_token("stale").await.unwrap_err();

    assert!(err.is_invalid_grant(), "{err}");
    match err {
        OAuthError::Rejected { description, .. } => {
            assert_eq!(description, "AuthorizationRecordExpired")
        }
        other => panic!("Expected Rejected, got {other}"),
    }
}

#[tokio::test]
async fn given_rejection_served_as_text_when_exchange_then_still_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_raw(
            r#"{"error":"invalid_request","error_description":"bad code"}"#,
            "text/plain",
        ))
        .mount(&server)
        .await;
    let manager = OAuthManager::new(client_for(&server, Some(CLIENT_SECRET)));

    let err = manager.request_access_token("bad").await.unwrap_err();

    assert!(matches!(err, OAuthError::Rejected { ref error, .. } if error == "invalid_request"));
}

#[tokio::test]
async fn given_body_without_token_fields_when_exchange_then_malformed_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;
    let manager = OAuthManager::new(client_for(&server, Some(CLIENT_SECRET)));

    let err = manager.request_access_token("abc").await.unwrap_err();

    assert!(matches!(err, OAuthError::MalformedToken { .. }));
}

/// **VALUE**: Local checks fail before any request is sent.
///
/// **BUG THIS CATCHES**: Would catch an exchange being attempted without a
/// secret, which the platform answers with an opaque 401.
#[tokio::test]
async fn given_missing_secret_or_empty_code_when_exchange_then_fails_without_io() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let no_secret = OAuthManager::new(client_for(&server, None));
    let with_secret = OAuthManager::new(client_for(&server, Some(CLIENT_SECRET)));

    assert!(matches!(
        no_secret.request_access_token("abc").await,
        Err(OAuthError::MissingClientSecret { .. })
    ));
    assert!(matches!(
        with_secret.request_access_token("  ").await,
        Err(OAuthError::Argument(_))
    ));
    assert!(matches!(
        with_secret.refresh_access_token(&OAuthToken::new("a", "")).await,
        Err(OAuthError::Argument(_))
    ));
}

// ----------------------------------------------------------------------------
// UserSession
// ----------------------------------------------------------------------------

#[tokio::test]
async fn given_session_when_authorize_then_refresh_then_holds_newest_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string("grant_type=authorization_code&code=code-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("access-1", "refresh-1")))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string("grant_type=refresh_token&refresh_token=refresh-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("access-2", "refresh-2")))
        .mount(&server)
        .await;
    let manager = OAuthManager::new(client_for(&server, Some(CLIENT_SECRET)));
    let mut session = UserSession::default();

    session.authorize(&manager, "code-1").await.unwrap();
    assert_eq!(session.token().map(|t| t.access_token.as_str()), Some("access-1"));

    session.refresh(&manager).await.unwrap();
    assert_eq!(session.token().map(|t| t.access_token.as_str()), Some("access-2"));
}

/// **VALUE**: A rejected refresh token signs the session out.
///
/// **BUG THIS CATCHES**: Would catch a dead token staying in the session and
/// being retried forever.
#[tokio::test]
async fn given_authorized_session_when_refresh_rejected_then_unauthenticated() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "expired"
        })))
        .mount(&server)
        .await;
    let manager = OAuthManager::new(client_for(&server, Some(CLIENT_SECRET)));
    let mut session = UserSession::Authorized(OAuthToken::new("access-1", "refresh-1"));

    let result = session.refresh(&manager).await;

    assert!(matches!(result, Err(OAuthError::Rejected { .. })));
    assert_eq!(session, UserSession::Unauthenticated);
}

/// **VALUE**: A refresh that never reached the token endpoint keeps the
/// session.
///
/// **WHY THIS MATTERS**: The refresh token is still valid. Dropping it on a
/// network blip forces the user through the whole authorization flow again.
///
/// **BUG THIS CATCHES**: Would catch the session being taken before the
/// request and never restored on a transport failure.
#[tokio::test]
async fn given_unreachable_host_when_session_refresh_then_token_kept() {
    // GIVEN
    let config = PlatformConfig::for_host("http://127.0.0.1:9").unwrap();
    let client = RequestClient::new(Arc::new(credentials(Some(CLIENT_SECRET))), config).unwrap();
    let manager = OAuthManager::new(Arc::new(client));
    let original = OAuthToken::new("access-1", "refresh-1");
    let mut session = UserSession::Authorized(original.clone());

    // WHEN
    let result = session.refresh(&manager).await;

    // THEN
    assert!(matches!(result, Err(OAuthError::Request(_))), "{result:?}");
    assert!(session.is_authorized());
    assert_eq!(session.token(), Some(&original));
}

#[tokio::test]
async fn given_server_error_when_session_refresh_then_token_kept() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>down</html>"))
        .mount(&server)
        .await;
    let manager = OAuthManager::new(client_for(&server, Some(CLIENT_SECRET)));
    let mut session = UserSession::Authorized(OAuthToken::new("access-1", "refresh-1"));

    let result = session.refresh(&manager).await;

    assert!(result.is_err());
    assert_eq!(session.token().map(|t| t.refresh_token.as_str()), Some("refresh-1"));
}

#[tokio::test]
async fn given_missing_client_secret_when_session_refresh_then_token_kept() {
    let server = MockServer::start().await;
    let manager = OAuthManager::new(client_for(&server, None));
    let mut session = UserSession::Authorized(OAuthToken::new("access-1", "refresh-1"));

    let result = session.refresh(&manager).await;

    assert!(matches!(result, Err(OAuthError::MissingClientSecret { .. })));
    assert!(session.is_authorized());
}

#[tokio::test]
async fn given_unauthenticated_session_when_refresh_then_not_authorized() {
    let server = MockServer::start().await;
    let manager = OAuthManager::new(client_for(&server, Some(CLIENT_SECRET)));
    let mut session = UserSession::default();

    let result = session.refresh(&manager).await;

    assert!(matches!(result, Err(OAuthError::NotAuthorized { .. })));
}
