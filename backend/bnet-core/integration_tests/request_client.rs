use crate::helpers::{API_KEY, CLIENT_SECRET, basic_header, client_for, credentials, platform_uri};

use bnet_core::error::RequestError;
use bnet_core::endpoint::ParamMap;
use bnet_core::{OAuthToken, PlatformConfig, PostBody, RequestClient};

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ----------------------------------------------------------------------------
// Headers and authorization
// ----------------------------------------------------------------------------

/// **VALUE**: Every request carries the API key, the user agent and Basic
/// authorization when no user token is supplied.
///
/// **WHY THIS MATTERS**: The platform rejects calls without `X-API-KEY`, and
/// throttles applications that do not identify themselves.
///
/// **BUG THIS CATCHES**: Would catch a header dropped when the request
/// builder was refactored, or Basic built from the wrong fields.
#[tokio::test]
async fn given_no_token_when_get_then_sends_api_key_agent_and_basic_auth() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Platform/User/GetAvailableThemes/"))
        .and(header("X-API-KEY", API_KEY))
        .and(header("User-Agent", "bnet-tests/0.0 AppId/12345 (+N/A;N/A)"))
        .and(header("Authorization", basic_header().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Response": [{"userThemeId": 1}],
            "ErrorCode": 1,
            "ErrorStatus": "Success"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server, Some(CLIENT_SECRET));

    // WHEN
    let document = client
        .get(&platform_uri(&server, "/User/GetAvailableThemes/"), None)
        .await
        .unwrap();

    // THEN: the whole document is returned, not just `Response`
    assert_eq!(document["ErrorCode"], 1);
    assert_eq!(document["Response"][0]["userThemeId"], 1);
}

#[tokio::test]
async fn given_token_when_get_then_sends_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Platform/User/GetMembershipsForCurrentUser/"))
        .and(header("Authorization", "Bearer user-access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ErrorCode": 1})))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server, Some(CLIENT_SECRET));
    let token = OAuthToken::new("user-access", "user-refresh");

    let result = client
        .get(
            &platform_uri(&server, "/User/GetMembershipsForCurrentUser/"),
            Some(&token),
        )
        .await;

    assert!(result.is_ok());
}

// ----------------------------------------------------------------------------
// Classification
// ----------------------------------------------------------------------------

/// **VALUE**: A platform error code surfaces as a remote error with throttle data.
///
/// **BUG THIS CATCHES**: Would catch the classifier keying off the HTTP
/// status, which is 200 for most platform errors.
#[tokio::test]
async fn given_throttle_error_code_when_get_then_remote_error_with_throttle() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ErrorCode": 36,
            "ThrottleSeconds": 10,
            "ErrorStatus": "ThrottleLimitExceededMomentarily",
            "Message": "Please wait"
        })))
        .mount(&server)
        .await;
    let client = client_for(&server, None);

    let err = client
        .get(&platform_uri(&server, "/Trending/Categories/"), None)
        .await
        .unwrap_err();

    assert!(err.is_remote());
    assert_eq!(err.error_code(), Some(36));
    assert_eq!(err.throttle_seconds(), Some(10));
}

#[tokio::test]
async fn given_html_page_with_ok_status_when_get_then_transport_error_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html>Down for maintenance</html>", "text/html"),
        )
        .mount(&server)
        .await;
    let client = client_for(&server, None);

    let err = client
        .get(&platform_uri(&server, "/Destiny2/Manifest/"), None)
        .await
        .unwrap_err();

    match err {
        RequestError::Transport { status, body, .. } => {
            assert_eq!(status.map(|s| s.0), Some(200));
            assert!(body.unwrap_or_default().contains("maintenance"));
        }
        other => panic!("Expected Transport error, got {other}"),
    }
}

#[tokio::test]
async fn given_server_error_with_error_code_when_get_then_remote_error_keeps_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "ErrorCode": 5,
            "ErrorStatus": "SystemDisabled"
        })))
        .mount(&server)
        .await;
    let client = client_for(&server, None);

    let err = client
        .get(&platform_uri(&server, "/Destiny2/Manifest/"), None)
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), Some(5));
    assert_eq!(err.status().map(|s| s.0), Some(503));
}

/// **VALUE**: A network failure is a transport error, never a panic.
#[tokio::test]
async fn given_unreachable_host_when_get_then_transport_error() {
    let server = MockServer::start().await;
    let client = client_for(&server, None);

    let result = client.get("http://127.0.0.1:1/Platform/Destiny2/Manifest/", None).await;

    assert!(matches!(result, Err(RequestError::Transport { status: None, .. })));
}

#[tokio::test]
async fn given_relative_uri_when_get_then_encode_error_before_io() {
    let server = MockServer::start().await;
    let client = client_for(&server, None);

    let result = client.get("/Destiny2/Manifest/", None).await;

    assert!(matches!(result, Err(RequestError::Encode { .. })));
}

// ----------------------------------------------------------------------------
// POST bodies
// ----------------------------------------------------------------------------

/// **VALUE**: JSON bodies are sent with their content type, and POST accepts
/// `ErrorCode: 0`.
///
/// **BUG THIS CATCHES**: Would catch successful action endpoints being
/// reported as failures.
#[tokio::test]
async fn given_json_body_when_post_then_sent_as_json_and_code_zero_succeeds() {
    let server = MockServer::start().await;
    let body = json!({"itemId": "6917529", "state": true});
    Mock::given(method("POST"))
        .and(path("/Platform/Destiny2/Actions/Items/SetLockState/"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(&body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Response": 0,
            "ErrorCode": 0
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server, None);
    let token = OAuthToken::new("user-access", "user-refresh");

    let document = client
        .post(
            &platform_uri(&server, "/Destiny2/Actions/Items/SetLockState/"),
            PostBody::Json(body),
            Some(&token),
        )
        .await
        .unwrap();

    assert_eq!(document["ErrorCode"], 0);
}

#[tokio::test]
async fn given_form_body_when_post_then_form_encoded_with_length() {
    let server = MockServer::start().await;
    let expected = "grant_type=refresh_token&refresh_token=abc+def";
    Mock::given(method("POST"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(header("Content-Length", expected.len().to_string().as_str()))
        .and(body_string(expected))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server, None);
    let form = ParamMap::new()
        .with("grant_type", "refresh_token")
        .with("refresh_token", "abc def");

    let document = client
        .post(&platform_uri(&server, "/App/OAuth/token/"), PostBody::Form(form), None)
        .await
        .unwrap();

    assert_eq!(document["ok"], true);
}

/// **VALUE**: `Content-Length` counts bytes, not characters.
///
/// **WHY THIS MATTERS**: Names and messages are routinely non-ASCII. A length
/// taken from the character count truncates the body on the wire and the
/// platform rejects it as malformed JSON.
///
/// **BUG THIS CATCHES**: Would catch the length being computed from the
/// string's `chars()` instead of the encoded bytes.
#[tokio::test]
async fn given_multibyte_json_body_when_post_then_content_length_is_byte_length() {
    // GIVEN
    let server = MockServer::start().await;
    let body = json!({"name": "é☃"});
    let encoded = serde_json::to_vec(&body).unwrap();
    let char_count = String::from_utf8(encoded.clone()).unwrap().chars().count();
    assert_ne!(encoded.len(), char_count);
    Mock::given(method("POST"))
        .and(body_json(&body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ErrorCode": 1})))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server, None);

    // WHEN
    client
        .post(&platform_uri(&server, "/Echo/"), PostBody::Json(body), None)
        .await
        .unwrap();

    // THEN
    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];
    let content_length = request
        .headers
        .get("content-length")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<usize>().ok());
    assert_eq!(content_length, Some(encoded.len()));
    assert_eq!(request.body, encoded);
}

// ----------------------------------------------------------------------------
// Injected transport
// ----------------------------------------------------------------------------

/// **VALUE**: Timeouts belong to the injected client.
///
/// **BUG THIS CATCHES**: Would catch the core building its own client and
/// ignoring the caller's timeout.
#[tokio::test]
async fn given_injected_client_with_timeout_when_server_slow_then_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"ErrorCode": 1}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;
    let http = reqwest::Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let config = PlatformConfig::for_host(&server.uri()).unwrap();
    let client =
        RequestClient::with_http_client(http, Arc::new(credentials(None)), config);

    let result = client.get(&platform_uri(&server, "/Destiny2/Manifest/"), None).await;

    assert!(matches!(result, Err(RequestError::Transport { .. })));
}
