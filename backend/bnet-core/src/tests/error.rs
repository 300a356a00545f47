use crate::error::{
    ArgumentError, ConfigError, CoreError, EnumError, RegistryError, RenderError, RequestError,
};
use crate::request_client::ApiErrorPayload;

use common::HttpStatusCode;

fn remote(code: i64, throttle: i64) -> RequestError {
    let payload = ApiErrorPayload {
        error_code: code,
        throttle_seconds: throttle,
        error_status: "ThrottleLimitExceeded".to_string(),
        message: "Too many requests".to_string(),
        ..Default::default()
    };
    RequestError::remote(payload, HttpStatusCode(200))
}

#[test]
fn given_remote_error_when_accessors_called_then_payload_fields_exposed() {
    let err = remote(36, 5);

    assert_eq!(err.error_code(), Some(36));
    assert_eq!(err.throttle_seconds(), Some(5));
    assert_eq!(err.status(), Some(HttpStatusCode(200)));
    assert!(err.is_remote());
    assert!(err.to_string().starts_with("Remote Error: 36 (ThrottleLimitExceeded)"));
}

#[test]
fn given_remote_error_without_throttle_when_throttle_seconds_then_none() {
    assert_eq!(remote(7, 0).throttle_seconds(), None);
}

#[test]
fn given_transport_error_when_accessors_called_then_no_error_code() {
    let err = RequestError::transport("connection reset", None, None);

    assert_eq!(err.error_code(), None);
    assert_eq!(err.status(), None);
    assert!(err.to_string().contains("connection reset"));
}

/// **VALUE**: Errors carry the source location of the call that raised them.
///
/// **BUG THIS CATCHES**: Would catch a constructor losing `#[track_caller]`,
/// which makes every error point at the error module itself.
#[test]
fn given_constructor_when_called_then_location_points_at_caller() {
    let err = ArgumentError::type_mismatch("id", "number-like", "abc");

    let ArgumentError::Type { location, .. } = &err;
    assert!(location.file.ends_with("error.rs"), "{location}");
    assert!(err.to_string().contains("id expected to be number-like; got 'abc'"));
}

#[test]
fn given_each_kind_when_wrapped_in_core_error_then_category_matches() {
    let cases: Vec<(CoreError, &str, bool)> = vec![
        (ArgumentError::type_mismatch("id", "number-like", "x").into(), "argument", true),
        (EnumError::unknown_key("x", "quick date").into(), "enum", true),
        (RenderError::missing_parameters(vec!["a".into()]).into(), "render", true),
        (remote(99, 0).into(), "remote", false),
        (RequestError::transport("boom", None, None).into(), "transport", false),
        (ConfigError::missing_variable("BNET_API_KEY").into(), "config", true),
        (RegistryError::unknown_module("Nope", vec!["User"]).into(), "registry", true),
    ];

    for (err, category, local) in cases {
        assert_eq!(err.category(), category, "{err}");
        assert_eq!(err.is_local(), local, "{err}");
    }
}

#[test]
fn given_transparent_wrapper_when_displayed_then_inner_message_shown() {
    let err: CoreError = EnumError::unknown_key("lastcentury", "quick date").into();

    assert!(err.to_string().contains("lastcentury is not a valid quick date"));
}

#[test]
fn given_unknown_module_when_displayed_then_lists_available() {
    let err = RegistryError::unknown_module("Clan", vec!["User", "Forum"]);

    assert!(err.to_string().contains("'Clan' is not registered (available: User, Forum)"));
}
