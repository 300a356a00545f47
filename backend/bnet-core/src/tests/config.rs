use crate::config::{
    API_KEY_VAR, BNET_AUTHORIZE_URL, BNET_TOKEN_URL, CLIENT_ID_VAR, CLIENT_SECRET_VAR, HOST_VAR,
    PlatformConfig, USER_AGENT_VAR, credentials_from_lookup, platform_from_lookup,
};
use crate::error::ConfigError;

use std::collections::HashMap;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| vars.get(name).cloned()
}

#[test]
fn given_default_config_when_read_then_production_urls() {
    let config = PlatformConfig::default();

    assert_eq!(config.root_path(), "https://www.bungie.net/Platform");
    assert_eq!(config.authorize_url(), "https://www.bungie.net/en/OAuth/Authorize");
    assert_eq!(config.token_url(), "https://www.bungie.net/Platform/App/OAuth/token/");
    assert_eq!(config.authorize_url(), BNET_AUTHORIZE_URL);
    assert_eq!(config.token_url(), BNET_TOKEN_URL);
}

/// **VALUE**: A host override keeps the production path layout.
///
/// **BUG THIS CATCHES**: Would catch a trailing slash on the host producing
/// `//Platform` and breaking every mock-server test.
#[test]
fn given_host_with_trailing_slash_when_for_host_then_paths_joined_cleanly() {
    let config = PlatformConfig::for_host("http://127.0.0.1:8080/").unwrap();

    assert_eq!(config.root_path(), "http://127.0.0.1:8080/Platform");
    assert_eq!(config.authorize_url(), "http://127.0.0.1:8080/en/OAuth/Authorize");
    assert_eq!(config.token_url(), "http://127.0.0.1:8080/Platform/App/OAuth/token/");
}

#[test]
fn given_invalid_url_when_for_host_then_invalid_url_error() {
    assert!(matches!(
        PlatformConfig::for_host("not a url"),
        Err(ConfigError::InvalidUrl { name: "host", .. })
    ));
    assert!(matches!(
        PlatformConfig::for_host("ftp://example.com"),
        Err(ConfigError::InvalidUrl { .. })
    ));
}

#[test]
fn given_overrides_when_with_methods_then_each_url_replaced() {
    let config = PlatformConfig::default()
        .with_root_path("https://example.com/api/")
        .unwrap()
        .with_token_url("https://example.com/token")
        .unwrap();

    assert_eq!(config.root_path(), "https://example.com/api");
    assert_eq!(config.token_url(), "https://example.com/token");
    assert_eq!(config.authorize_url(), BNET_AUTHORIZE_URL);
}

#[test]
fn given_all_variables_when_credentials_from_lookup_then_built() {
    let credentials = credentials_from_lookup(lookup(&[
        (API_KEY_VAR, "key"),
        (CLIENT_ID_VAR, "12345"),
        (CLIENT_SECRET_VAR, "secret"),
        (USER_AGENT_VAR, "Test/1.0 AppId/12345 (+N/A;N/A)"),
    ]))
    .unwrap();

    assert_eq!(credentials.api_key().expose(), "key");
    assert_eq!(credentials.client_id(), "12345");
    assert_eq!(credentials.client_secret().map(|s| s.expose()), Some("secret"));
    assert_eq!(credentials.user_agent(), "Test/1.0 AppId/12345 (+N/A;N/A)");
}

#[test]
fn given_no_secret_when_credentials_from_lookup_then_secret_absent() {
    let credentials =
        credentials_from_lookup(lookup(&[(API_KEY_VAR, "key"), (CLIENT_ID_VAR, "12345")]))
            .unwrap();

    assert!(credentials.client_secret().is_none());
}

/// **VALUE**: A missing API key is reported by variable name.
#[test]
fn given_missing_api_key_when_credentials_from_lookup_then_names_variable() {
    let result = credentials_from_lookup(lookup(&[(CLIENT_ID_VAR, "12345")]));

    assert!(matches!(
        result,
        Err(ConfigError::MissingVariable { name: API_KEY_VAR, .. })
    ));
}

#[test]
fn given_blank_client_id_when_credentials_from_lookup_then_missing_variable() {
    let result = credentials_from_lookup(lookup(&[(API_KEY_VAR, "key"), (CLIENT_ID_VAR, "  ")]));

    assert!(matches!(
        result,
        Err(ConfigError::MissingVariable { name: CLIENT_ID_VAR, .. })
    ));
}

#[test]
fn given_non_numeric_client_id_when_credentials_from_lookup_then_credentials_error() {
    let result = credentials_from_lookup(lookup(&[(API_KEY_VAR, "key"), (CLIENT_ID_VAR, "abc")]));

    assert!(matches!(result, Err(ConfigError::Credentials(_))));
}

#[test]
fn given_host_variable_when_platform_from_lookup_then_overridden() {
    let config = platform_from_lookup(lookup(&[(HOST_VAR, "http://localhost:3000")])).unwrap();

    assert_eq!(config.root_path(), "http://localhost:3000/Platform");
}

#[test]
fn given_no_host_variable_when_platform_from_lookup_then_production() {
    let config = platform_from_lookup(lookup(&[])).unwrap();

    assert_eq!(config, PlatformConfig::default());
}
