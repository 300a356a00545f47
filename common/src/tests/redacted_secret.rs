use crate::RedactedSecret;

/// **VALUE**: Verifies that secrets never show up in Debug or Display output.
///
/// **WHY THIS MATTERS**: Credentials are passed through `debug!` logging on every
/// request. One derived Debug impl would leak the API key into log files.
///
/// **BUG THIS CATCHES**: Would catch someone replacing the manual impls with derives.
#[test]
fn given_secret_when_formatted_then_value_is_redacted() {
    // GIVEN: A secret
    let secret = RedactedSecret::new("super-secret-api-key");

    // WHEN: Formatting both ways
    let debug = format!("{secret:?}");
    let display = format!("{secret}");

    // THEN: Neither contains the value
    assert!(!debug.contains("super-secret"));
    assert!(!display.contains("super-secret"));
    assert!(display.contains("20 chars"));
}

#[test]
fn given_secret_when_exposed_then_returns_original_value() {
    let secret = RedactedSecret::new("abc123");
    assert_eq!(secret.expose(), "abc123");
    assert_eq!(secret.len(), 6);
}

#[test]
fn given_whitespace_secret_when_checked_then_is_empty() {
    assert!(RedactedSecret::new("   ").is_empty());
    assert!(RedactedSecret::new("").is_empty());
    assert!(!RedactedSecret::new("k").is_empty());
}

/// **VALUE**: Verifies accidental serialization fails loudly.
///
/// **BUG THIS CATCHES**: Would catch a derived `Serialize` that writes the key
/// into a persisted token file or log payload.
#[test]
fn given_secret_when_serialized_then_returns_error() {
    let secret = RedactedSecret::new("do-not-write-me");

    let result = serde_json::to_string(&secret);

    assert!(result.is_err(), "Serialization must be refused");
    let message = result.unwrap_err().to_string();
    assert!(message.contains("cannot be serialized"));
    assert!(!message.contains("do-not-write-me"));
}
