use crate::HttpStatusCode;

#[test]
fn given_status_ranges_when_categorized_then_match_http_classes() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(204).is_success());
    assert!(!HttpStatusCode(301).is_success());

    assert!(HttpStatusCode(404).is_client_error());
    assert!(!HttpStatusCode(500).is_client_error());

    assert!(HttpStatusCode(503).is_server_error());
    assert!(!HttpStatusCode(499).is_server_error());
}

#[test]
fn given_auth_failures_when_checked_then_flagged_as_unauthorized() {
    assert!(HttpStatusCode(401).is_unauthorized());
    assert!(HttpStatusCode(403).is_unauthorized());
    assert!(!HttpStatusCode(400).is_unauthorized());
}

#[test]
fn given_u16_when_converted_then_displays_raw_code() {
    let status = HttpStatusCode::from(429);
    assert_eq!(status.to_string(), "429");
}
