// Unit tests for template rendering
// HTTP behaviour of rendered URIs is covered in integration_tests/resources.rs

use crate::endpoint::{EndpointTemplate, ParamMap, render};
use crate::error::RenderError;

fn params(pairs: &[(&str, &str)]) -> ParamMap {
    pairs.iter().copied().collect()
}

/// **VALUE**: The canonical render case: path placeholders plus a query string.
///
/// **BUG THIS CATCHES**: Would catch the query string being dropped, the `?`
/// being encoded, or integer values rendering with a type suffix.
#[test]
fn given_all_placeholders_and_query_when_render_then_fills_and_appends_query() {
    // GIVEN
    let path = ParamMap::new().with("a", 1).with("b", "x");
    let query = ParamMap::new().with("c", 2);

    // WHEN
    let uri = render("/Foo/{a}/{b}/", &path, Some(&query)).unwrap();

    // THEN
    assert_eq!(uri, "/Foo/1/x/?c=2");
    assert!(!uri.contains('{') && !uri.contains('}'));
}

/// **VALUE**: Missing placeholders are reported, not sent.
///
/// **WHY THIS MATTERS**: A half-rendered URI still reaches the platform and
/// comes back as a confusing 404 instead of a local error.
#[test]
fn given_missing_placeholder_when_render_then_lists_it() {
    // GIVEN
    let path = ParamMap::new().with("a", 1);

    // WHEN
    let result = render("/Foo/{a}/{b}/", &path, None);

    // THEN
    match result {
        Err(RenderError::MissingParameters { missing, .. }) => assert_eq!(missing, vec!["b"]),
        other => panic!("Expected MissingParameters, got {other:?}"),
    }
}

/// **VALUE**: Every missing name is listed once, in order of first appearance.
///
/// **BUG THIS CATCHES**: Would catch the renderer stopping at the first missing
/// placeholder, forcing callers to fix one parameter per round trip.
#[test]
fn given_several_missing_placeholders_when_render_then_lists_each_once() {
    let result = render("/X/{b}/{a}/{b}/{c}/", &ParamMap::new(), None);

    let err = result.unwrap_err();
    assert_eq!(err.missing(), ["b", "a", "c"]);
    assert!(err.to_string().contains("b, a, c"));
}

#[test]
fn given_absent_value_when_render_then_treated_as_missing() {
    let path = ParamMap::new().with_opt::<&str>("id", None);

    let err = render("/User/{id}/", &path, None).unwrap_err();

    assert_eq!(err.missing(), ["id"]);
}

#[test]
fn given_empty_value_when_render_then_treated_as_missing() {
    let path = params(&[("id", "")]);

    let err = render("/User/{id}/", &path, None).unwrap_err();

    assert_eq!(err.missing(), ["id"]);
}

#[test]
fn given_whitespace_inside_braces_when_render_then_placeholder_matches() {
    let uri = render("/A/{ id }/", &params(&[("id", "7")]), None).unwrap();

    assert_eq!(uri, "/A/7/");
}

/// **VALUE**: Substitution is single-pass.
///
/// **BUG THIS CATCHES**: Would catch a value that looks like a placeholder
/// being expanded again (or reported missing) after substitution.
#[test]
fn given_value_that_looks_like_placeholder_when_render_then_not_rescanned() {
    let path = params(&[("a", "{b}")]);

    let uri = render("/X/{a}/", &path, None).unwrap();

    assert_eq!(uri, "/X/%7Bb%7D/");
}

#[test]
fn given_only_absent_query_values_when_render_then_no_question_mark() {
    let query = ParamMap::new()
        .with_opt::<&str>("tagstring", None)
        .with_opt::<&str>("locales", None);

    let uri = render("/Forum/", &ParamMap::new(), Some(&query)).unwrap();

    assert_eq!(uri, "/Forum/");
}

#[test]
fn given_mixed_query_values_when_render_then_absent_ones_omitted() {
    let query = ParamMap::new()
        .with_opt::<&str>("tagstring", None)
        .with("locales", "en");

    let uri = render("/Forum/", &ParamMap::new(), Some(&query)).unwrap();

    assert_eq!(uri, "/Forum/?locales=en");
}

/// **VALUE**: The query string is encoded exactly once.
///
/// **WHY THIS MATTERS**: Double encoding turns `%25` into `%2525` and the
/// platform searches for the wrong text.
#[test]
fn given_query_with_reserved_characters_when_render_then_encoded_once() {
    let query = params(&[("q", "100% legit & true")]);

    let uri = render("/User/SearchUsers/", &ParamMap::new(), Some(&query)).unwrap();

    assert_eq!(uri, "/User/SearchUsers/?q=100%25+legit+%26+true");
}

#[test]
fn given_path_value_with_space_when_render_then_percent_encoded() {
    let uri = render("/Search/{name}/", &params(&[("name", "Guardian One")]), None).unwrap();

    assert_eq!(uri, "/Search/Guardian%20One/");
}

#[test]
fn given_existing_key_when_insert_then_value_replaced_in_place() {
    let mut map = ParamMap::new().with("a", 1).with("b", 2);

    map.insert("a", Some("9".to_string()));

    assert_eq!(map.len(), 2);
    assert_eq!(map.get("a"), Some("9"));
    assert_eq!(map.present().next(), Some(("a", "9")));
}

#[test]
fn given_root_with_trailing_slash_when_full_template_then_single_separator() {
    let endpoint = EndpointTemplate::new("themes", "/User/GetAvailableThemes/");

    assert_eq!(
        endpoint.full_template("https://www.bungie.net/Platform/"),
        "https://www.bungie.net/Platform/User/GetAvailableThemes/"
    );
}

#[test]
fn given_endpoint_when_render_then_root_is_prefixed() {
    let endpoint = EndpointTemplate::new("poll", "/Forum/Poll/{topicId}/");

    let uri = endpoint
        .render("http://127.0.0.1:9000/Platform", &params(&[("topicId", "42")]), None)
        .unwrap();

    assert_eq!(uri, "http://127.0.0.1:9000/Platform/Forum/Poll/42/");
}

/// **VALUE**: Delimiters inside a path value stay inside its segment.
///
/// **WHY THIS MATTERS**: Bungie names carry a `#code` suffix. Left raw, the
/// suffix becomes a fragment and the request goes to the wrong path.
#[test]
fn given_path_value_with_uri_delimiters_when_render_then_delimiters_encoded() {
    // GIVEN
    let path = ParamMap::new().with("t", -1).with("n", "Guardian#1234");

    // WHEN
    let uri = render("/Destiny2/SearchDestinyPlayer/{t}/{n}/", &path, None).unwrap();

    // THEN
    assert_eq!(uri, "/Destiny2/SearchDestinyPlayer/-1/Guardian%231234/");
    assert_eq!(
        render("/A/{v}/", &params(&[("v", "x/y?z")]), None).unwrap(),
        "/A/x%2Fy%3Fz/"
    );
}

#[test]
fn given_path_value_and_query_when_render_then_each_encoded_once() {
    let path = params(&[("n", "a#b c")]);
    let query = params(&[("q", "é")]);

    let uri = render("/S/{n}/", &path, Some(&query)).unwrap();

    assert_eq!(uri, "/S/a%23b%20c/?q=%C3%A9");
}
