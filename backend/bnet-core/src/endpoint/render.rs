use crate::endpoint::ParamMap;
use crate::endpoint::encode::{encode_path_value, encode_uri};
use crate::error::RenderError;

use log::trace;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use url::form_urlencoded;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\s*([\w.]+)\s*\}").expect("placeholder pattern compiles"));

/// Fill `{name}` placeholders, append the query string and percent-encode.
///
/// Substitution is a single pass, so a value that itself looks like a
/// placeholder is never expanded. Absent and empty values leave their
/// placeholder in place and the call fails with every missing name listed
/// once, in order of first appearance.
///
/// Path values are encoded as single segments, so a `/`, `?` or `#` inside a
/// value cannot change the shape of the URI. The query string is appended
/// only when at least one query value is present. Encoding keeps existing `%XX` escapes, so the form-encoded query
/// is not encoded twice.
pub fn render(
    template: &str,
    path_params: &ParamMap,
    query_params: Option<&ParamMap>,
) -> Result<String, RenderError> {
    let mut missing: Vec<String> = Vec::new();

    let substituted = PLACEHOLDER.replace_all(template, |caps: &Captures| {
        let name = &caps[1];
        match path_params.get(name).filter(|value| !value.is_empty()) {
            Some(value) => encode_path_value(value),
            None => {
                if !missing.iter().any(|seen| seen == name) {
                    missing.push(name.to_string());
                }
                caps[0].to_string()
            }
        }
    });

    if !missing.is_empty() {
        return Err(RenderError::missing_parameters(missing));
    }

    let mut uri = substituted.into_owned();

    if let Some(query) = query_params.filter(|q| q.has_present_values()) {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in query.present() {
            serializer.append_pair(name, value);
        }
        uri.push('?');
        uri.push_str(&serializer.finish());
    }

    let encoded = encode_uri(&uri);
    trace!("Rendered endpoint template {template} -> {encoded}");
    Ok(encoded)
}
