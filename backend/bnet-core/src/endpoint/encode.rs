//! `encodeURI`-style percent encoding.

use once_cell::sync::Lazy;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;

/// Everything except alphanumerics, unreserved marks and the reserved
/// characters that give a URI its structure.
pub const URI: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b';')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b',')
    .remove(b'#');

/// A value substituted into one path segment must not open a new segment,
/// a query or a fragment.
pub const PATH_VALUE: &AsciiSet = &URI.add(b'/').add(b'?').add(b'#');

static ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"%[0-9A-Fa-f]{2}").expect("escape pattern compiles"));

/// Percent-encode everything that is not legal in a complete URI.
///
/// A `%` already followed by two hex digits is kept as-is, which makes the
/// function idempotent.
pub fn encode_uri(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last = 0;

    for escape in ESCAPE.find_iter(input) {
        out.extend(utf8_percent_encode(&input[last..escape.start()], URI));
        out.push_str(escape.as_str());
        last = escape.end();
    }
    out.extend(utf8_percent_encode(&input[last..], URI));

    out
}

/// Encode a single path value so its delimiters stay inside the segment.
pub fn encode_path_value(value: &str) -> String {
    utf8_percent_encode(value, PATH_VALUE).to_string()
}
