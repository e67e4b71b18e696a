//! Query escaping for the extended query syntax

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Characters with special meaning in the extended query syntax
pub const SPECIAL_CHARS: &[char] = &[
    '\\', '(', ')', '|', '-', '!', '@', '~', '"', '&', '/', '^', '$', '=', '<',
];

static SPECIAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[\\()|\-!@~"&/^$=<]"#).expect("special character pattern is valid")
});

static ESCAPED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\\([\\()|\-!@~"&/^$=<])"#).expect("escaped character pattern is valid")
});

/// Backslash-escape every special character
pub fn escape(query: &str) -> Cow<'_, str> {
    SPECIAL_RE.replace_all(query, r"\$0")
}

/// Reverse of [`escape`]
pub fn unescape(query: &str) -> Cow<'_, str> {
    ESCAPED_RE.replace_all(query, "$1")
}

/// Whether the query contains anything [`escape`] would touch.
///
/// Lets a client skip the copy when forwarding raw user input.
pub fn needs_escaping(query: &str) -> bool {
    query.contains(SPECIAL_CHARS)
}
