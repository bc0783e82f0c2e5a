//! Permissive URI-reference validation.

use std::sync::OnceLock;

use regex::Regex;

/// The generic `URI-reference` production from RFC 3986 appendix B, with
/// every component optional and both ends anchored. `(?s)` lets the
/// fragment swallow embedded newlines.
fn reference_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?s)^(?:([^:/?#]+):)?(?://([^/?#]*))?([^?#]*)(?:\?([^#]*))?(?:#(.*))?$")
            .expect("URI reference grammar is well-formed")
    })
}

/// Returns true if the string matches the generic RFC 3986 `URI-reference`
/// production.
///
/// Scheme, authority, path, query, and fragment are all optional, so this
/// accepts most strings, including many that are not well-formed URIs. It
/// is a syntactic sieve for obviously broken references, not a conformance
/// check; use [`is_valid_absolute`](crate::is_valid_absolute) for the
/// strict per-scheme grammar.
///
/// # Examples
///
/// ```
/// use url_util::is_valid;
///
/// assert!(is_valid("http://example.com/path?q=1#frag"));
/// assert!(is_valid("relative/path"));
/// assert!(is_valid(""));
/// ```
#[must_use]
pub fn is_valid(url: &str) -> bool {
    reference_pattern().is_match(url)
}
