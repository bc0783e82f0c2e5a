//! Conditional percent-quoting for post-schema-validation `anyURI` values.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left unescaped when quoting: ASCII alphanumerics plus
/// ``/_.-~%#!*'();?:@&=+$,``. Downstream consumers depend on this exact
/// set, so it is spelled out rather than borrowed from a generic
/// reserved-character table.
const PSVI_QUOTE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'%')
    .remove(b'#')
    .remove(b'!')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b';')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b',');

/// A character that disqualifies the string from appearing verbatim in a
/// schema-validated `anyURI` value: the listed specials, controls, or
/// anything outside printable ASCII.
fn needs_quoting(c: char) -> bool {
    matches!(c, ' ' | '<' | '>' | '"' | '{' | '}' | '|' | '\\' | '^' | '~' | '`')
        || c <= '\u{1f}'
        || c >= '\u{7f}'
}

/// Percent-encodes a value only if it contains a character illegal in a
/// post-schema-validation `anyURI` value; clean strings are returned
/// borrowed and unchanged.
///
/// Because `%` is never a trigger and is in the safe set, quoting an
/// already-quoted clean string is a no-op, making the operation
/// idempotent.
///
/// # Examples
///
/// ```
/// use url_util::any_uri_quote_for_psvi;
///
/// assert_eq!(any_uri_quote_for_psvi("abc"), "abc");
/// assert_eq!(any_uri_quote_for_psvi("a b"), "a%20b");
/// assert_eq!(any_uri_quote_for_psvi("a%20b"), "a%20b");
/// ```
#[must_use]
pub fn any_uri_quote_for_psvi(uri: &str) -> Cow<'_, str> {
    if uri.chars().any(needs_quoting) {
        Cow::Owned(utf8_percent_encode(uri, PSVI_QUOTE_SET).to_string())
    } else {
        Cow::Borrowed(uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_string_unchanged() {
        assert!(matches!(any_uri_quote_for_psvi("abc"), Cow::Borrowed("abc")));
    }

    #[test]
    fn space_is_quoted() {
        assert_eq!(any_uri_quote_for_psvi("a b"), "a%20b");
    }

    #[test]
    fn safe_punctuation_survives_quoting() {
        // The space triggers quoting; the listed safe characters must
        // still come through untouched.
        assert_eq!(
            any_uri_quote_for_psvi("a b/_.-%#!*'();?:@&=+$,"),
            "a%20b/_.-%#!*'();?:@&=+$,"
        );
    }

    #[test]
    fn specials_are_quoted() {
        assert_eq!(any_uri_quote_for_psvi("a<b>c"), "a%3Cb%3Ec");
        assert_eq!(any_uri_quote_for_psvi("a\\b"), "a%5Cb");
        assert_eq!(any_uri_quote_for_psvi("a{b}c|d^e`f"), "a%7Bb%7Dc%7Cd%5Ee%60f");
        assert_eq!(any_uri_quote_for_psvi("a\"b"), "a%22b");
    }

    #[test]
    fn controls_are_quoted() {
        assert_eq!(any_uri_quote_for_psvi("a\tb"), "a%09b");
        assert_eq!(any_uri_quote_for_psvi("a\nb"), "a%0Ab");
    }

    #[test]
    fn non_ascii_is_quoted_as_utf8() {
        assert_eq!(any_uri_quote_for_psvi("caf\u{e9}"), "caf%C3%A9");
    }

    #[test]
    fn tilde_triggers_but_stays_safe() {
        // '~' is a trigger character yet also in the safe set, so the
        // output equals the input even though the quoting pass ran.
        assert_eq!(any_uri_quote_for_psvi("a~b"), "a~b");
    }

    #[test]
    fn tilde_output_requotes_to_same_value() {
        // Output containing '~' triggers another quoting pass, but the
        // pass leaves the value untouched.
        let once = any_uri_quote_for_psvi("~a b").into_owned();
        assert_eq!(once, "~a%20b");
        assert_eq!(any_uri_quote_for_psvi(&once), once);
        assert_eq!(any_uri_quote_for_psvi("~"), "~");
    }

    #[test]
    fn idempotent_on_quoted_output() {
        let once = any_uri_quote_for_psvi("a b<c>").into_owned();
        let twice = any_uri_quote_for_psvi(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn already_clean_uri_unchanged() {
        let uri = "http://example.com/path?q=1#frag";
        assert_eq!(any_uri_quote_for_psvi(uri), uri);
    }
}
