//! Fragment splitting and percent-decoding.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

/// Splits a URL from its fragment and percent-decodes the fragment as
/// UTF-8.
///
/// Everything after the first `#` is the fragment; everything before it is
/// returned as the base. A URL without `#` yields the whole input and an
/// empty fragment. Decoding never fails: percent-triples that are not
/// valid hex pass through literally, and decoded bytes that are not valid
/// UTF-8 are replaced rather than rejected.
///
/// # Examples
///
/// ```
/// use url_util::split_decode_fragment;
///
/// assert_eq!(split_decode_fragment("http://a/b#c%20d"), ("http://a/b", "c d".into()));
/// assert_eq!(split_decode_fragment("http://a/b"), ("http://a/b", "".into()));
/// ```
#[must_use]
pub fn split_decode_fragment(url: &str) -> (&str, Cow<'_, str>) {
    match url.split_once('#') {
        Some((base, fragment)) => (base, percent_decode_str(fragment).decode_utf8_lossy()),
        None => (url, Cow::Borrowed("")),
    }
}
