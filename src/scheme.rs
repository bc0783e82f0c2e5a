//! Fast absolute/relative scheme classification.

/// Returns true if the URL is absolute by scheme inspection alone.
///
/// `http`, `https`, and `ftp` URLs are absolute when the scheme is
/// followed by `//`; `urn:` URIs are always absolute; any other scheme,
/// or a string with no `:`, is classified as relative. This is a cheaper,
/// narrower test than [`is_valid_absolute`](crate::is_valid_absolute) for
/// call sites that only need the 3-way split — note it accepts `urn:`
/// where the strict grammar does not.
///
/// # Examples
///
/// ```
/// use url_util::is_absolute;
///
/// assert!(is_absolute("http://x"));
/// assert!(!is_absolute("http:relative"));
/// assert!(is_absolute("urn:foo"));
/// assert!(!is_absolute("plain/path"));
/// ```
#[must_use]
pub fn is_absolute(url: &str) -> bool {
    match url.split_once(':') {
        Some(("http" | "https" | "ftp", rest)) => rest.starts_with("//"),
        Some(("urn", _)) => true,
        _ => false,
    }
}
