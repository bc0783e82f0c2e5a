//! Authority extraction by character scanning.

/// Extracts the authority component of a URL.
///
/// The authority is everything between the scheme separator and the first
/// `/` of the path. For the hierarchical schemes `http`, `https`, and `ftp`
/// the separator is `://`; every other scheme (`urn:` in particular) is
/// treated as a single-character separator. This is a structural scan, not
/// a grammar check: the input is never validated and the function never
/// fails.
///
/// With `include_scheme` the returned slice starts at the beginning of the
/// input; without it, at the first character after the separator. Input
/// with no `:` at all is returned unchanged, as is input with a scheme but
/// no path when `include_scheme` is set.
///
/// # Examples
///
/// ```
/// use url_util::authority;
///
/// assert_eq!(authority("http://a.b/c/d", true), "http://a.b");
/// assert_eq!(authority("http://a.b/c/d", false), "a.b");
/// assert_eq!(authority("urn:isbn:123", false), "isbn:123");
/// assert_eq!(authority("noColonHere", true), "noColonHere");
/// ```
#[must_use]
pub fn authority(url: &str, include_scheme: bool) -> &str {
    let Some(colon) = url.find(':') else {
        return url;
    };
    let mut auth_start = colon + 1;
    if matches!(&url[..colon], "http" | "https" | "ftp") {
        // Skip the "//" of hierarchical schemes. Counted in characters, not
        // bytes, so a truncated or mangled scheme prefix cannot split a
        // multi-byte character.
        for c in url[auth_start..].chars().take(2) {
            auth_start += c.len_utf8();
        }
    }
    match url[auth_start..].find('/') {
        Some(path) if include_scheme => &url[..auth_start + path],
        Some(path) => &url[auth_start..auth_start + path],
        None if include_scheme => url,
        None => &url[auth_start..],
    }
}
