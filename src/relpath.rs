//! Relative-path computation between document URIs.

/// Rewrites `target_uri` relative to the directory containing `base_uri`.
///
/// Network URLs are never relativized: a target starting with `http://`
/// is returned unchanged. Otherwise the result is the shortest `..`/segment
/// walk from the base document's directory to the target, with backslash
/// separators normalized to forward slashes. Paths are compared lexically:
/// `.` segments are ignored, but `..` segments already present in either
/// input are kept as ordinary segments rather than collapsed, so an
/// unnormalized base like `/docs/a/../base.xml` is three directory
/// segments deep, not one. No percent-encoding is applied.
///
/// # Examples
///
/// ```
/// use url_util::relative_uri;
///
/// assert_eq!(
///     relative_uri("http://a/b/base.xml", "http://a/c/target.xml"),
///     "http://a/c/target.xml"
/// );
/// assert_eq!(relative_uri("/docs/base.xml", "/docs/target.xml"), "target.xml");
/// assert_eq!(relative_uri("/docs/a/base.xml", "/docs/b/t.xml"), "../b/t.xml");
/// ```
#[must_use]
pub fn relative_uri(base_uri: &str, target_uri: &str) -> String {
    if target_uri.starts_with("http://") {
        return target_uri.to_string();
    }
    let base = base_uri.replace('\\', "/");
    let target = target_uri.replace('\\', "/");
    let base_dir = base.rfind('/').map_or("", |i| &base[..i]);

    let base_parts: Vec<&str> = split_segments(base_dir);
    let target_parts: Vec<&str> = split_segments(&target);

    let common = base_parts
        .iter()
        .zip(target_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let ups = base_parts.len() - common;
    let mut parts: Vec<&str> = vec![".."; ups];
    parts.extend(&target_parts[common..]);
    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty() && *s != ".").collect()
}
