//! Helpers for turning a configured base URL into request URLs.

/// Trim surrounding whitespace and trailing slashes from a base URL.
///
/// ```
/// use confidant::utils::url::normalize_base_url;
///
/// assert_eq!(normalize_base_url("http://localhost:4000/"), "http://localhost:4000");
/// assert_eq!(normalize_base_url("  https://example.com/chat//  "), "https://example.com/chat");
/// ```
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

/// Join a base URL and an endpoint path with exactly one slash between them.
///
/// ```
/// use confidant::utils::url::construct_api_url;
///
/// assert_eq!(
///     construct_api_url("http://localhost:4000/", "/api/chat"),
///     "http://localhost:4000/api/chat"
/// );
/// ```
pub fn construct_api_url(base_url: &str, endpoint: &str) -> String {
    let endpoint = endpoint.trim_start_matches('/');
    format!("{}/{}", normalize_base_url(base_url), endpoint)
}

/// Whether the value looks like an absolute HTTP(S) URL with a host.
pub fn is_http_url(value: &str) -> bool {
    let value = value.trim();
    ["http://", "https://"].iter().any(|scheme| {
        value
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
            && value.len() > scheme.len()
    })
}
