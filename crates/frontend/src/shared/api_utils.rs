//! API utilities for frontend-backend communication
//!
//! The comparison server normally serves this page itself, so requests go to
//! the page's own origin. A `<meta name="api-base" content="http://host:port">`
//! tag in `index.html` points the client at a different server.

/// Get the base URL for API requests
///
/// # Returns
/// - The non-empty `content` of `<meta name="api-base">`, if present
/// - Otherwise the page origin, e.g. "http://localhost:5000"
/// - Empty string if window is not available (paths stay relative)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    if let Some(base) = meta_api_base(&window) {
        return base;
    }
    window.location().origin().unwrap_or_default()
}

fn meta_api_base(window: &web_sys::Window) -> Option<String> {
    let document = window.document()?;
    let meta = document
        .query_selector("meta[name=\"api-base\"]")
        .ok()
        .flatten()?;
    let content = meta.get_attribute("content")?;
    let content = content.trim();
    if content.is_empty() {
        None
    } else {
        Some(content.to_string())
    }
}

/// Build a full API URL from an endpoint path
///
/// # Example
/// ```rust,no_run
/// # use frontend::shared::api_utils::api_url;
/// let url = api_url("/logs");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// Join a base URL and a path with exactly one slash between them.
/// An empty base yields the path itself.
pub fn join_url(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if base.is_empty() {
        return format!("/{}", path);
    }
    format!("{}/{}", base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:5000", "/process"),
            "http://localhost:5000/process"
        );
        assert_eq!(
            join_url("http://localhost:5000/", "/logs"),
            "http://localhost:5000/logs"
        );
        assert_eq!(
            join_url("http://example.com/app", "download"),
            "http://example.com/app/download"
        );
    }

    #[test]
    fn test_join_url_empty_base() {
        assert_eq!(join_url("", "/process"), "/process");
        assert_eq!(join_url("", "logs"), "/logs");
    }
}
