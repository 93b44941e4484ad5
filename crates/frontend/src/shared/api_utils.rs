//! API utilities for frontend-backend communication
//!
//! Resolves the origin that `/api/files/*` requests go to.

/// Origin baked in at build time, e.g. `DOCCHAT_API_BASE=http://localhost:8000`
const API_BASE_OVERRIDE: Option<&str> = option_env!("DOCCHAT_API_BASE");

/// Get the base URL for API requests
///
/// # Returns
/// - `DOCCHAT_API_BASE` when set at build time (trailing `/` removed)
/// - otherwise the origin of the current page, like "http://localhost:8000"
/// - empty string (relative URLs) if window is not available
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/files/upload");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:8000/", "/api/files/chat"),
            "http://localhost:8000/api/files/chat"
        );
        assert_eq!(join_url("", "/api/files/list?session_id="), "/api/files/list?session_id=");
    }
}
