//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Backend address used when no build-time override is given
pub const DEFAULT_API_BASE: &str = "http://localhost:3005";

/// Get the base URL for API requests
///
/// Resolved at build time: `BAKERY_API_BASE` when set, otherwise
/// [`DEFAULT_API_BASE`]. A trailing slash is dropped so paths can be
/// appended directly.
///
/// # Example
/// ```ignore
/// let url = format!("{}/api/orders", api_base());
/// ```
pub fn api_base() -> String {
    normalize_base(option_env!("BAKERY_API_BASE").unwrap_or(DEFAULT_API_BASE))
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DEFAULT_API_BASE.to_string();
    }
    trimmed.trim_end_matches('/').to_string()
}
