use std::env;

use codeit_types::{API_BASE_ENV, DEFAULT_API_BASE};

/// Strip whitespace and trailing slashes so routes can be appended with `/`
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Pick the service base URL: explicit value, then `CODEIT_API_BASE_URL`, then loopback
pub fn resolve_base_url(explicit: Option<&str>) -> String {
    let chosen = explicit
        .map(str::to_string)
        .filter(|url| !url.trim().is_empty())
        .or_else(|| env::var(API_BASE_ENV).ok().filter(|url| !url.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    normalize_base_url(&chosen)
}
