//! Build-time client configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Base URL of the banking backend, without a trailing slash.
///
/// Set `SIMPLEBANK_API_URL` when building the WASM bundle to override.
pub fn api_base_url() -> &'static str {
    normalize_base_url(option_env!("SIMPLEBANK_API_URL"))
}

fn normalize_base_url(raw: Option<&'static str>) -> &'static str {
    match raw.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/'),
        _ => DEFAULT_API_BASE_URL,
    }
}
