//! Build-time storefront configuration.
//!
//! Values are baked into the WASM bundle with `option_env!` so the browser can
//! call the remote API directly. Nothing here is secret.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://38.180.11.233";
pub const DEFAULT_EMAIL_MARKER: &str = "#";
pub const DEFAULT_CATEGORY_LIMIT: u32 = 10;

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Remote REST host, without a trailing slash.
    pub api_base_url: String,
    /// Character appended to the login email before transmission.
    /// `None` sends the address untouched.
    pub email_marker: Option<char>,
    /// Page size requested by category blocks.
    pub category_limit: u32,
}

impl AppConfig {
    /// Load config from build-time environment variables.
    ///
    /// - `STOREFRONT_API_BASE_URL`: remote API host (default `http://38.180.11.233`)
    /// - `STOREFRONT_EMAIL_MARKER`: login email suffix (default `#`, empty disables)
    pub fn load() -> Self {
        Self::from_raw(
            option_env!("STOREFRONT_API_BASE_URL"),
            option_env!("STOREFRONT_EMAIL_MARKER"),
        )
    }

    fn from_raw(api_base_url: Option<&str>, email_marker: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let email_marker = parse_marker(email_marker.unwrap_or(DEFAULT_EMAIL_MARKER));
        Self { api_base_url, email_marker, category_limit: DEFAULT_CATEGORY_LIMIT }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_raw(None, None)
    }
}

fn parse_marker(raw: &str) -> Option<char> {
    raw.trim().chars().next()
}
