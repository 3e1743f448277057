//! Cookie-consent banner persistence.
//!
//! Acceptance is remembered for a year in the `cookies_accepted` cookie. SSR
//! treats every visitor as not yet accepted; the hydrated app re-reads the
//! cookie on mount.

#[cfg(test)]
#[path = "cookie_consent_test.rs"]
mod cookie_consent_test;

use super::cookies;

pub const CONSENT_COOKIE: &str = "cookies_accepted";
pub const CONSENT_DAYS: u32 = 365;

fn is_accepted_value(value: Option<&str>) -> bool {
    value == Some("true")
}

/// Whether the visitor already accepted cookies.
pub fn accepted() -> bool {
    is_accepted_value(cookies::read(CONSENT_COOKIE).as_deref())
}

/// Cookie assignment recording acceptance.
pub fn consent_cookie() -> String {
    cookies::cookie_pair(CONSENT_COOKIE, "true", Some(CONSENT_DAYS))
}

/// Record acceptance. Failure only costs showing the banner again next visit.
pub fn accept() {
    if let Err(e) = cookies::write(&consent_cookie()) {
        log::warn!("failed to persist cookie consent: {e}");
    }
}
