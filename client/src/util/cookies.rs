//! Browser cookie helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session and consent persistence both live in `document.cookie`. Formatting
//! and parsing are pure so they can be tested natively; only [`read`] and
//! [`write`] touch the DOM, and both no-op outside the browser.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

use std::fmt::Write as _;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Escape set matching `encodeURIComponent`.
const COOKIE_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const SECONDS_PER_DAY: u64 = 86_400;

pub fn encode_value(value: &str) -> String {
    utf8_percent_encode(value, COOKIE_VALUE).to_string()
}

pub fn decode_value(value: &str) -> String {
    percent_decode_str(value).decode_utf8_lossy().into_owned()
}

/// Build a `document.cookie` assignment for `name`.
///
/// Without `max_age_days` the cookie lives for the browser session.
pub fn cookie_pair(name: &str, value: &str, max_age_days: Option<u32>) -> String {
    let mut out = format!("{name}={}; path=/", encode_value(value));
    if let Some(days) = max_age_days {
        let _ = write!(out, "; max-age={}", u64::from(days) * SECONDS_PER_DAY);
    }
    out
}

/// Assignment that deletes `name`.
pub fn expired_cookie(name: &str) -> String {
    format!("{name}=; path=/; max-age=0")
}

/// Find and decode `name` in a `document.cookie` style header.
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|part| part.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| decode_value(value))
}

/// Read a cookie from the current document.
pub fn read(name: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let header = html_document()?.cookie().ok()?;
        find_cookie(&header, name)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}

/// Apply one cookie assignment to the current document.
///
/// # Errors
///
/// Returns a description when there is no document or the browser rejects
/// the assignment.
pub fn write(assignment: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let doc = html_document().ok_or_else(|| "no document".to_owned())?;
        doc.set_cookie(assignment).map_err(|e| format!("{e:?}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = assignment;
        Err("not available on server".to_owned())
    }
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}
