//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (cookies, user agent) from page
//! and component logic so the rest of the crate stays testable natively.

pub mod cookie_consent;
pub mod cookies;
pub mod device;
pub mod session_store;
