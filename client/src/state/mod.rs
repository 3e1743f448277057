//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `ui`) so the pure transitions can be
//! unit tested; `store` wraps both in signals for the component tree.

pub mod auth;
pub mod store;
pub mod ui;
