//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page wraps its content in the shared `Layout` and hands the
//! `AppStore` down to it.

pub mod category;
pub mod home;
pub mod not_found;
