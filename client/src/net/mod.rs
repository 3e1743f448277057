//! Networking modules for the remote storefront REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues HTTP calls, `error` classifies failures, and `types` defines
//! the wire schema shared by both.

pub mod api;
pub mod error;
pub mod types;
