//! # storefront-client
//!
//! Leptos + WASM frontend for the storefront: layout shell, category
//! carousels, and the login / sign-up modal.
//!
//! The crate is compiled twice: with `ssr` for server rendering inside the
//! Axum binary, and with `hydrate` as the browser bundle. Browser-only calls
//! (HTTP, cookies, user agent) are gated on `hydrate` and degrade to inert
//! fallbacks on the server.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
