//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components that touch session or modal state take the `AppStore` as a
//! prop. Presentational pieces (cards, loaders, alerts) take plain data.

pub mod alert;
pub mod auth_modal;
pub mod card_loader;
pub mod category_block;
pub mod category_card;
pub mod cookie_bar;
pub mod footer;
pub mod forget_password_panel;
pub mod header;
pub mod layout;
pub mod login_panel;
pub mod mobile_navigation;
pub mod section_header;
pub mod sign_up_panel;
