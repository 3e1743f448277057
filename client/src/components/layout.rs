//! Page chrome shared by every route.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Layout` wraps route content with the header, footer, mobile navigation,
//! cookie bar, and the auth modal. All of them read the [`AppStore`] passed in
//! by the route; nothing is pulled from context.

use leptos::prelude::*;

use super::auth_modal::AuthModal;
use super::cookie_bar::CookieBar;
use super::footer::Footer;
use super::header::Header;
use super::mobile_navigation::MobileNavigation;
use crate::state::store::AppStore;

/// Header style for a page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderVariant {
    #[default]
    Classic,
    /// Two-row header with a category strip under the brand row.
    Two,
}

#[component]
pub fn Layout(store: AppStore, #[prop(optional)] header_variant: HeaderVariant, children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Header store=store variant=header_variant/>
            <main class="layout__main">{children()}</main>
            <Footer/>
            <MobileNavigation store=store/>
            <CookieBar store=store/>
            <AuthModal store=store/>
        </div>
    }
}
