//! Site header with brand, navigation and the account control.

use leptos::prelude::*;
use leptos_router::components::A;

use super::layout::HeaderVariant;
use crate::app::STORE_NAME;
use crate::state::store::AppStore;
use crate::state::ui::ModalView;

/// Secondary links shown by [`HeaderVariant::Two`].
const NAV_LINKS: &[(&str, &str)] = &[("Shops", "/"), ("Offers", "/"), ("FAQ", "/"), ("Contact", "/")];

#[component]
pub fn Header(store: AppStore, variant: HeaderVariant) -> impl IntoView {
    let class = match variant {
        HeaderVariant::Classic => "header header--classic",
        HeaderVariant::Two => "header header--two",
    };

    view! {
        <header class=class>
            <div class="header__row">
                <A href="/" {..} class="header__brand">{STORE_NAME}</A>
                <AccountControl store=store/>
            </div>
            {(variant == HeaderVariant::Two)
                .then(|| {
                    view! {
                        <nav class="header__nav">
                            {NAV_LINKS
                                .iter()
                                .map(|(label, href)| view! { <A href={*href} {..} class="header__nav-link">{*label}</A> })
                                .collect_view()}
                        </nav>
                    }
                })}
        </header>
    }
}

/// "Sign in" when signed out; the user's label and "Sign out" otherwise.
#[component]
pub fn AccountControl(store: AppStore) -> impl IntoView {
    let signed_in = move || store.auth.with(|auth| auth.is_authorized());
    let label = move || {
        store
            .auth
            .with(|auth| auth.session.as_ref().and_then(|s| s.display_name()))
            .unwrap_or_else(|| "Account".to_owned())
    };

    view! {
        <Show
            when=signed_in
            fallback=move || {
                view! {
                    <button class="btn btn--primary" on:click=move |_| store.open_modal(ModalView::Login)>
                        "Sign in"
                    </button>
                }
            }
        >
            <div class="account">
                <span class="account__name">{label}</span>
                <button class="btn btn--ghost" on:click=move |_| store.sign_out()>
                    "Sign out"
                </button>
            </div>
        </Show>
    }
}
