//! Bottom navigation bar shown on small screens.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::store::AppStore;
use crate::state::ui::ModalView;

#[component]
pub fn MobileNavigation(store: AppStore) -> impl IntoView {
    let on_account = move |_| {
        if !store.auth.with_untracked(|auth| auth.is_authorized()) {
            store.open_modal(ModalView::Login);
        }
    };

    view! {
        <nav class="mobile-nav" aria-label="Mobile navigation">
            <A href="/" {..} class="mobile-nav__item">"Home"</A>
            <button class="mobile-nav__item" on:click=on_account>
                {move || if store.auth.with(|auth| auth.is_authorized()) { "Account" } else { "Sign in" }}
            </button>
        </nav>
    }
}
