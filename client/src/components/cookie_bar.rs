//! Cookie-consent banner, hidden once accepted.

use leptos::prelude::*;

use crate::state::store::AppStore;
use crate::util::cookie_consent;

#[component]
pub fn CookieBar(store: AppStore) -> impl IntoView {
    let on_accept = move |_| {
        cookie_consent::accept();
        store.ui.update(|ui| ui.cookies_accepted = true);
    };

    view! {
        <Show when=move || !store.ui.with(|ui| ui.cookies_accepted)>
            <div class="cookie-bar" role="region" aria-label="Cookie consent">
                <p class="cookie-bar__text">
                    "We use cookies to keep you signed in and to improve your experience."
                </p>
                <button class="btn btn--primary" on:click=on_accept>
                    "Accept cookies"
                </button>
            </div>
        </Show>
    }
}
