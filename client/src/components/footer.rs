use leptos::prelude::*;

use crate::app::STORE_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="footer__copy">{format!("© {STORE_NAME}. All rights reserved.")}</p>
        </footer>
    }
}
