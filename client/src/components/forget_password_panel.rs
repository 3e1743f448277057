use leptos::prelude::*;

use crate::state::store::AppStore;
use crate::state::ui::ModalView;

#[component]
pub fn ForgetPasswordPanel(store: AppStore) -> impl IntoView {
    view! {
        <div class="auth-panel">
            <h2 class="auth-panel__title">"Forgot password"</h2>
            <p class="auth-panel__text">
                "Password recovery is handled by our support team. Contact us with the email on your account."
            </p>
            <button class="btn btn--link" on:click=move |_| store.set_modal_view(ModalView::Login)>
                "Back to login"
            </button>
        </div>
    }
}
