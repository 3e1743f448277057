//! Auth modal host: backdrop, close control and the active form.
//!
//! The view (login, sign-up, forgot password) comes from [`UiState`]; forms
//! switch views through the store rather than navigating.
//!
//! [`UiState`]: crate::state::ui::UiState

use leptos::prelude::*;

use super::forget_password_panel::ForgetPasswordPanel;
use super::login_panel::LoginPanel;
use super::sign_up_panel::SignUpPanel;
use crate::state::store::AppStore;
use crate::state::ui::ModalView;

#[component]
pub fn AuthModal(store: AppStore) -> impl IntoView {
    let modal_view = store.modal_view();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            store.close_modal();
        }
    };

    view! {
        <Show when=move || store.ui.with(|ui| ui.modal_open)>
            <div class="auth-modal__backdrop" on:click=move |_| store.close_modal()>
                <div
                    class="auth-modal"
                    role="dialog"
                    aria-modal="true"
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <button class="auth-modal__close" title="Close" on:click=move |_| store.close_modal()>
                        "✕"
                    </button>
                    {move || match modal_view.get() {
                        ModalView::Login => view! { <LoginPanel store=store/> }.into_any(),
                        ModalView::SignUp => view! { <SignUpPanel store=store/> }.into_any(),
                        ModalView::ForgetPassword => view! { <ForgetPasswordPanel store=store/> }.into_any(),
                    }}
                </div>
            </div>
        </Show>
    }
}
