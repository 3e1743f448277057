//! Registration form inside the auth modal.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::alert::Alert;
use super::login_panel::FieldMessage;
use crate::auth::flow::submit_sign_up;
use crate::auth::form::{SignUpForm, SubmitPhase};
use crate::auth::validation::Field;
use crate::config::AppConfig;
use crate::net::api::HttpAuthApi;
use crate::state::store::AppStore;
use crate::state::ui::ModalView;
use crate::util::device::device_name;
use crate::util::session_store::CookieSessionStore;

#[component]
pub fn SignUpPanel(store: AppStore) -> impl IntoView {
    let form = RwSignal::new(SignUpForm::default());
    let navigate = use_navigate();
    let config = AppConfig::load();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(request)) = form.try_update(|f| f.begin(&device_name())) else {
            return;
        };
        let api = HttpAuthApi::new(&config);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = submit_sign_up(&api, &CookieSessionStore, &request).await;
            form.update(|f| f.finish(&outcome));
            if let Some(route) = store.settle(&outcome) {
                navigate(route, NavigateOptions::default());
            }
        });
    };

    let field_error = move |field: Field| form.with(|f| f.field_errors.message(field));
    let submitting = move || form.with(|f| f.phase == SubmitPhase::Submitting);

    view! {
        <div class="auth-panel">
            <h2 class="auth-panel__title">"Register"</h2>
            {move || form.with(|f| f.error_message.clone()).map(|message| view! { <Alert message=message/> })}
            <form class="auth-form" novalidate on:submit=on_submit>
                <label class="auth-form__label">
                    "Name"
                    <input
                        class="auth-form__input"
                        type="text"
                        autocomplete="name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>
                <FieldMessage message=Signal::derive(move || field_error(Field::Name))/>
                <label class="auth-form__label">
                    "Email"
                    <input
                        class="auth-form__input"
                        type="email"
                        autocomplete="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </label>
                <FieldMessage message=Signal::derive(move || field_error(Field::Email))/>
                <label class="auth-form__label">
                    "Phone"
                    <input
                        class="auth-form__input"
                        type="tel"
                        autocomplete="tel"
                        prop:value=move || form.with(|f| f.phone.clone())
                        on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                    />
                </label>
                <FieldMessage message=Signal::derive(move || field_error(Field::Phone))/>
                <label class="auth-form__label">
                    "Password"
                    <input
                        class="auth-form__input"
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </label>
                <FieldMessage message=Signal::derive(move || field_error(Field::Password))/>
                <button class="btn btn--primary btn--block" type="submit" disabled=submitting>
                    {move || if submitting() { "Registering..." } else { "Register" }}
                </button>
            </form>
            <p class="auth-panel__switch">
                "Already have an account? "
                <button class="btn btn--link" on:click=move |_| store.set_modal_view(ModalView::Login)>
                    "Login"
                </button>
            </p>
        </div>
    }
}
