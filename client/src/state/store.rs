//! Application store handed to components as an explicit prop.
//!
//! DESIGN
//! ======
//! Components that read or mutate session/modal state take an `AppStore`
//! argument instead of pulling ambient context, so every dependency on shared
//! state is visible in the component signature.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use leptos::prelude::*;

use super::auth::AuthState;
use super::ui::{ModalView, UiState};
use crate::auth::flow::{self, SubmitOutcome};
use crate::util::session_store::CookieSessionStore;

#[derive(Clone, Copy)]
pub struct AppStore {
    pub auth: RwSignal<AuthState>,
    pub ui: RwSignal<UiState>,
}

impl AppStore {
    pub fn new(auth: AuthState, ui: UiState) -> Self {
        Self { auth: RwSignal::new(auth), ui: RwSignal::new(ui) }
    }

    pub fn open_modal(&self, view: ModalView) {
        self.ui.update(|ui| ui.open_modal(view));
    }

    pub fn close_modal(&self) {
        self.ui.update(UiState::close_modal);
    }

    pub fn set_modal_view(&self, view: ModalView) {
        self.ui.update(|ui| ui.set_view(view));
    }

    /// Apply a finished submission; returns the route to navigate to.
    ///
    /// Only a sign-in writes the signals; other outcomes leave subscribers
    /// unnotified so the open form keeps its message.
    pub fn settle(&self, outcome: &SubmitOutcome) -> Option<&'static str> {
        if !matches!(outcome, SubmitOutcome::SignedIn(_)) {
            return None;
        }
        let mut auth = self.auth.get_untracked();
        let mut ui = self.ui.get_untracked();
        let route = flow::settle(outcome, &mut auth, &mut ui);
        self.auth.set(auth);
        self.ui.set(ui);
        route
    }

    /// The modal's current view, notifying only when the view changes.
    pub fn modal_view(&self) -> Memo<ModalView> {
        let ui = self.ui;
        Memo::new(move |_| ui.with(|ui| ui.modal_view))
    }

    /// Drop the persisted and in-memory session.
    pub fn sign_out(&self) {
        self.auth.update(|auth| flow::sign_out(&CookieSessionStore, auth));
    }

    /// Load the persisted session and consent flag. Browser-only.
    pub fn restore(&self) {
        self.auth.set(flow::restore(&CookieSessionStore));
        self.ui.update(|ui| ui.cookies_accepted = crate::util::cookie_consent::accepted());
    }
}
