//! Auth submission flow: exchange credentials for a session.
//!
//! SYSTEM CONTEXT
//! ==============
//! A validated request goes out as exactly one call; there is no retry and no
//! dedupe, so a second submit is a second request and the last response to
//! resolve wins. Outcomes:
//!
//! - 2xx: session written through the [`SessionStore`], then signed in.
//! - 422: field messages joined into one string for the form.
//! - anything else: logged, nothing shown.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use crate::net::api::AuthApi;
use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, LoginRequest, RegisterRequest};
use crate::state::auth::{AuthState, Session};
use crate::state::ui::UiState;
use crate::util::session_store::SessionStore;

pub const HOME_ROUTE: &str = "/";

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    SignedIn(Session),
    /// HTTP 422; carries the joined field messages.
    Rejected(String),
    /// Any other failure. Already logged.
    Failed,
}

pub async fn submit_login<A, S>(api: &A, sessions: &S, request: &LoginRequest) -> SubmitOutcome
where
    A: AuthApi + ?Sized,
    S: SessionStore + ?Sized,
{
    let result = api.login(request).await;
    complete("login", sessions, result)
}

pub async fn submit_sign_up<A, S>(api: &A, sessions: &S, request: &RegisterRequest) -> SubmitOutcome
where
    A: AuthApi + ?Sized,
    S: SessionStore + ?Sized,
{
    let result = api.register(request).await;
    complete("register", sessions, result)
}

fn complete<S>(action: &str, sessions: &S, result: Result<AuthResponse, ApiError>) -> SubmitOutcome
where
    S: SessionStore + ?Sized,
{
    match result {
        Ok(resp) => {
            let session = Session::from(resp.payload);
            if let Err(e) = sessions.write(&session) {
                log::warn!("{action}: session not persisted: {e}");
            }
            SubmitOutcome::SignedIn(session)
        }
        Err(e) => match e.validation_message() {
            Some(message) => SubmitOutcome::Rejected(message),
            None => {
                log::error!("{action} failed: {e}");
                SubmitOutcome::Failed
            }
        },
    }
}

/// Apply an outcome to app state; returns the route to navigate to.
pub fn settle(outcome: &SubmitOutcome, auth: &mut AuthState, ui: &mut UiState) -> Option<&'static str> {
    match outcome {
        SubmitOutcome::SignedIn(session) => {
            auth.sign_in(session.clone());
            ui.close_modal();
            Some(HOME_ROUTE)
        }
        SubmitOutcome::Rejected(_) | SubmitOutcome::Failed => None,
    }
}

/// Auth state as persisted from a previous visit.
pub fn restore<S: SessionStore + ?Sized>(sessions: &S) -> AuthState {
    AuthState { session: sessions.read() }
}

pub fn sign_out<S: SessionStore + ?Sized>(sessions: &S, auth: &mut AuthState) {
    sessions.clear();
    auth.sign_out();
}
