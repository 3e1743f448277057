//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by the auth forms after a successful exchange, restored from the
//! session store on hydrate, and read by the header to pick between the
//! sign-in button and the account menu.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::AuthPayload;

/// Access token plus the opaque user profile returned with it.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: serde_json::Value,
}

impl Session {
    /// Best-effort label for the header: profile `name`, then `email`.
    pub fn display_name(&self) -> Option<String> {
        ["name", "email"]
            .iter()
            .find_map(|key| {
                self.user
                    .get(*key)
                    .and_then(serde_json::Value::as_str)
                    .filter(|v| !v.trim().is_empty())
            })
            .map(str::to_owned)
    }
}

impl From<AuthPayload> for Session {
    fn from(payload: AuthPayload) -> Self {
        Self { token: payload.access_token.plain_text_token, user: payload.user }
    }
}

/// Authentication state for the current browser tab.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn is_authorized(&self) -> bool {
        self.session.is_some()
    }

    pub fn sign_in(&mut self, session: Session) {
        self.session = Some(session);
    }

    pub fn sign_out(&mut self) {
        self.session = None;
    }
}
