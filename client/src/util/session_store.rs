//! Session persistence behind a `read` / `write` / `clear` interface.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth flow writes through [`SessionStore`] only after a 2xx response.
//! In the browser the session lives in two cookies, `token` (raw string) and
//! `user` (JSON profile), with no expiry. Tests and non-browser targets use
//! [`MemorySessionStore`], which keeps the same two entries.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use super::cookies;
use crate::state::auth::Session;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionStoreError {
    #[error("failed to encode user profile: {0}")]
    Encode(String),
    #[error("session write rejected: {0}")]
    Write(String),
}

pub trait SessionStore {
    /// Load the persisted session, if both entries are present and readable.
    fn read(&self) -> Option<Session>;

    /// Persist `session`, replacing whatever was stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be serialized or the backing
    /// storage refuses the write.
    fn write(&self, session: &Session) -> Result<(), SessionStoreError>;

    /// Remove both entries.
    fn clear(&self);
}

/// The two key/value entries a session is stored as.
fn encode_entries(session: &Session) -> Result<[(&'static str, String); 2], SessionStoreError> {
    let user = serde_json::to_string(&session.user).map_err(|e| SessionStoreError::Encode(e.to_string()))?;
    Ok([(TOKEN_KEY, session.token.clone()), (USER_KEY, user)])
}

fn decode_entries(token: Option<String>, user: Option<String>) -> Option<Session> {
    let token = token.filter(|t| !t.is_empty())?;
    let user = serde_json::from_str(&user?).ok()?;
    Some(Session { token, user })
}

// =============================================================================
// COOKIES
// =============================================================================

/// Browser-cookie backed store.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieSessionStore;

impl SessionStore for CookieSessionStore {
    fn read(&self) -> Option<Session> {
        decode_entries(cookies::read(TOKEN_KEY), cookies::read(USER_KEY))
    }

    fn write(&self, session: &Session) -> Result<(), SessionStoreError> {
        for (key, value) in encode_entries(session)? {
            cookies::write(&cookies::cookie_pair(key, &value, None)).map_err(SessionStoreError::Write)?;
        }
        Ok(())
    }

    fn clear(&self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = cookies::write(&cookies::expired_cookie(key)) {
                log::warn!("failed to clear {key} cookie: {e}");
            }
        }
    }
}

// =============================================================================
// MEMORY
// =============================================================================

/// In-process store keeping the same entries the cookie store writes.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RefCell<BTreeMap<String, String>>,
    writes: Cell<usize>,
}

impl MemorySessionStore {
    /// Raw stored value for `key`.
    pub fn entry(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Number of successful `write` calls.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self) -> Option<Session> {
        decode_entries(self.entry(TOKEN_KEY), self.entry(USER_KEY))
    }

    fn write(&self, session: &Session) -> Result<(), SessionStoreError> {
        let entries = encode_entries(session)?;
        let mut map = self.entries.borrow_mut();
        for (key, value) in entries {
            map.insert(key.to_owned(), value);
        }
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn clear(&self) {
        let mut map = self.entries.borrow_mut();
        map.remove(TOKEN_KEY);
        map.remove(USER_KEY);
    }
}
