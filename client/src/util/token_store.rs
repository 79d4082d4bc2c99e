//! Persisted bearer token and role.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by the login flow, cleared by logout, read by route guards and by
//! every outgoing API call. The role is stored next to the token so guards can
//! read it without decoding again.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::fmt;
use std::sync::Arc;

use super::claims::Role;
use super::storage::KeyValueStore;
use crate::state::session::Session;

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";

/// Handle over a [`KeyValueStore`]; clones share the same backend.
#[derive(Clone)]
pub struct TokenStore {
    backend: Arc<dyn KeyValueStore>,
}

impl fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenStore").finish_non_exhaustive()
    }
}

impl TokenStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Persist a decoded session. Storage failures are logged and swallowed.
    pub fn set_session(&self, session: &Session) {
        let token_written = self.backend.set(TOKEN_KEY, session.token());
        let role_written = self.backend.set(ROLE_KEY, session.role().as_str());
        if !(token_written && role_written) {
            log::warn!("session storage unavailable; session for {} kept in memory only", session.subject());
        }
    }

    pub fn get_token(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY)
    }

    /// Last role written alongside the token. Unrecognised values read as absent.
    pub fn get_role(&self) -> Option<Role> {
        let raw = self.backend.get(ROLE_KEY)?;
        match raw.parse() {
            Ok(role) => Some(role),
            Err(e) => {
                log::warn!("ignoring stored role: {e}");
                None
            }
        }
    }

    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(ROLE_KEY);
    }
}
