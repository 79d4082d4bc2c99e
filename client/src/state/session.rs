//! Signed-in session state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one [`SessionContext`] and provides it. The login page
//! establishes a session, the navbar clears it, and the route guards read it
//! reactively so access changes without a page reload.
//!
//! DESIGN
//! ======
//! A [`Session`] can only be built by decoding a token, so the role and
//! subject always agree with the token they came from. The persisted copy in
//! the [`TokenStore`] is written from the same value.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::{ApiClient, token_from_response};
use crate::net::transport::{Transport, TransportError};
use crate::net::types::LoginRequest;
use crate::util::claims::{self, DecodeError, Role};
use crate::util::token_store::TokenStore;

/// A decoded bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    token: String,
    subject: String,
    role: Role,
}

impl Session {
    /// Decode `token` into a session.
    ///
    /// # Errors
    ///
    /// Returns the [`DecodeError`] when the token cannot be read.
    pub fn from_token(token: impl Into<String>) -> Result<Self, DecodeError> {
        let token = token.into();
        let claims = claims::decode(&token)?;
        Ok(Self { token, subject: claims.subject, role: claims.role })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

/// What the guards and navbar observe.
///
/// `restored` stays false until the persisted session has been read back, which
/// only happens in the browser after hydration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub restored: bool,
}

impl SessionState {
    /// Rebuild state from whatever the store holds. A stored token that no
    /// longer decodes is cleared along with its role.
    pub fn restore(store: &TokenStore) -> Self {
        let Some(token) = store.get_token() else {
            return Self { session: None, restored: true };
        };
        match Session::from_token(token) {
            Ok(session) => {
                store.set_session(&session);
                Self { session: Some(session), restored: true }
            }
            Err(e) => {
                log::warn!("discarding stored session: {e}");
                store.clear();
                Self { session: None, restored: true }
            }
        }
    }

    /// Persist `session` and return the signed-in state.
    pub fn establish(store: &TokenStore, session: Session) -> Self {
        store.set_session(&session);
        log::info!("signed in as {} ({})", session.subject(), session.role());
        Self { session: Some(session), restored: true }
    }

    /// Drop the persisted session and return the signed-out state.
    pub fn signed_out(store: &TokenStore) -> Self {
        store.clear();
        Self { session: None, restored: true }
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(Session::token)
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(Session::role)
    }

    pub fn subject(&self) -> Option<&str> {
        self.session.as_ref().map(Session::subject)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }
}

/// Store plus observable state, provided once by `App`.
#[derive(Clone, Debug)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
    store: TokenStore,
}

impl SessionContext {
    pub fn new(store: TokenStore) -> Self {
        Self { state: RwSignal::new(SessionState::default()), store }
    }

    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    pub fn store(&self) -> &TokenStore {
        &self.store
    }

    pub fn restore(&self) {
        self.state.set(SessionState::restore(&self.store));
    }

    pub fn establish(&self, session: Session) {
        self.state.set(SessionState::establish(&self.store, session));
    }

    pub fn clear(&self) {
        if let Some(subject) = self.state.get_untracked().subject() {
            log::info!("signed out {subject}");
        }
        self.state.set(SessionState::signed_out(&self.store));
    }
}

/// Why a sign-in attempt produced no session.
#[derive(Debug, thiserror::Error)]
pub enum SignInError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Exchange credentials for a decoded session. Nothing is persisted here;
/// callers hand the result to [`SessionContext::establish`].
///
/// # Errors
///
/// Returns [`SignInError`] when the backend rejects the credentials, cannot be
/// reached, or returns a token that does not decode.
pub async fn sign_in<T: Transport>(api: &ApiClient<T>, request: &LoginRequest) -> Result<Session, SignInError> {
    let response = api.auth().login(request).await?;
    let token = token_from_response(&response)?;
    Ok(Session::from_token(token)?)
}
