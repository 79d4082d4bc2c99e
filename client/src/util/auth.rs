//! Route access decisions and the unauthenticated redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard components and the navbar both ask the same questions of the
//! current [`SessionState`]; the answers live here as plain functions so they
//! are identical everywhere and testable without a browser.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use super::routes::{Access, AppRoute};
use crate::state::session::SessionState;

/// Outcome of an access check, computed per render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthorizationDecision {
    Allow,
    Deny(DenyReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DenyReason {
    NotAuthenticated,
    InsufficientRole,
}

/// Allow iff a token is present. Validity is the backend's call.
pub fn authenticated_decision(state: &SessionState) -> AuthorizationDecision {
    if state.token().is_some() {
        AuthorizationDecision::Allow
    } else {
        AuthorizationDecision::Deny(DenyReason::NotAuthenticated)
    }
}

/// Allow iff the role is `ADMIN`; a missing role denies.
pub fn admin_decision(state: &SessionState) -> AuthorizationDecision {
    if state.is_admin() {
        AuthorizationDecision::Allow
    } else {
        AuthorizationDecision::Deny(DenyReason::InsufficientRole)
    }
}

/// Decision for opening `route`.
pub fn route_decision(route: AppRoute, state: &SessionState) -> AuthorizationDecision {
    match route.access() {
        Access::Public => AuthorizationDecision::Allow,
        Access::Authenticated => authenticated_decision(state),
        Access::Admin => admin_decision(state),
    }
}

/// True once the session has been restored and no token is present.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    state.restored && authenticated_decision(state) != AuthorizationDecision::Allow
}

/// Redirect to `/login` whenever the restored session has no token.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate(AppRoute::Login.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
