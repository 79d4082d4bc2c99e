//! Route guards wrapping authenticated and admin-only pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both guards subscribe to the session signal from [`SessionContext`], so a
//! login, logout, or role change re-renders the wrapped page in place. Until
//! the session has been restored in the browser they show a loading line
//! instead of deciding.

#[cfg(all(test, feature = "ssr"))]
#[path = "guards_test.rs"]
mod guards_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionContext;
use crate::util::auth::{AuthorizationDecision, admin_decision, authenticated_decision, install_unauth_redirect};

/// Render `children` only when a token is present; otherwise redirect to `/login`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>().state();
    install_unauth_redirect(session, use_navigate());

    let decision = Memo::new(move |_| session.with(|s| s.restored.then(|| authenticated_decision(s))));

    move || match decision.get() {
        None => view! { <p class="guard-placeholder">"Loading..."</p> }.into_any(),
        Some(AuthorizationDecision::Allow) => children().into_any(),
        Some(AuthorizationDecision::Deny(_)) => {
            view! { <p class="guard-placeholder">"Redirecting to login..."</p> }.into_any()
        }
    }
}

/// Render `children` only for the `ADMIN` role.
///
/// The role comes from the session token, never from the stored `role` key.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>().state();
    let decision = Memo::new(move |_| session.with(|s| s.restored.then(|| admin_decision(s))));

    move || match decision.get() {
        None => view! { <p class="guard-placeholder">"Loading..."</p> }.into_any(),
        Some(AuthorizationDecision::Allow) => children().into_any(),
        Some(AuthorizationDecision::Deny(_)) => view! {
            <h1 class="guard-placeholder guard-placeholder--denied">
                "You do not have sufficient permissions to view this page."
            </h1>
        }
        .into_any(),
    }
}
