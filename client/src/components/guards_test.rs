use std::sync::Arc;

use jsonwebtoken::{EncodingKey, Header, encode};
use leptos::tachys::view::RenderHtml;

use super::*;
use crate::state::session::Session;
use crate::util::storage::{KeyValueStore, MemoryStorage};
use crate::util::token_store::{ROLE_KEY, TokenStore};

const DENIED: &str = "You do not have sufficient permissions to view this page.";

fn token_for(role: &str) -> String {
    let claims = serde_json::json!({ "sub": "alice", "role": role });
    encode(&Header::default(), &claims, &EncodingKey::from_secret(b"backend-secret")).unwrap()
}

/// Render `<RequireAdmin>` around a marker page with `setup` applied to the session.
fn render_admin_page(setup: impl FnOnce(&SessionContext)) -> String {
    let owner = Owner::new();
    owner.with(|| {
        let session = SessionContext::new(TokenStore::new(Arc::new(MemoryStorage::new())));
        setup(&session);
        provide_context(session);
        view! {
            <RequireAdmin>
                <p>"add book form"</p>
            </RequireAdmin>
        }
        .to_html()
    })
}

#[test]
fn admin_guard_renders_page_for_admin() {
    let html = render_admin_page(|session| session.establish(Session::from_token(token_for("ADMIN")).unwrap()));
    assert!(html.contains("add book form"), "{html}");
    assert!(!html.contains(DENIED));
}

#[test]
fn admin_guard_shows_placeholder_for_user() {
    let html = render_admin_page(|session| session.establish(Session::from_token(token_for("USER")).unwrap()));
    assert!(html.contains(DENIED), "{html}");
    assert!(!html.contains("add book form"));
}

#[test]
fn admin_guard_shows_placeholder_when_signed_out() {
    let html = render_admin_page(SessionContext::clear);
    assert!(html.contains(DENIED), "{html}");
}

#[test]
fn admin_guard_ignores_stored_role_key() {
    let storage = MemoryStorage::new();
    let owner = Owner::new();
    let html = owner.with(|| {
        let session = SessionContext::new(TokenStore::new(Arc::new(storage.clone())));
        session.establish(Session::from_token(token_for("USER")).unwrap());
        storage.set(ROLE_KEY, "ADMIN");
        provide_context(session);
        view! {
            <RequireAdmin>
                <p>"add book form"</p>
            </RequireAdmin>
        }
        .to_html()
    });
    assert!(html.contains(DENIED), "{html}");
}

#[test]
fn admin_guard_waits_for_restore() {
    let html = render_admin_page(|_| {});
    assert!(html.contains("Loading..."), "{html}");
    assert!(!html.contains(DENIED));
}
