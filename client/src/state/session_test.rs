use std::sync::Arc;

use futures::executor::block_on;
use jsonwebtoken::{EncodingKey, Header, encode};

use super::*;
use crate::config::ApiConfig;
use crate::net::testing::RecordingTransport;
use crate::net::transport::ApiResponse;
use crate::util::auth::{AuthorizationDecision, DenyReason, route_decision};
use crate::util::routes::AppRoute;
use crate::util::storage::{KeyValueStore, MemoryStorage};
use crate::util::token_store::{ROLE_KEY, TOKEN_KEY};

fn token_for(sub: &str, role: &str) -> String {
    let claims = serde_json::json!({ "sub": sub, "role": role });
    encode(&Header::default(), &claims, &EncodingKey::from_secret(b"backend-secret")).unwrap()
}

fn login_as(storage: &MemoryStorage, backend_token: &str) -> Result<SessionState, SignInError> {
    let store = TokenStore::new(Arc::new(storage.clone()));
    let transport = RecordingTransport::new();
    transport.respond(Ok(ApiResponse::new(200, backend_token)));
    let api = ApiClient::new(ApiConfig::with_base_url("http://backend"), store.clone(), transport);
    let request = LoginRequest { username: "alice".to_owned(), password: "secret".to_owned() };
    let session = block_on(sign_in(&api, &request))?;
    Ok(SessionState::establish(&store, session))
}

#[test]
fn user_login_is_denied_admin_pages() {
    let storage = MemoryStorage::new();
    let token = token_for("alice", "USER");
    let state = login_as(&storage, &token).unwrap();

    assert_eq!(storage.get(TOKEN_KEY), Some(token));
    assert_eq!(storage.get(ROLE_KEY).as_deref(), Some("USER"));
    assert_eq!(
        route_decision(AppRoute::AddBook, &state),
        AuthorizationDecision::Deny(DenyReason::InsufficientRole)
    );
    assert_eq!(route_decision(AppRoute::Borrow, &state), AuthorizationDecision::Allow);
}

#[test]
fn admin_login_opens_admin_pages() {
    let storage = MemoryStorage::new();
    let token = token_for("alice", "ADMIN");
    let state = login_as(&storage, &token).unwrap();

    assert_eq!(storage.get(ROLE_KEY).as_deref(), Some("ADMIN"));
    assert_eq!(route_decision(AppRoute::AddBook, &state), AuthorizationDecision::Allow);
}

#[test]
fn unrecognised_role_signs_in_without_admin_access() {
    let storage = MemoryStorage::new();
    let token = token_for("erin", "LIBRARIAN");
    let state = login_as(&storage, &token).unwrap();

    assert_eq!(storage.get(TOKEN_KEY), Some(token));
    assert_eq!(state.subject(), Some("erin"));
    assert_eq!(route_decision(AppRoute::Borrow, &state), AuthorizationDecision::Allow);
    assert_eq!(
        route_decision(AppRoute::AddBook, &state),
        AuthorizationDecision::Deny(DenyReason::InsufficientRole)
    );
}

#[test]
fn malformed_login_token_leaves_store_untouched() {
    let storage = MemoryStorage::new();
    let err = login_as(&storage, "not-a-jwt").unwrap_err();

    assert!(matches!(err, SignInError::Decode(_)));
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(ROLE_KEY), None);
}

#[test]
fn rejected_credentials_surface_transport_error() {
    let storage = MemoryStorage::new();
    let store = TokenStore::new(Arc::new(storage.clone()));
    let transport = RecordingTransport::new();
    transport.respond(Ok(ApiResponse::new(401, "")));
    let api = ApiClient::new(ApiConfig::with_base_url("http://backend"), store, transport);
    let request = LoginRequest { username: "alice".to_owned(), password: "wrong".to_owned() };

    let err = block_on(sign_in(&api, &request)).unwrap_err();

    assert!(matches!(err, SignInError::Transport(TransportError::Status { status: 401, .. })));
    assert_eq!(storage.get(TOKEN_KEY), None);
}

#[test]
fn session_exposes_decoded_claims() {
    let token = token_for("bob", "ADMIN");
    let session = Session::from_token(token.clone()).unwrap();
    assert_eq!(session.token(), token);
    assert_eq!(session.subject(), "bob");
    assert_eq!(session.role(), Role::Admin);
}

#[test]
fn restore_reads_back_persisted_session() {
    let storage = MemoryStorage::new();
    let store = TokenStore::new(Arc::new(storage.clone()));
    storage.set(TOKEN_KEY, &token_for("carol", "ADMIN"));
    storage.set(ROLE_KEY, "USER");

    let state = SessionState::restore(&store);

    assert!(state.restored);
    assert_eq!(state.subject(), Some("carol"));
    assert!(state.is_admin());
    assert_eq!(storage.get(ROLE_KEY).as_deref(), Some("ADMIN"));
}

#[test]
fn restore_clears_undecodable_token() {
    let storage = MemoryStorage::new();
    let store = TokenStore::new(Arc::new(storage.clone()));
    storage.set(TOKEN_KEY, "garbage");
    storage.set(ROLE_KEY, "ADMIN");

    let state = SessionState::restore(&store);

    assert!(state.restored);
    assert!(!state.is_authenticated());
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(ROLE_KEY), None);
}

#[test]
fn restore_with_empty_store_is_signed_out() {
    let state = SessionState::restore(&TokenStore::new(Arc::new(MemoryStorage::new())));
    assert_eq!(state, SessionState { session: None, restored: true });
}

#[test]
fn signed_out_clears_store() {
    let storage = MemoryStorage::new();
    let store = TokenStore::new(Arc::new(storage.clone()));
    let _ = SessionState::establish(&store, Session::from_token(token_for("dave", "USER")).unwrap());

    let state = SessionState::signed_out(&store);

    assert!(!state.is_authenticated());
    assert_eq!(store.get_token(), None);
    assert_eq!(store.get_role(), None);
}
