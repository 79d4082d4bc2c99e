use super::*;
use crate::state::session::Session;
use jsonwebtoken::{EncodingKey, Header, encode};

fn signed_in(role: &str) -> SessionState {
    let claims = serde_json::json!({ "sub": "alice", "role": role });
    let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(b"k")).unwrap();
    SessionState { session: Some(Session::from_token(token).unwrap()), restored: true }
}

fn signed_out() -> SessionState {
    SessionState { session: None, restored: true }
}

#[test]
fn authenticated_decision_follows_token_presence() {
    assert_eq!(authenticated_decision(&signed_in("USER")), AuthorizationDecision::Allow);
    assert_eq!(
        authenticated_decision(&signed_out()),
        AuthorizationDecision::Deny(DenyReason::NotAuthenticated)
    );
}

#[test]
fn admin_decision_allows_only_admin() {
    assert_eq!(admin_decision(&signed_in("ADMIN")), AuthorizationDecision::Allow);
    assert_eq!(
        admin_decision(&signed_in("USER")),
        AuthorizationDecision::Deny(DenyReason::InsufficientRole)
    );
    assert_eq!(admin_decision(&signed_out()), AuthorizationDecision::Deny(DenyReason::InsufficientRole));
}

#[test]
fn route_decision_uses_route_access() {
    let user = signed_in("USER");
    assert_eq!(route_decision(AppRoute::Borrow, &user), AuthorizationDecision::Allow);
    assert_eq!(
        route_decision(AppRoute::Users, &user),
        AuthorizationDecision::Deny(DenyReason::InsufficientRole)
    );
    assert_eq!(route_decision(AppRoute::Login, &signed_out()), AuthorizationDecision::Allow);
    assert_eq!(
        route_decision(AppRoute::Rentals, &signed_out()),
        AuthorizationDecision::Deny(DenyReason::NotAuthenticated)
    );
}

#[test]
fn should_redirect_unauth_when_restored_without_token() {
    assert!(should_redirect_unauth(&signed_out()));
}

#[test]
fn should_not_redirect_before_restore() {
    assert!(!should_redirect_unauth(&SessionState::default()));
}

#[test]
fn should_not_redirect_when_token_present() {
    assert!(!should_redirect_unauth(&signed_in("USER")));
}
