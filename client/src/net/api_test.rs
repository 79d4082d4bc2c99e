use std::sync::Arc;

use futures::executor::block_on;

use super::*;
use crate::net::testing::RecordingTransport;
use crate::net::transport::RequestBody;
use crate::net::types::Author;
use crate::util::storage::{KeyValueStore, MemoryStorage};
use crate::util::token_store::TOKEN_KEY;

fn client_with(storage: &MemoryStorage) -> (ApiClient<RecordingTransport>, RecordingTransport) {
    let transport = RecordingTransport::new();
    let tokens = TokenStore::new(Arc::new(storage.clone()));
    let client = ApiClient::new(ApiConfig::with_base_url("http://backend:8080"), tokens, transport.clone());
    (client, transport)
}

#[test]
fn authorized_calls_attach_stored_token() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "tok-123");
    let (client, transport) = client_with(&storage);

    block_on(client.books().list()).unwrap();

    let req = transport.last_request().unwrap();
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.url, "http://backend:8080/api/book");
    assert_eq!(req.header_value("Authorization"), Some("Bearer tok-123"));
}

#[test]
fn missing_token_still_sends_request_with_empty_bearer() {
    let (client, transport) = client_with(&MemoryStorage::new());

    let result = block_on(client.rooms().list());

    assert!(result.is_ok());
    let req = transport.last_request().unwrap();
    assert_eq!(req.url, "http://backend:8080/api/room");
    assert_eq!(req.header_value("Authorization"), Some("Bearer "));
}

#[test]
fn token_is_read_on_every_call() {
    let storage = MemoryStorage::new();
    let (client, transport) = client_with(&storage);

    block_on(client.reservations().list()).unwrap();
    storage.set(TOKEN_KEY, "fresh");
    block_on(client.reservations().list()).unwrap();

    let sent = transport.requests();
    assert_eq!(sent[0].header_value("Authorization"), Some("Bearer "));
    assert_eq!(sent[1].header_value("Authorization"), Some("Bearer fresh"));
}

#[test]
fn login_and_register_go_out_without_credentials() {
    let (client, transport) = client_with(&MemoryStorage::new());
    let login = LoginRequest { username: "alice".to_owned(), password: "secret".to_owned() };
    block_on(client.auth().login(&login)).unwrap();

    let req = transport.last_request().unwrap();
    assert_eq!(req.url, "http://backend:8080/auth/token");
    assert_eq!(req.header_value("Authorization"), None);
    assert_eq!(
        req.body,
        RequestBody::Json(serde_json::json!({ "username": "alice", "password": "secret" }))
    );
}

#[test]
fn non_success_status_becomes_transport_error() {
    let (client, transport) = client_with(&MemoryStorage::new());
    transport.respond(Ok(ApiResponse::new(401, "expired")));

    let err = block_on(client.auth().users()).unwrap_err();

    assert_eq!(err, TransportError::Status { status: 401, body: "expired".to_owned() });
}

#[test]
fn transport_failure_propagates_unchanged() {
    let (client, transport) = client_with(&MemoryStorage::new());
    transport.respond(Err(TransportError::Send("connection refused".to_owned())));

    let err = block_on(client.books().list()).unwrap_err();

    assert_eq!(err, TransportError::Send("connection refused".to_owned()));
    assert_eq!(transport.requests().len(), 1);
}

#[test]
fn wallet_update_sends_negated_fee() {
    let (client, transport) = client_with(&MemoryStorage::new());
    block_on(client.auth().update_wallet("bob", 25.0)).unwrap();

    let req = transport.last_request().unwrap();
    assert_eq!(req.method, Method::Patch);
    assert_eq!(req.url, "http://backend:8080/auth/api/user/username/bob/wallet");
    assert_eq!(req.body, RequestBody::Json(serde_json::json!(-25.0)));
}

#[test]
fn role_update_sends_plain_text() {
    let (client, transport) = client_with(&MemoryStorage::new());
    block_on(client.auth().update_role("bob", Role::Admin)).unwrap();

    let req = transport.last_request().unwrap();
    assert_eq!(req.url, "http://backend:8080/auth/api/user/bob/role");
    assert_eq!(req.body, RequestBody::Text("ADMIN".to_owned()));
    assert_eq!(req.header_value("Content-Type"), Some("text/plain"));
}

#[test]
fn rental_endpoints_use_expected_paths() {
    let (client, transport) = client_with(&MemoryStorage::new());
    block_on(client.rentals().rent("Solaris")).unwrap();
    block_on(client.rentals().mark_returned(42)).unwrap();
    block_on(client.rentals().report()).unwrap();

    let sent = transport.requests();
    assert_eq!(sent[0].url, "http://backend:8080/api/rentals/rent");
    assert_eq!(sent[0].body, RequestBody::Json(serde_json::json!({ "title": "Solaris" })));
    assert_eq!(sent[1].method, Method::Patch);
    assert_eq!(sent[1].url, "http://backend:8080/api/rentals/return/42");
    assert_eq!(sent[2].url, "http://backend:8080/api/rentals/rent/report");
}

#[test]
fn book_add_forwards_body_verbatim() {
    let (client, transport) = client_with(&MemoryStorage::new());
    let body = BookRequest {
        title: "Solaris".to_owned(),
        author: Author { id: 1, name: "Stanislaw".to_owned(), surname: "Lem".to_owned() },
        quantity: 2,
        genre: "sci-fi".to_owned(),
    };
    block_on(client.books().add(&body)).unwrap();

    let req = transport.last_request().unwrap();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.body, RequestBody::Json(serde_json::to_value(&body).unwrap()));
}

#[test]
fn token_from_response_accepts_bare_and_quoted_tokens() {
    assert_eq!(token_from_response(&ApiResponse::new(200, "a.b.c")).unwrap(), "a.b.c");
    assert_eq!(token_from_response(&ApiResponse::new(200, "\"a.b.c\"")).unwrap(), "a.b.c");
}

#[test]
fn token_from_response_rejects_empty_body() {
    assert!(matches!(
        token_from_response(&ApiResponse::new(200, "")),
        Err(TransportError::Decode(_))
    ));
}
