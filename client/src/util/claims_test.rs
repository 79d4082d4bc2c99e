use super::*;
use jsonwebtoken::{EncodingKey, Header, encode};

fn token_with(payload: &serde_json::Value) -> String {
    encode(&Header::default(), payload, &EncodingKey::from_secret(b"server-secret")).unwrap()
}

#[test]
fn decode_reads_subject_and_role() {
    let token = token_with(&serde_json::json!({ "sub": "alice", "role": "ADMIN" }));
    let claims = decode(&token).unwrap();
    assert_eq!(claims.subject, "alice");
    assert_eq!(claims.role, Role::Admin);
}

#[test]
fn decode_ignores_signature_and_expiry() {
    // Signed with a key the client never sees and long expired.
    let token = token_with(&serde_json::json!({ "sub": "bob", "role": "USER", "exp": 1 }));
    let claims = decode(&token).unwrap();
    assert_eq!(claims.subject, "bob");
    assert_eq!(claims.role, Role::User);
}

#[test]
fn decode_defaults_missing_role_to_user() {
    let token = token_with(&serde_json::json!({ "sub": "carol" }));
    assert_eq!(decode(&token).unwrap().role, Role::User);
}

#[test]
fn decode_reads_unknown_role_as_user() {
    let token = token_with(&serde_json::json!({ "sub": "dave", "role": "LIBRARIAN" }));
    let claims = decode(&token).unwrap();
    assert_eq!(claims.subject, "dave");
    assert_eq!(claims.role, Role::User);
}

#[test]
fn decode_reads_missing_subject_as_empty() {
    let token = token_with(&serde_json::json!({ "role": "ADMIN" }));
    let claims = decode(&token).unwrap();
    assert_eq!(claims.subject, "");
    assert_eq!(claims.role, Role::Admin);
}

#[test]
fn decode_never_parses_the_header() {
    // {"alg":"none"} / {"sub":"mallory","role":"ADMIN"}, no signature.
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none"}"#);
    let payload = URL_SAFE_NO_PAD.encode(br#"{"sub":"mallory","role":"ADMIN"}"#);
    let claims = decode(&format!("{header}.{payload}.")).unwrap();
    assert_eq!(claims.subject, "mallory");
    assert_eq!(claims.role, Role::Admin);

    let garbage_header = format!("%%%.{payload}.sig");
    assert_eq!(decode(&garbage_header).unwrap().role, Role::Admin);
}

#[test]
fn decode_accepts_padded_payload() {
    let payload = base64::engine::general_purpose::URL_SAFE.encode(br#"{"sub":"pat"}"#);
    assert!(payload.ends_with('='));
    assert_eq!(decode(&format!("h.{payload}.s")).unwrap().subject, "pat");
}

#[test]
fn decode_rejects_wrong_segment_count() {
    for (token, count) in [("", 1), ("not-a-token", 1), ("a.b", 2), ("a.b.c.d", 4)] {
        assert!(
            matches!(decode(token), Err(DecodeError::Segments(n)) if n == count),
            "expected segment error for {token:?}"
        );
    }
}

#[test]
fn decode_rejects_bad_base64_payload() {
    assert!(matches!(decode("h.!!!.s"), Err(DecodeError::Base64(_))));
}

#[test]
fn decode_rejects_non_json_payload() {
    let token = token_with(&serde_json::json!({ "sub": "erin" }));
    let mut parts: Vec<&str> = token.split('.').collect();
    parts[1] = "bm90LWpzb24"; // base64url("not-json")
    assert!(matches!(decode(&parts.join(".")), Err(DecodeError::Json(_))));
    assert!(matches!(decode("h.MTIz.s"), Err(DecodeError::Json(_)))); // 123
}

#[test]
fn role_round_trips_through_wire_spelling() {
    for role in Role::ALL {
        assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
    }
    assert_eq!("admin".parse::<Role>(), Err(UnknownRole("admin".to_owned())));
}
