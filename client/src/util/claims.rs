//! Bearer-token claims decoding.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow and the session restore path turn a raw token into
//! `{subject, role}` here. Only the payload segment is read: the header,
//! signature, and expiry belong to the backend, which rejects bad tokens on
//! the next request.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

/// Access level carried in the token's `role` claim.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Admin, Role::User];

    /// Wire spelling used in claims, storage, and the role-change endpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "ADMIN" => Ok(Role::Admin),
            "USER" => Ok(Role::User),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}

/// A role spelling other than `ADMIN` or `USER`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

/// Errors produced while reading claims out of a token.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed token: expected 3 segments, found {0}")]
    Segments(usize),

    #[error("malformed token payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The payload is not a JSON object with string claims.
    #[error("malformed token claims: {0}")]
    Json(#[from] serde_json::Error),
}

/// Identity claims the client cares about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Claims {
    /// Empty when the token carries no `sub` claim.
    pub subject: String,
    pub role: Role,
}

#[derive(Deserialize)]
struct RawClaims {
    #[serde(default)]
    sub: Option<String>,
    #[serde(default)]
    role: Option<String>,
}

/// Decode `{subject, role}` from a JWT without verifying it.
///
/// The header is never parsed, so any `alg` is accepted. A missing or
/// unrecognised `role` claim reads as `USER`; a missing `sub` reads as empty.
///
/// # Errors
///
/// Returns [`DecodeError`] when the token does not have three segments or the
/// middle one is not base64url-encoded JSON.
pub fn decode(token: &str) -> Result<Claims, DecodeError> {
    let segments: Vec<&str> = token.split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return Err(DecodeError::Segments(segments.len()));
    };
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    let raw: RawClaims = serde_json::from_slice(&bytes)?;

    let role = match raw.role.as_deref().map(str::parse::<Role>) {
        None => Role::User,
        Some(Ok(role)) => role,
        Some(Err(e)) => {
            log::warn!("treating token role as USER: {e}");
            Role::User
        }
    };
    Ok(Claims { subject: raw.sub.unwrap_or_default(), role })
}
