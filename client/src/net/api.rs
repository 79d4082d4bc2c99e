//! REST façade over the library backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! One thin accessor per backend resource (`auth`, `books`, `authors`,
//! `rentals`, `reservations`, `rooms`). Each call reads the current token from
//! the [`TokenStore`], attaches it as a bearer credential, forwards method,
//! path, and body verbatim, and hands back the raw [`ApiResponse`]. Decoding
//! the body is left to the calling view.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-2xx statuses propagate unchanged as
//! [`TransportError`]; no retries and no local short-circuit when the token is
//! missing (the backend is the one that rejects).

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use super::transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport, TransportError};
use super::types::{AuthorRequest, BookRequest, LoginRequest, RegisterRequest, RentRequest, ReservationRequest};
use crate::config::ApiConfig;
use crate::util::claims::Role;
use crate::util::token_store::TokenStore;

/// The façade wired to the browser transport.
pub type Api = ApiClient<HttpTransport>;

/// Shared request plumbing for every resource façade.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    config: ApiConfig,
    tokens: TokenStore,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ApiConfig, tokens: TokenStore, transport: T) -> Self {
        Self { config, tokens, transport }
    }

    pub fn auth(&self) -> AuthApi<'_, T> {
        AuthApi { client: self }
    }

    pub fn books(&self) -> BookApi<'_, T> {
        BookApi { client: self }
    }

    pub fn authors(&self) -> AuthorApi<'_, T> {
        AuthorApi { client: self }
    }

    pub fn rentals(&self) -> RentalApi<'_, T> {
        RentalApi { client: self }
    }

    pub fn reservations(&self) -> ReservationApi<'_, T> {
        ReservationApi { client: self }
    }

    pub fn rooms(&self) -> RoomApi<'_, T> {
        RoomApi { client: self }
    }

    /// Request with the stored bearer token attached.
    fn authorized(&self, method: Method, path: &str) -> ApiRequest {
        let token = self.tokens.get_token();
        ApiRequest::new(method, self.config.url(path)).bearer(token.as_deref())
    }

    /// Request without credentials (login and registration).
    fn anonymous(&self, method: Method, path: &str) -> ApiRequest {
        ApiRequest::new(method, self.config.url(path))
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let method = request.method;
        let url = request.url.clone();
        let response = self.transport.send(request).await.inspect_err(|e| {
            log::warn!("{} {url} failed: {e}", method.as_str());
        })?;
        if !response.is_success() {
            log::warn!("{} {url} returned {}", method.as_str(), response.status);
            return Err(TransportError::Status { status: response.status, body: response.text() });
        }
        Ok(response)
    }
}

fn to_json<B: Serialize>(body: &B) -> serde_json::Value {
    // Request DTOs are plain structs of strings and numbers.
    serde_json::to_value(body).unwrap_or(serde_json::Value::Null)
}

/// Read the token out of a `POST /auth/token` response.
///
/// The backend answers with the bare token; a JSON string literal is unwrapped
/// so either encoding yields the same value.
///
/// # Errors
///
/// Returns [`TransportError::Decode`] for an empty body.
pub fn token_from_response(response: &ApiResponse) -> Result<String, TransportError> {
    let raw = response.text();
    let token = match serde_json::from_str::<String>(&raw) {
        Ok(unquoted) => unquoted,
        Err(_) => raw,
    };
    if token.is_empty() {
        return Err(TransportError::Decode("empty token response".to_owned()));
    }
    Ok(token)
}

/// `/auth` endpoints.
pub struct AuthApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<T: Transport> AuthApi<'_, T> {
    pub async fn register(&self, body: &RegisterRequest) -> Result<ApiResponse, TransportError> {
        let req = self.client.anonymous(Method::Post, "/auth/register").json(to_json(body));
        self.client.execute(req).await
    }

    pub async fn login(&self, body: &LoginRequest) -> Result<ApiResponse, TransportError> {
        let req = self.client.anonymous(Method::Post, "/auth/token").json(to_json(body));
        self.client.execute(req).await
    }

    pub async fn users(&self) -> Result<ApiResponse, TransportError> {
        let req = self.client.authorized(Method::Get, "/auth/api/users");
        self.client.execute(req).await
    }

    /// Record a payment of `fee` by `username`. The backend takes a signed
    /// delta, so the fee is sent negated.
    pub async fn update_wallet(&self, username: &str, fee: f64) -> Result<ApiResponse, TransportError> {
        let path = format!("/auth/api/user/username/{username}/wallet");
        let req = self.client.authorized(Method::Patch, &path).json(serde_json::json!(-fee));
        self.client.execute(req).await
    }

    pub async fn update_role(&self, username: &str, role: Role) -> Result<ApiResponse, TransportError> {
        let path = format!("/auth/api/user/{username}/role");
        let req = self.client.authorized(Method::Patch, &path).text(role.as_str());
        self.client.execute(req).await
    }

    pub async fn wallet(&self, username: &str) -> Result<ApiResponse, TransportError> {
        let path = format!("/auth/api/user/{username}/wallet");
        let req = self.client.authorized(Method::Get, &path);
        self.client.execute(req).await
    }
}

/// `/api/book` endpoints.
pub struct BookApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<T: Transport> BookApi<'_, T> {
    pub async fn list(&self) -> Result<ApiResponse, TransportError> {
        let req = self.client.authorized(Method::Get, "/api/book");
        self.client.execute(req).await
    }

    pub async fn add(&self, body: &BookRequest) -> Result<ApiResponse, TransportError> {
        let req = self.client.authorized(Method::Post, "/api/book").json(to_json(body));
        self.client.execute(req).await
    }

    /// PDF report of the catalogue.
    pub async fn report(&self) -> Result<ApiResponse, TransportError> {
        let req = self.client.authorized(Method::Get, "/api/book/report");
        self.client.execute(req).await
    }
}

/// `/api/author` endpoints.
pub struct AuthorApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<T: Transport> AuthorApi<'_, T> {
    pub async fn list(&self) -> Result<ApiResponse, TransportError> {
        let req = self.client.authorized(Method::Get, "/api/author");
        self.client.execute(req).await
    }

    pub async fn add(&self, body: &AuthorRequest) -> Result<ApiResponse, TransportError> {
        let req = self.client.authorized(Method::Post, "/api/author").json(to_json(body));
        self.client.execute(req).await
    }
}

/// `/api/rentals` endpoints.
pub struct RentalApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<T: Transport> RentalApi<'_, T> {
    pub async fn list(&self) -> Result<ApiResponse, TransportError> {
        let req = self.client.authorized(Method::Get, "/api/rentals/rent");
        self.client.execute(req).await
    }

    pub async fn rent(&self, title: &str) -> Result<ApiResponse, TransportError> {
        let body = RentRequest { title: title.to_owned() };
        let req = self.client.authorized(Method::Post, "/api/rentals/rent").json(to_json(&body));
        self.client.execute(req).await
    }

    /// Mark a rental as returned.
    pub async fn mark_returned(&self, rental_id: i64) -> Result<ApiResponse, TransportError> {
        let path = format!("/api/rentals/return/{rental_id}");
        let req = self.client.authorized(Method::Patch, &path).json(serde_json::json!({}));
        self.client.execute(req).await
    }

    /// PDF report of rentals.
    pub async fn report(&self) -> Result<ApiResponse, TransportError> {
        let req = self.client.authorized(Method::Get, "/api/rentals/rent/report");
        self.client.execute(req).await
    }
}

/// `/api/reservation` endpoints.
pub struct ReservationApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<T: Transport> ReservationApi<'_, T> {
    pub async fn list(&self) -> Result<ApiResponse, TransportError> {
        let req = self.client.authorized(Method::Get, "/api/reservation");
        self.client.execute(req).await
    }

    pub async fn add(&self, body: &ReservationRequest) -> Result<ApiResponse, TransportError> {
        let req = self.client.authorized(Method::Post, "/api/reservation").json(to_json(body));
        self.client.execute(req).await
    }
}

/// `/api/room` endpoints.
pub struct RoomApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<T: Transport> RoomApi<'_, T> {
    pub async fn list(&self) -> Result<ApiResponse, TransportError> {
        let req = self.client.authorized(Method::Get, "/api/room");
        self.client.execute(req).await
    }
}
