//! REST auth client for the remote authentication API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the transport reports itself unavailable, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failed login/register surfaces as a single `AuthError` carrying a
//! display message: the server's `error`/`message` field when it sent one,
//! otherwise a generic fallback. Transport failures and unreadable success
//! bodies take the fallback too. The session is only written after a 2xx
//! response has been parsed.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use super::config::{LOGIN_PATH, REGISTER_PATH, build_api_url};
use super::types::{ErrorBody, LoginRequest, RegisterRequest, UserRecord};
use crate::state::session::{BrowserStorage, SessionStore, Storage};

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";

/// A failed authentication call. `Display` is the message, verbatim.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AuthError {
    message: String,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("not available on server")]
    Unavailable,
}

/// Status and raw body of an HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one JSON `POST` and hands back the response.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: &str) -> Result<HttpResponse, TransportError>;
}

/// Browser `fetch` via `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: &str) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(url)
                .header("Content-Type", "application/json")
                .header("Accept", "application/json")
                .body(body)
                .map_err(|e| TransportError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::Request(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| TransportError::Request(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, body);
            Err(TransportError::Unavailable)
        }
    }
}

/// The auth client the app uses in the browser.
pub type AppAuthClient = AuthClient<HttpTransport, BrowserStorage>;

/// Login/register against the remote API; owns writes to the session.
#[derive(Clone, Debug)]
pub struct AuthClient<T, S> {
    transport: T,
    session: SessionStore<S>,
    base_url: String,
}

/// Pull a display message out of a failed response body.
fn failure_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| fallback.to_owned())
}

fn display_name(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name}")
}

impl<T: Transport, S: Storage> AuthClient<T, S> {
    pub fn new(transport: T, storage: S, base_url: impl Into<String>) -> Self {
        Self { transport, session: SessionStore::new(storage), base_url: base_url.into() }
    }

    /// Full URL for an endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        build_api_url(&self.base_url, path)
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// Sign in with `POST /api/auth/login`. On success the returned user is
    /// also stored as the current session.
    ///
    /// # Errors
    ///
    /// Returns an `AuthError` with the server's message, or `"Login failed"`.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserRecord, AuthError> {
        let body = LoginRequest { email, password };
        self.authenticate(LOGIN_PATH, &body, LOGIN_FAILED).await
    }

    /// Create an account with `POST /api/auth/register` and store the
    /// returned user as the current session.
    ///
    /// `user_id` is trimmed but not part of the request body; the server only
    /// receives `username` (first and last name), `email` and `password`.
    ///
    /// # Errors
    ///
    /// Returns an `AuthError` with the server's message, or
    /// `"Registration failed"`.
    pub async fn register(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        user_id: &str,
        password: &str,
    ) -> Result<UserRecord, AuthError> {
        let user_id = user_id.trim();
        log::debug!("register: user id {user_id:?} is not sent");
        let body = RegisterRequest { username: display_name(first_name, last_name), email, password };
        self.authenticate(REGISTER_PATH, &body, REGISTRATION_FAILED).await
    }

    /// Drop the local session. No network call.
    pub fn logout(&self) {
        self.session.clear();
    }

    pub fn current_user(&self) -> Option<UserRecord> {
        self.session.current()
    }

    async fn authenticate<B: Serialize>(&self, path: &str, body: &B, fallback: &str) -> Result<UserRecord, AuthError> {
        let url = self.endpoint(path);
        let payload = serde_json::to_string(body).map_err(|e| {
            log::warn!("{path}: failed to encode request: {e}");
            AuthError::new(fallback)
        })?;

        let resp = self.transport.post_json(&url, &payload).await.map_err(|e| {
            log::warn!("{path}: {e}");
            AuthError::new(fallback)
        })?;

        if !resp.is_success() {
            log::debug!("{path}: status {}", resp.status);
            return Err(AuthError::new(failure_message(&resp.body, fallback)));
        }

        let user: UserRecord = serde_json::from_str(&resp.body).map_err(|e| {
            log::warn!("{path}: unreadable user in response: {e}");
            AuthError::new(fallback)
        })?;
        self.session.save(&user);
        Ok(user)
    }
}
