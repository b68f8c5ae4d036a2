//! REST calls to the authentication backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call resolves to [`AuthError::Unavailable`] since
//! sign-in only happens in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status and decode failures are reported as distinct
//! [`AuthError`] variants; collapsing them into a user message is the
//! controller's job.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::AuthError;
use super::types::{AuthResponse, LoginRequest};
use crate::config::AuthConfig;

/// Remote authentication service consumed by the login controller.
///
/// Futures are `!Send`: everything runs on the browser main thread.
#[async_trait::async_trait(?Send)]
pub trait AuthApi {
    /// Verify an email/password pair.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] for any transport, status or decode failure.
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AuthError>;

    /// Exchange a Google ID token for a session.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] for any transport, status or decode failure.
    async fn exchange_google_credential(&self, credential: &str) -> Result<AuthResponse, AuthError>;
}

/// [`AuthApi`] backed by the real backend endpoints.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    config: AuthConfig,
}

impl HttpAuthApi {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            post_json(&self.config.login_url(), request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.config, request);
            Err(AuthError::Unavailable)
        }
    }

    async fn exchange_google_credential(&self, credential: &str) -> Result<AuthResponse, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let body = super::types::GoogleCredentialRequest { credential: credential.to_owned() };
            post_json(&self.config.google_callback_url(), &body).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.config, credential);
            Err(AuthError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize>(url: &str, body: &B) -> Result<AuthResponse, AuthError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| AuthError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthError::Transport(e.to_string()))?;
    check_status(resp.ok(), resp.status())?;
    let raw = resp.text().await.map_err(|e| AuthError::Transport(e.to_string()))?;
    decode_auth_body(&raw)
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(ok: bool, status: u16) -> Result<(), AuthError> {
    if ok { Ok(()) } else { Err(AuthError::Status(status)) }
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_auth_body(raw: &str) -> Result<AuthResponse, AuthError> {
    serde_json::from_str(raw).map_err(|e| AuthError::Decode(e.to_string()))
}
