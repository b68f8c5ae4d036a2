//! Wire DTOs for the auth endpoints and the persisted session record.
//!
//! DESIGN
//! ======
//! Response fields are optional on the wire so a well-formed body that lacks
//! the token or the user decodes cleanly and is rejected by
//! [`AuthResponse::into_session`] instead of failing deep in serde.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::error::AuthError;

/// Body of the password login request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of the Google credential exchange request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleCredentialRequest {
    /// Opaque ID token handed over by Google Identity Services.
    pub credential: String,
}

/// Success body shared by the login and Google callback endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<serde_json::Value>,
}

impl AuthResponse {
    /// Convert into a [`Session`] when both a non-empty token and a user record are present.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingFields`] otherwise.
    pub fn into_session(self) -> Result<Session, AuthError> {
        match (self.token, self.user) {
            (Some(token), Some(user)) if !token.is_empty() && !user.is_null() => Ok(Session { token, user }),
            _ => Err(AuthError::MissingFields),
        }
    }
}

/// Authenticated session persisted client-side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    /// User record exactly as returned by the backend.
    pub user: serde_json::Value,
}

impl Session {
    /// Display name of the stored user, if the record carries one.
    pub fn user_name(&self) -> Option<&str> {
        self.user.get("name").and_then(serde_json::Value::as_str)
    }
}

/// Third-party providers reachable through a full-page redirect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    Facebook,
}

impl OAuthProvider {
    /// Path segment used by the backend redirect routes.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Facebook => "facebook",
        }
    }
}
