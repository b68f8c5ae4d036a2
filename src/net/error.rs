//! Typed failures of the sign-in flows.
//!
//! None of these reach the user verbatim: the controller logs the variant and
//! shows one fixed message per flow.

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The HTTP request could not be sent or completed.
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success HTTP status.
    #[error("auth endpoint returned status {0}")]
    Status(u16),

    /// The response body was not the expected JSON.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// The response lacked a token or a user record.
    #[error("response missing token or user")]
    MissingFields,

    /// Persisting the session to browser storage failed.
    #[error("session storage failed: {0}")]
    Storage(String),

    /// Network calls are only available in the browser build.
    #[error("not available on server")]
    Unavailable,
}
