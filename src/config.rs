//! Auth endpoint configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment, so values are captured with
//! `option_env!` when the crate is compiled and parsed once into
//! [`AuthConfig`]. Parsing lives in [`AuthConfig::from_values`] so it can be
//! exercised without rebuilding.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::net::types::OAuthProvider;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DASHBOARD_ROUTE: &str = "/dashbord";
pub const LOGIN_ROUTE: &str = "/login";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const GOOGLE_CALLBACK_PATH: &str = "/api/auth/google/callback";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The API base URL is not an absolute http(s) URL.
    #[error("invalid API URL: {0}")]
    InvalidApiUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Backend origin without trailing slash, e.g. `https://api.aeddi.org`.
    pub api_url: String,
    /// Route reached after any successful sign-in.
    pub dashboard_route: String,
    /// Client id for Google Identity Services; one-tap is disabled when absent.
    pub google_client_id: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            dashboard_route: DASHBOARD_ROUTE.to_owned(),
            google_client_id: None,
        }
    }
}

impl AuthConfig {
    /// Build config from the variables captured at compile time.
    ///
    /// Optional:
    /// - `AEDDI_API_URL`: backend origin (default `http://localhost:8000`)
    /// - `AEDDI_GOOGLE_CLIENT_ID`: enables the Google one-tap button
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] when `AEDDI_API_URL` is set to
    /// something other than an http(s) URL.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("AEDDI_API_URL"), option_env!("AEDDI_GOOGLE_CLIENT_ID"))
    }

    /// Same as [`AuthConfig::from_build_env`] with explicit inputs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] for non-http(s) base URLs.
    pub fn from_values(api_url: Option<&str>, google_client_id: Option<&str>) -> Result<Self, ConfigError> {
        let api_url = parse_api_url(api_url)?;
        let google_client_id = google_client_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_owned);
        Ok(Self { api_url, dashboard_route: DASHBOARD_ROUTE.to_owned(), google_client_id })
    }

    /// Absolute URL of the password login endpoint.
    pub fn login_url(&self) -> String {
        format!("{}{LOGIN_PATH}", self.api_url)
    }

    /// Absolute URL of the Google credential exchange endpoint.
    pub fn google_callback_url(&self) -> String {
        format!("{}{GOOGLE_CALLBACK_PATH}", self.api_url)
    }

    /// Absolute URL that starts the server-side OAuth dance for `provider`.
    pub fn redirect_url(&self, provider: OAuthProvider) -> String {
        format!("{}/api/auth/{}/redirect", self.api_url, provider.slug())
    }
}

fn parse_api_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_URL);
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidApiUrl(value.to_owned()));
    }
    Ok(value.trim_end_matches('/').to_owned())
}
