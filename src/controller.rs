//! Login form controller: orchestrates the password, Google and Facebook
//! sign-in paths against injected collaborators.
//!
//! ARCHITECTURE
//! ============
//! The controller never touches the browser directly. Storage, navigation and
//! the backend come in as [`SessionStore`], [`Navigator`] and [`AuthApi`], and
//! UI state goes through a [`LoginStateHandle`], so every flow runs unchanged
//! against in-memory doubles.
//!
//! STALE RESULTS
//! =============
//! Each attempt takes a fresh generation number. A response is applied
//! (state, storage, navigation) only if no newer attempt started and the page
//! was not detached in the meantime. Requests are neither cancelled nor
//! de-duplicated.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is logged with its typed [`AuthError`](crate::net::error::AuthError)
//! and collapsed into one fixed message per flow; nothing propagates out.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::Cell;

use crate::config::AuthConfig;
use crate::net::api::AuthApi;
use crate::net::error::AuthError;
use crate::net::types::{AuthResponse, LoginRequest, OAuthProvider, Session};
use crate::state::login::{
    GOOGLE_AUTH_FAILED_SENTINEL, GOOGLE_FAILURE_MESSAGE, GOOGLE_REDIRECT_FAILURE_MESSAGE, LoginStateHandle,
    PASSWORD_FAILURE_MESSAGE,
};
use crate::util::navigator::Navigator;
use crate::util::session_store::SessionStore;

pub struct LoginController<A, S, N, H> {
    api: A,
    store: S,
    navigator: N,
    state: H,
    config: AuthConfig,
    generation: Cell<u64>,
}

impl<A, S, N, H> LoginController<A, S, N, H>
where
    A: AuthApi,
    S: SessionStore,
    N: Navigator,
    H: LoginStateHandle,
{
    pub fn new(config: AuthConfig, api: A, store: S, navigator: N, state: H) -> Self {
        Self { api, store, navigator, state, config, generation: Cell::new(0) }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    pub fn set_email(&self, email: String) {
        self.state.modify(|s| s.email = email);
    }

    pub fn set_password(&self, password: String) {
        self.state.modify(|s| s.password = password);
    }

    pub fn toggle_password_visibility(&self) {
        self.state.modify(|s| s.toggle_password_visibility());
    }

    /// Submit the current email/password pair.
    ///
    /// Values are sent verbatim; format checks are left to the input elements.
    pub async fn submit_credentials(&self) {
        let generation = self.next_generation();
        let snapshot = self.state.snapshot();
        let request = LoginRequest { email: snapshot.email, password: snapshot.password };
        self.state.modify(|s| s.begin_attempt());
        log::info!("password sign-in started (attempt {generation})");

        let result = self.api.login(&request).await;
        if !self.is_current(generation) {
            log::debug!("discarding stale password sign-in result (attempt {generation})");
            return;
        }
        match self.establish_session(result) {
            Ok(()) => self.finish_success(),
            Err(e) => {
                log::warn!("password sign-in failed: {e}");
                self.state.modify(|s| s.fail(PASSWORD_FAILURE_MESSAGE));
            }
        }
    }

    /// Exchange a Google Identity Services credential for a session.
    ///
    /// Unlike the password path, the status never enters `Pending`.
    pub async fn complete_google_credential(&self, credential: &str) {
        let generation = self.next_generation();
        log::info!("google credential exchange started (attempt {generation})");

        let result = self.api.exchange_google_credential(credential).await;
        if !self.is_current(generation) {
            log::debug!("discarding stale google exchange result (attempt {generation})");
            return;
        }
        match self.establish_session(result) {
            Ok(()) => self.finish_success(),
            Err(e) => {
                log::warn!("google credential exchange failed: {e}");
                self.state.modify(|s| s.fail(GOOGLE_FAILURE_MESSAGE));
            }
        }
    }

    /// Hand the whole OAuth dance to the backend with a full-page redirect.
    pub fn redirect_to_provider(&self, provider: OAuthProvider) {
        let url = self.config.redirect_url(provider);
        log::info!("redirecting to {} sign-in", provider.slug());
        self.navigator.navigate_external(&url);
    }

    /// Apply the `error` query parameter read once on mount.
    pub fn apply_query_error(&self, error: Option<&str>) {
        if error == Some(GOOGLE_AUTH_FAILED_SENTINEL) {
            log::warn!("google redirect sign-in bounced back with an error");
            self.state.modify(|s| s.fail(GOOGLE_REDIRECT_FAILURE_MESSAGE));
        }
    }

    /// Stop applying results of attempts still in flight (page unmount).
    pub fn detach(&self) {
        self.next_generation();
    }

    fn next_generation(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }

    fn establish_session(&self, result: Result<AuthResponse, AuthError>) -> Result<(), AuthError> {
        let session: Session = result?.into_session()?;
        self.store.set(&session)
    }

    fn finish_success(&self) {
        log::info!("sign-in succeeded");
        self.state.modify(|s| s.succeed());
        self.navigator.navigate_to(&self.config.dashboard_route);
    }
}
