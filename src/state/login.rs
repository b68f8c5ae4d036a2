//! Login form state: field values, password visibility and attempt status.
//!
//! DESIGN
//! ======
//! Status is a single tagged variant instead of separate `loading`/`error`
//! flags, so a pending attempt and a visible error cannot coexist. The
//! user-facing messages are fixed and pre-localized; no backend detail ever
//! reaches the screen.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

pub const PASSWORD_FAILURE_MESSAGE: &str = "Email ou mot de passe incorrect.";
pub const GOOGLE_FAILURE_MESSAGE: &str = "Erreur lors de la connexion Google";
pub const GOOGLE_REDIRECT_FAILURE_MESSAGE: &str = "Erreur lors de la connexion avec Google. Veuillez réessayer.";

/// `error` query value the backend sets when a Google redirect round-trip fails.
pub const GOOGLE_AUTH_FAILED_SENTINEL: &str = "google_auth_failed";

/// Lifecycle of the current sign-in attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoginStatus {
    #[default]
    Idle,
    /// A password attempt is awaiting the backend.
    Pending,
    Succeeded,
    /// Last attempt failed; carries the message shown to the user.
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub status: LoginStatus,
}

impl LoginState {
    pub fn is_pending(&self) -> bool {
        matches!(self.status, LoginStatus::Pending)
    }

    /// Message to display, if the last attempt failed.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoginStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Start a password attempt: drops any previous error.
    pub fn begin_attempt(&mut self) {
        self.status = LoginStatus::Pending;
    }

    pub fn succeed(&mut self) {
        self.status = LoginStatus::Succeeded;
    }

    pub fn fail(&mut self, message: &str) {
        self.status = LoginStatus::Failed(message.to_owned());
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// `type` attribute of the password input.
    pub fn password_input_type(&self) -> &'static str {
        if self.show_password { "text" } else { "password" }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_pending() { "Connexion..." } else { "Se connecter" }
    }
}

/// Shared handle the controller reads and mutates [`LoginState`] through.
///
/// The page uses a reactive `RwSignal`; tests use `Rc<RefCell<_>>`.
pub trait LoginStateHandle {
    fn snapshot(&self) -> LoginState;

    fn modify(&self, f: impl FnOnce(&mut LoginState));
}

impl LoginStateHandle for RwSignal<LoginState> {
    fn snapshot(&self) -> LoginState {
        self.get_untracked()
    }

    fn modify(&self, f: impl FnOnce(&mut LoginState)) {
        self.update(f);
    }
}

impl LoginStateHandle for Rc<RefCell<LoginState>> {
    fn snapshot(&self) -> LoginState {
        self.borrow().clone()
    }

    fn modify(&self, f: impl FnOnce(&mut LoginState)) {
        f(&mut self.borrow_mut());
    }
}
