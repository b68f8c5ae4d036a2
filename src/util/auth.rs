//! Shared auth guard for the authenticated area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routes behind sign-in apply identical unauthenticated redirect behavior,
//! driven by whatever the session store holds.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::LOGIN_ROUTE;
use crate::net::types::Session;
use crate::util::session_store::SessionStore;

/// Where to send a visitor holding `session`; `None` means stay.
pub fn unauth_redirect_target(session: Option<&Session>) -> Option<&'static str> {
    match session {
        Some(_) => None,
        None => Some(LOGIN_ROUTE),
    }
}

/// Redirect to `/login` once mounted if no session is stored.
pub fn install_unauth_redirect<S, F>(store: S, navigate: F)
where
    S: SessionStore + 'static,
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        let session = store.get();
        if let Some(target) = unauth_redirect_target(session.as_ref()) {
            navigate(target, NavigateOptions::default());
        }
    });
}
