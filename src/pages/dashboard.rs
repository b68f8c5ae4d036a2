//! Authenticated landing route reached after any successful sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Content of the authenticated area lives elsewhere; this page only checks
//! that a session is stored and greets the stored user.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::util::auth::install_unauth_redirect;
use crate::util::session_store::{BrowserSessionStore, SessionStore};

fn greeting(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("Bienvenue, {name} !"),
        None => "Bienvenue !".to_owned(),
    }
}

/// Dashboard page. Redirects to `/login` if no session is stored.
#[component]
pub fn DashboardPage() -> impl IntoView {
    install_unauth_redirect(BrowserSessionStore, use_navigate());

    let user_name = RwSignal::new(None::<String>);
    Effect::new(move || {
        let name = BrowserSessionStore.get().and_then(|s| s.user_name().map(str::to_owned));
        user_name.set(name);
    });

    view! {
        <div class="dashboard-page">
            <h1>"Tableau de bord"</h1>
            <p>{move || greeting(user_name.get().as_deref())}</p>
        </div>
    }
}
