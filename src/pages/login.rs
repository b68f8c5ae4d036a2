//! Login page: email/password form plus Google and Facebook sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page only renders and forwards events. Every flow lives in
//! [`LoginController`], wired here to the real backend, `localStorage` and the
//! router.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::config::AuthConfig;
use crate::controller::LoginController;
use crate::net::api::HttpAuthApi;
use crate::net::types::OAuthProvider;
use crate::state::login::LoginState;
use crate::util::navigator::BrowserNavigator;
use crate::util::session_store::BrowserSessionStore;

/// Logo served from the site root (`public/` in the source tree).
const LOGO_SRC: &str = "/logo/aeddi.svg";

type PageController = LoginController<HttpAuthApi, BrowserSessionStore, BrowserNavigator, RwSignal<LoginState>>;

/// Label of the password visibility toggle.
fn visibility_toggle_label(show_password: bool) -> &'static str {
    if show_password { "Masquer" } else { "Afficher" }
}

fn resolve_config() -> AuthConfig {
    AuthConfig::from_build_env().unwrap_or_else(|e| {
        log::warn!("{e}; using default auth config");
        AuthConfig::default()
    })
}

/// Login screen. `on_forgot` is invoked by the "forgot password" button.
#[component]
pub fn LoginPage(#[prop(optional, into)] on_forgot: Option<Callback<()>>) -> impl IntoView {
    let state = RwSignal::new(LoginState::default());
    let config = resolve_config();
    let google_redirect = config.redirect_url(OAuthProvider::Google);
    let controller: PageController = LoginController::new(
        config.clone(),
        HttpAuthApi::new(config),
        BrowserSessionStore,
        BrowserNavigator::new(use_navigate()),
        state,
    );
    let controller = StoredValue::new_local(Rc::new(controller));

    // Resume after a failed full-page Google round-trip.
    let query = use_query_map();
    let error_param = query.with_untracked(|q| q.get("error"));
    controller.with_value(|c| c.apply_query_error(error_param.as_deref()));

    on_cleanup(move || {
        controller.try_with_value(|c| c.detach());
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        if let Some(ctrl) = controller.try_get_value() {
            leptos::task::spawn_local(async move {
                ctrl.submit_credentials().await;
            });
        }
    };

    let google_ref = NodeRef::<leptos::html::Div>::new();
    #[cfg(feature = "hydrate")]
    {
        let client_id = controller.with_value(|c| c.config().google_client_id.clone());
        Effect::new(move || {
            let (Some(container), Some(client_id)) = (google_ref.get(), client_id.clone()) else {
                return;
            };
            let on_credential = move |credential: String| {
                if let Some(ctrl) = controller.try_get_value() {
                    leptos::task::spawn_local(async move {
                        ctrl.complete_google_credential(&credential).await;
                    });
                }
            };
            if let Err(e) = crate::util::google_identity::render_button(&client_id, &container, on_credential) {
                log::debug!("google one-tap unavailable: {e}");
            }
        });
    }

    view! {
        <div class="login-page">
            <div class="login-card">
                <img class="login-card__logo" src=LOGO_SRC alt="AEDDI" width="96" height="96"/>
                <h1>"Connexion à AEDDI"</h1>
                <form class="login-form" on:submit=on_submit autocomplete="on">
                    <Show when=move || state.with(|s| s.error().is_some())>
                        <p class="login-message login-message--error">
                            {move || state.with(|s| s.error().unwrap_or_default().to_owned())}
                        </p>
                    </Show>
                    <label class="login-label" for="login-email">"Email"</label>
                    <input
                        id="login-email"
                        class="login-input"
                        type="email"
                        required=true
                        autocomplete="email"
                        prop:value=move || state.with(|s| s.email.clone())
                        on:input=move |ev| controller.with_value(|c| c.set_email(event_target_value(&ev)))
                    />
                    <label class="login-label" for="login-password">"Mot de passe"</label>
                    <div class="login-password">
                        <input
                            id="login-password"
                            class="login-input"
                            type=move || state.with(LoginState::password_input_type)
                            required=true
                            autocomplete="current-password"
                            prop:value=move || state.with(|s| s.password.clone())
                            on:input=move |ev| controller.with_value(|c| c.set_password(event_target_value(&ev)))
                        />
                        <button
                            type="button"
                            class="login-password__toggle"
                            tabindex="-1"
                            aria-label="Afficher/masquer le mot de passe"
                            on:click=move |_| controller.with_value(|c| c.toggle_password_visibility())
                        >
                            {move || visibility_toggle_label(state.with(|s| s.show_password))}
                        </button>
                    </div>
                    <button class="login-button" type="submit" disabled=move || state.with(LoginState::is_pending)>
                        <Show when=move || state.with(LoginState::is_pending)>
                            <span class="login-spinner"></span>
                        </Show>
                        {move || state.with(LoginState::submit_label)}
                    </button>
                </form>
                <button
                    type="button"
                    class="login-link"
                    on:click=move |_| {
                        if let Some(on_forgot) = on_forgot {
                            on_forgot.run(());
                        }
                    }
                >
                    "Mot de passe oublié ?"
                </button>
                <div class="login-divider"></div>
                <a href=google_redirect class="login-button login-button--google">
                    "Se connecter avec Google"
                </a>
                <div class="login-google-one-tap" node_ref=google_ref></div>
                <button
                    type="button"
                    class="login-button login-button--facebook"
                    on:click=move |_| controller.with_value(|c| c.redirect_to_provider(OAuthProvider::Facebook))
                >
                    "Se connecter avec Facebook"
                </button>
                <div class="login-footer">
                    <p>"Nouveau sur AEDDI ?"</p>
                    <p>"Connectez-vous avec Google pour créer votre compte automatiquement !"</p>
                </div>
            </div>
        </div>
    }
}
