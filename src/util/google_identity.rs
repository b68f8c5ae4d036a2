//! Bridge to the Google Identity Services (GSI) one-tap button.
//!
//! SYSTEM CONTEXT
//! ==============
//! When the GSI script is loaded on the page, `google.accounts.id` renders its
//! own button and hands back an ID token through a JS callback. This module
//! wires that callback to a Rust closure; the credential is then exchanged by
//! the login controller. Without the script (or on the server) nothing is
//! rendered and the plain redirect link remains the only Google path.

#[cfg(test)]
#[path = "google_identity_test.rs"]
mod google_identity_test;

/// Keep only usable credentials from a GSI callback payload.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn usable_credential(raw: Option<String>) -> Option<String> {
    raw.map(|c| c.trim().to_owned()).filter(|c| !c.is_empty())
}

#[cfg(feature = "hydrate")]
mod browser {
    use js_sys::{Function, Object, Reflect};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    fn lookup(target: &JsValue, path: &[&str]) -> Result<JsValue, String> {
        let mut current = target.clone();
        for key in path {
            current = Reflect::get(&current, &JsValue::from_str(key)).map_err(|e| format!("{key}: {e:?}"))?;
            if current.is_undefined() {
                return Err(format!("{key} is undefined"));
            }
        }
        Ok(current)
    }

    fn function(target: &JsValue, name: &str) -> Result<Function, String> {
        lookup(target, &[name])?
            .dyn_into::<Function>()
            .map_err(|_| format!("{name} is not a function"))
    }

    fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), String> {
        Reflect::set(target, &JsValue::from_str(key), value)
            .map(|_| ())
            .map_err(|e| format!("{key}: {e:?}"))
    }

    /// Initialize GSI with `client_id` and render its button inside `container`.
    ///
    /// # Errors
    ///
    /// Returns an error string when the GSI script is not loaded or rejects
    /// the configuration.
    pub fn render_button<F>(client_id: &str, container: &web_sys::HtmlElement, on_credential: F) -> Result<(), String>
    where
        F: Fn(String) + 'static,
    {
        let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
        let id_api = lookup(&JsValue::from(window), &["google", "accounts", "id"])?;

        let callback = Closure::<dyn Fn(JsValue)>::new(move |response: JsValue| {
            let raw = Reflect::get(&response, &JsValue::from_str("credential"))
                .ok()
                .and_then(|v| v.as_string());
            match super::usable_credential(raw) {
                Some(credential) => on_credential(credential),
                None => log::warn!("google callback without credential"),
            }
        });

        let config = Object::new();
        set(&config, "client_id", &JsValue::from_str(client_id))?;
        set(&config, "callback", callback.as_ref())?;
        function(&id_api, "initialize")?
            .call1(&id_api, &config)
            .map_err(|e| format!("initialize: {e:?}"))?;
        // GSI holds the callback from here on, for the lifetime of the page.
        callback.forget();

        let options = Object::new();
        set(&options, "theme", &JsValue::from_str("outline"))?;
        set(&options, "size", &JsValue::from_str("large"))?;
        set(&options, "text", &JsValue::from_str("signin_with"))?;
        set(&options, "locale", &JsValue::from_str("fr"))?;
        function(&id_api, "renderButton")?
            .call2(&id_api, container, &options)
            .map_err(|e| format!("renderButton: {e:?}"))?;
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
pub use browser::render_button;
