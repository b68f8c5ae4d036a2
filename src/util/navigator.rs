//! Navigation collaborator: client-side routes and full-page redirects.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

use std::rc::Rc;

use leptos_router::NavigateOptions;

/// Moves the user elsewhere after a sign-in decision.
pub trait Navigator {
    /// Client-side route change inside the app.
    fn navigate_to(&self, route: &str);

    /// Full browser navigation to an absolute URL (OAuth redirects).
    fn navigate_external(&self, url: &str);
}

/// [`Navigator`] backed by `leptos_router` and `window.location`.
#[derive(Clone)]
pub struct BrowserNavigator {
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl BrowserNavigator {
    /// Wrap the router's navigate function (from `use_navigate()`).
    pub fn new<F>(navigate: F) -> Self
    where
        F: Fn(&str, NavigateOptions) + 'static,
    {
        Self { navigate: Rc::new(navigate) }
    }
}

impl Navigator for BrowserNavigator {
    fn navigate_to(&self, route: &str) {
        (self.navigate)(route, NavigateOptions::default());
    }

    fn navigate_external(&self, url: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(url) {
                    log::warn!("redirect to {url} failed: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
        }
    }
}
