//! Durable client-side session storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session lives under two `localStorage` keys: `auth_token` (raw string)
//! and `user` (JSON record). Both keys are written together or not at all.
//! [`MemorySessionStore`] keeps the same raw key/value layout for SSR and
//! tests.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::net::error::AuthError;
use crate::net::types::Session;

pub const TOKEN_KEY: &str = "auth_token";
pub const USER_KEY: &str = "user";

/// Storage collaborator for the authenticated session.
pub trait SessionStore {
    /// Read the stored session, if both keys are present and readable.
    fn get(&self) -> Option<Session>;

    /// Persist `session`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] when either key cannot be written; no
    /// partial session is left behind.
    fn set(&self, session: &Session) -> Result<(), AuthError>;

    /// Remove the stored session.
    fn clear(&self);
}

/// Raw `(key, value)` entries for `session`.
pub(crate) fn encode_entries(session: &Session) -> Result<[(&'static str, String); 2], AuthError> {
    let user = serde_json::to_string(&session.user).map_err(|e| AuthError::Storage(e.to_string()))?;
    Ok([(TOKEN_KEY, session.token.clone()), (USER_KEY, user)])
}

/// Raw string key/value backend the session is written into.
pub trait KeyValueStorage {
    /// # Errors
    ///
    /// Returns a description of the backend failure.
    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;

    fn remove_item(&self, key: &str);
}

/// Write both session keys; on any failure remove both so no half-session,
/// and no leftover key from an earlier session, survives.
pub(crate) fn write_session<K: KeyValueStorage + ?Sized>(storage: &K, session: &Session) -> Result<(), AuthError> {
    for (key, value) in encode_entries(session)? {
        if let Err(e) = storage.set_item(key, &value) {
            storage.remove_item(TOKEN_KEY);
            storage.remove_item(USER_KEY);
            return Err(AuthError::Storage(format!("{key}: {e}")));
        }
    }
    Ok(())
}

/// Rebuild a session from raw entries; `None` unless both decode.
pub(crate) fn decode_entries(token: Option<String>, user: Option<String>) -> Option<Session> {
    let token = token.filter(|t| !t.is_empty())?;
    let user = serde_json::from_str(&user?).ok()?;
    Some(Session { token, user })
}

/// In-memory store used on the server render path and in tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value stored under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<Session> {
        decode_entries(self.raw(TOKEN_KEY), self.raw(USER_KEY))
    }

    fn set(&self, session: &Session) -> Result<(), AuthError> {
        write_session(self, session)
    }

    fn clear(&self) {
        let mut map = self.entries.borrow_mut();
        map.remove(TOKEN_KEY);
        map.remove(USER_KEY);
    }
}

impl KeyValueStorage for MemorySessionStore {
    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// `window.localStorage`-backed store. Reads yield `None` and writes fail
/// outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

#[cfg(feature = "hydrate")]
impl KeyValueStorage for web_sys::Storage {
    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        web_sys::Storage::set_item(self, key, value).map_err(|e| format!("{e:?}"))
    }

    fn remove_item(&self, key: &str) {
        let _ = web_sys::Storage::remove_item(self, key);
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for BrowserSessionStore {
    fn get(&self) -> Option<Session> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            let token = storage.get_item(TOKEN_KEY).ok().flatten();
            let user = storage.get_item(USER_KEY).ok().flatten();
            decode_entries(token, user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, session: &Session) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or_else(|| AuthError::Storage("localStorage unavailable".to_owned()))?;
            write_session(&storage, session)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
            Err(AuthError::Unavailable)
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                KeyValueStorage::remove_item(&storage, TOKEN_KEY);
                KeyValueStorage::remove_item(&storage, USER_KEY);
            }
        }
    }
}
