use super::*;
use serde_json::json;

fn sample_session() -> Session {
    Session { token: "t1".into(), user: json!({"id": 1, "name": "A"}) }
}

#[test]
fn memory_store_starts_empty() {
    let store = MemorySessionStore::new();
    assert!(store.is_empty());
    assert_eq!(store.get(), None);
}

#[test]
fn memory_store_writes_both_keys() {
    let store = MemorySessionStore::new();
    store.set(&sample_session()).unwrap();

    assert_eq!(store.raw(TOKEN_KEY).as_deref(), Some("t1"));
    let user: serde_json::Value = serde_json::from_str(&store.raw(USER_KEY).unwrap()).unwrap();
    assert_eq!(user, json!({"id": 1, "name": "A"}));
    assert_eq!(store.get(), Some(sample_session()));
}

#[test]
fn memory_store_clear_removes_session() {
    let store = MemorySessionStore::new();
    store.set(&sample_session()).unwrap();
    store.clear();
    assert!(store.is_empty());
    assert_eq!(store.get(), None);
}

#[test]
fn decode_entries_requires_both_keys() {
    assert_eq!(decode_entries(Some("t".into()), None), None);
    assert_eq!(decode_entries(None, Some("{}".into())), None);
    assert_eq!(decode_entries(Some(String::new()), Some("{}".into())), None);
}

#[test]
fn decode_entries_rejects_corrupt_user_json() {
    assert_eq!(decode_entries(Some("t".into()), Some("{not json".into())), None);
}

#[test]
fn encode_entries_uses_fixed_keys() {
    let [(k1, v1), (k2, v2)] = encode_entries(&sample_session()).unwrap();
    assert_eq!((k1, v1.as_str()), (TOKEN_KEY, "t1"));
    assert_eq!(k2, USER_KEY);
    assert_eq!(serde_json::from_str::<serde_json::Value>(&v2).unwrap(), json!({"id": 1, "name": "A"}));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_inert_outside_the_browser() {
    let store = BrowserSessionStore;
    assert_eq!(store.get(), None);
    assert_eq!(store.set(&sample_session()), Err(AuthError::Unavailable));
    store.clear();
}

/// Map-backed storage that rejects writes to one key.
#[derive(Default)]
struct FlakyStorage {
    entries: RefCell<BTreeMap<String, String>>,
    reject: Option<&'static str>,
}

impl FlakyStorage {
    fn rejecting(key: &'static str) -> Self {
        Self { reject: Some(key), ..Self::default() }
    }

    fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStorage for FlakyStorage {
    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        if self.reject == Some(key) {
            return Err("QuotaExceededError".into());
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[test]
fn write_session_stores_both_keys() {
    let storage = FlakyStorage::default();
    write_session(&storage, &sample_session()).unwrap();
    assert_eq!(storage.raw(TOKEN_KEY).as_deref(), Some("t1"));
    assert!(storage.raw(USER_KEY).is_some());
}

#[test]
fn failed_user_write_removes_token() {
    let storage = FlakyStorage::rejecting(USER_KEY);
    let err = write_session(&storage, &sample_session()).unwrap_err();

    assert!(matches!(err, AuthError::Storage(ref msg) if msg.starts_with("user:")));
    assert_eq!(storage.raw(TOKEN_KEY), None);
    assert_eq!(storage.raw(USER_KEY), None);
}

#[test]
fn failed_write_clears_previous_session() {
    let storage = FlakyStorage::rejecting(USER_KEY);
    storage.entries.borrow_mut().insert(TOKEN_KEY.into(), "old-token".into());
    storage.entries.borrow_mut().insert(USER_KEY.into(), r#"{"id":0}"#.into());

    assert!(write_session(&storage, &sample_session()).is_err());
    assert!(storage.entries.borrow().is_empty());
}

#[test]
fn failed_token_write_leaves_nothing_behind() {
    let storage = FlakyStorage::rejecting(TOKEN_KEY);
    storage.entries.borrow_mut().insert(USER_KEY.into(), r#"{"id":0}"#.into());

    let err = write_session(&storage, &sample_session()).unwrap_err();
    assert!(matches!(err, AuthError::Storage(ref msg) if msg.starts_with("auth_token:")));
    assert!(storage.entries.borrow().is_empty());
}

#[test]
fn memory_store_replaces_previous_session() {
    let store = MemorySessionStore::new();
    store.set(&Session { token: "old".into(), user: json!({"id": 0}) }).unwrap();
    store.set(&sample_session()).unwrap();
    assert_eq!(store.get(), Some(sample_session()));
}
