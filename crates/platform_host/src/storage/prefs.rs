//! Key-value preference storage contract and the in-process adapters.
//!
//! Values are JSON text stored per key. The trait is object safe so hosts can hand the runtime an
//! `Rc<dyn PrefsStore>` chosen at startup.

use std::{cell::RefCell, collections::BTreeMap, future::Future, pin::Pin, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Object-safe boxed future returned by [`PrefsStore`] methods.
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host key-value store for small preference payloads.
pub trait PrefsStore {
    /// Reads the raw JSON stored under `key`, or `None` when the key was never written.
    fn get_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<Option<String>, String>>;

    /// Writes raw JSON under `key`, replacing any previous value.
    fn set_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>>;

    /// Removes `key`. Removing a missing key succeeds.
    fn remove_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Store that remembers nothing. Used on targets without durable storage.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn get_pref<'a>(
        &'a self,
        _key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn set_pref<'a>(
        &'a self,
        _key: &'a str,
        _raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn remove_pref<'a>(&'a self, _key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory store. Clones share the same backing map.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Returns the stored keys in sorted order.
    pub fn keys(&self) -> Vec<String> {
        self.inner.borrow().keys().cloned().collect()
    }

    /// Returns the raw JSON stored under `key` without going through the async contract.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn get_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.raw(key)) })
    }

    fn set_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .insert(key.to_string(), raw_json.to_string());
            Ok(())
        })
    }

    fn remove_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner.borrow_mut().remove(key);
            Ok(())
        })
    }
}

/// Reads and deserializes a typed value through any [`PrefsStore`].
///
/// # Errors
///
/// Returns an error when the store read fails or the stored JSON does not match `T`.
pub async fn load_pref_with<S: PrefsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.get_pref(key).await? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| format!("pref `{key}` is malformed: {e}"))
}

/// Serializes and writes a typed value through any [`PrefsStore`].
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub async fn save_pref_with<S: PrefsStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.set_pref(key, &raw).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct SchemePref {
        dark: bool,
    }

    #[test]
    fn memory_store_set_get_and_remove() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        block_on(store_obj.set_pref("pos.theme", "{\"dark\":true}")).expect("set");
        assert_eq!(
            block_on(store_obj.get_pref("pos.theme")).expect("get"),
            Some("{\"dark\":true}".to_string())
        );
        assert_eq!(store.keys(), vec!["pos.theme".to_string()]);

        block_on(store_obj.remove_pref("pos.theme")).expect("remove");
        assert_eq!(
            block_on(store_obj.get_pref("pos.theme")).expect("get"),
            None
        );
        block_on(store_obj.remove_pref("pos.theme")).expect("remove missing key");
    }

    #[test]
    fn clones_share_backing_map() {
        let store = MemoryPrefsStore::default();
        let other = store.clone();
        block_on(store.set_pref("k", "1")).expect("set");
        assert_eq!(other.raw("k"), Some("1".to_string()));
    }

    #[test]
    fn typed_helpers_round_trip_and_report_bad_json() {
        let store = MemoryPrefsStore::default();
        block_on(save_pref_with(&store, "scheme", &SchemePref { dark: true })).expect("save");
        let loaded: Option<SchemePref> = block_on(load_pref_with(&store, "scheme")).expect("load");
        assert_eq!(loaded, Some(SchemePref { dark: true }));

        block_on(store.set_pref("scheme", "not json")).expect("set");
        let err = block_on(load_pref_with::<_, SchemePref>(&store, "scheme"))
            .expect_err("malformed pref");
        assert!(err.contains("pref `scheme` is malformed"), "{err}");
    }

    #[test]
    fn noop_store_is_empty_and_successful() {
        let store = NoopPrefsStore;
        let store_obj: &dyn PrefsStore = &store;
        assert_eq!(block_on(store_obj.get_pref("k")).expect("get"), None);
        block_on(store_obj.set_pref("k", "{}")).expect("set");
        block_on(store_obj.remove_pref("k")).expect("remove");
        assert_eq!(block_on(store_obj.get_pref("k")).expect("get"), None);
    }
}
