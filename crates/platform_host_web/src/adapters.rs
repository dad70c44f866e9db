//! Adapter factories used by the runtime entry layer.

use std::rc::Rc;

use platform_host::{MemoryPrefsStore, PrefsStore};

use crate::WebPrefsStore;

/// Returns the preference store for the current target.
///
/// `wasm32` builds get [`WebPrefsStore`]; everything else gets a fresh [`MemoryPrefsStore`].
pub fn prefs_store() -> Rc<dyn PrefsStore> {
    if cfg!(target_arch = "wasm32") {
        Rc::new(WebPrefsStore)
    } else {
        Rc::new(MemoryPrefsStore::default())
    }
}

/// Returns a stable token naming the storage strategy picked by [`prefs_store`].
pub fn host_strategy_name() -> &'static str {
    if cfg!(target_arch = "wasm32") {
        "browser-local-storage"
    } else {
        "in-memory"
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn native_prefs_store_keeps_values_in_process() {
        let store = prefs_store();
        block_on(store.set_pref("pos.theme.v1", "{}")).expect("set");
        assert_eq!(
            block_on(store.get_pref("pos.theme.v1")).expect("get"),
            Some("{}".to_string())
        );
        assert_eq!(host_strategy_name(), "in-memory");
    }
}
