//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Only preference storage is needed by the POS runtime; it is backed by `window.localStorage`.
//! Native builds fall back to an in-process store so the runtime behaves the same in tests and
//! desktop previews, minus durability.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod adapters;
pub mod storage;

pub use adapters::{host_strategy_name, prefs_store};
pub use storage::local_prefs::WebPrefsStore;
