//! Typed host-service contracts shared by the POS runtime and its platform adapters.
//!
//! The runtime only ever talks to storage through [`PrefsStore`]; concrete browser adapters live
//! in `platform_host_web`. In-memory and no-op stores are provided here for tests and for targets
//! without durable storage.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod storage;
pub mod time;

pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture,
};
pub use time::{next_monotonic_timestamp_ms, unix_time_ms_now};
