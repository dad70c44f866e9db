//! Runs reducer-emitted runtime effects.
//!
//! Theme writes read the preference when they execute, so a burst of theme actions between two
//! drains collapses into a single write of the latest preference.

use leptos::*;

use crate::{reducer::RuntimeEffect, runtime_context::PosRuntimeContext};

/// Installs the effect executor for `runtime`.
pub fn install(runtime: PosRuntimeContext) {
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        // Reset first so effects that dispatch start a fresh batch.
        runtime.effects.set(Vec::new());

        let host = runtime.host.get_value();
        for effect in coalesce(queued) {
            host.run_runtime_effect(runtime, effect);
        }
    });
}

/// Drops repeats within one batch, keeping first-occurrence order.
fn coalesce(queued: Vec<RuntimeEffect>) -> Vec<RuntimeEffect> {
    let mut batch = Vec::with_capacity(queued.len());
    for effect in queued {
        if !batch.contains(&effect) {
            batch.push(effect);
        }
    }
    batch
}
