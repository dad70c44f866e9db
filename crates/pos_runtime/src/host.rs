//! Host-side helpers: reducer effect execution and browser environment queries.

use std::rc::Rc;

use leptos::{create_effect, logging, spawn_local, Callable, Callback, SignalGetUntracked};
use platform_host::PrefsStore;

use crate::{
    model::ViewportSize,
    persistence,
    reducer::{PosAction, RuntimeEffect},
    runtime_context::PosRuntimeContext,
    theme::ColorScheme,
};

#[derive(Clone)]
/// Host service bundle used by the POS runtime.
pub struct PosHostContext {
    prefs: Rc<dyn PrefsStore>,
    host_strategy_name: &'static str,
}

impl Default for PosHostContext {
    fn default() -> Self {
        Self {
            prefs: platform_host_web::prefs_store(),
            host_strategy_name: platform_host_web::host_strategy_name(),
        }
    }
}

impl PosHostContext {
    /// Builds a host around an injected preference store.
    pub fn with_prefs(prefs: Rc<dyn PrefsStore>) -> Self {
        Self {
            prefs,
            host_strategy_name: "injected",
        }
    }

    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.prefs.clone()
    }

    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }

    /// Current viewport in CSS pixels. Non-browser targets report [`ViewportSize::default`].
    pub fn viewport_size(&self) -> ViewportSize {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let fallback = ViewportSize::default();
                let width = window.inner_width().ok().and_then(|value| value.as_f64());
                let height = window.inner_height().ok().and_then(|value| value.as_f64());
                return ViewportSize {
                    width: css_px(width, fallback.width),
                    height: css_px(height, fallback.height),
                };
            }
        }

        ViewportSize::default()
    }

    /// Scheme reported by `prefers-color-scheme`. Non-browser targets report light.
    pub fn system_color_scheme(&self) -> ColorScheme {
        #[cfg(target_arch = "wasm32")]
        {
            let prefers_dark = web_sys::window()
                .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok())
                .flatten()
                .map(|query| query.matches())
                .unwrap_or(false);
            if prefers_dark {
                return ColorScheme::Dark;
            }
        }

        ColorScheme::Light
    }

    /// Seeds the system scheme and hydrates the stored theme preference once the provider mounts.
    pub fn install_boot_hydration(&self, dispatch: Callback<PosAction>) {
        let host = self.clone();
        create_effect(move |_| {
            dispatch.call(PosAction::SystemSchemeChanged {
                scheme: host.system_color_scheme(),
            });
            let prefs = host.prefs_store();
            spawn_local(async move {
                match persistence::load_theme_preference(prefs.as_ref()).await {
                    Ok(Some(preference)) => {
                        dispatch.call(PosAction::HydrateTheme { preference });
                    }
                    Ok(None) => {}
                    Err(err) => logging::warn!("theme preference load failed: {err}"),
                }
            });
        });
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: PosRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PersistTheme => {
                let preference = runtime.state.get_untracked().theme.preference();
                let prefs = self.prefs_store();
                spawn_local(async move {
                    if let Err(err) =
                        persistence::persist_theme_preference(prefs.as_ref(), &preference).await
                    {
                        logging::warn!("persist theme failed: {err}");
                    }
                });
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn css_px(value: Option<f64>, fallback: u32) -> u32 {
    value
        .filter(|value| value.is_finite())
        .map(|value| value.max(0.0) as u32)
        .unwrap_or(fallback)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use futures::executor::block_on;
    use platform_host::MemoryPrefsStore;

    use super::*;

    #[test]
    fn native_host_reports_fallback_environment() {
        let host = PosHostContext::default();
        assert_eq!(host.host_strategy_name(), "in-memory");
        assert_eq!(host.viewport_size(), ViewportSize::default());
        assert_eq!(host.system_color_scheme(), ColorScheme::Light);
    }

    #[test]
    fn injected_prefs_store_is_shared() {
        let store = MemoryPrefsStore::default();
        let host = PosHostContext::with_prefs(Rc::new(store.clone()));
        block_on(host.prefs_store().set_pref("pos.theme.v1", "{}")).expect("set");
        assert_eq!(store.raw("pos.theme.v1"), Some("{}".to_string()));
        assert_eq!(host.host_strategy_name(), "injected");
    }
}
