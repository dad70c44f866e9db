//! Preference persistence for the theme and runtime configuration.
//!
//! Orders are never persisted; only these small preference payloads go through [`PrefsStore`].

use platform_host::{load_pref_with, save_pref_with, PrefsStore};

use crate::{config::PosConfig, theme::ThemePreference};

pub const THEME_PREF_KEY: &str = "pos.theme.v1";
pub const CONFIG_PREF_KEY: &str = "pos.config.v1";

/// Loads the stored theme preference, if any.
///
/// # Errors
///
/// Returns an error when the store read fails or the stored payload is malformed.
pub async fn load_theme_preference<S: PrefsStore + ?Sized>(
    store: &S,
) -> Result<Option<ThemePreference>, String> {
    load_pref_with(store, THEME_PREF_KEY).await
}

/// Writes the theme preference.
///
/// # Errors
///
/// Returns an error when the store write fails.
pub async fn persist_theme_preference<S: PrefsStore + ?Sized>(
    store: &S,
    preference: &ThemePreference,
) -> Result<(), String> {
    save_pref_with(store, THEME_PREF_KEY, preference).await
}

/// Loads the configuration override, falling back to [`PosConfig::default`] when none is stored
/// or the stored one cannot be read.
pub async fn load_pos_config<S: PrefsStore + ?Sized>(store: &S) -> PosConfig {
    match load_pref_with::<_, PosConfig>(store, CONFIG_PREF_KEY).await {
        Ok(Some(config)) => config,
        Ok(None) => PosConfig::default(),
        Err(err) => {
            leptos::logging::warn!("pos config load failed, using defaults: {err}");
            PosConfig::default()
        }
    }
}

/// Writes the configuration override.
///
/// # Errors
///
/// Returns an error when the store write fails.
pub async fn persist_pos_config<S: PrefsStore + ?Sized>(
    store: &S,
    config: &PosConfig,
) -> Result<(), String> {
    save_pref_with(store, CONFIG_PREF_KEY, config).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{MemoryPrefsStore, PrefsStoreFuture};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{model::Money, theme::ColorScheme};

    struct BrokenStore;

    impl PrefsStore for BrokenStore {
        fn get_pref<'a>(
            &'a self,
            _key: &'a str,
        ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
            Box::pin(async { Err("storage offline".to_string()) })
        }

        fn set_pref<'a>(
            &'a self,
            _key: &'a str,
            _raw_json: &'a str,
        ) -> PrefsStoreFuture<'a, Result<(), String>> {
            Box::pin(async { Err("storage offline".to_string()) })
        }

        fn remove_pref<'a>(&'a self, _key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
            Box::pin(async { Err("storage offline".to_string()) })
        }
    }

    #[test]
    fn theme_preference_round_trips_under_its_key() {
        let store = MemoryPrefsStore::default();
        assert_eq!(block_on(load_theme_preference(&store)).unwrap(), None);

        let preference = ThemePreference {
            scheme: ColorScheme::Dark,
            follow_system: false,
        };
        block_on(persist_theme_preference(&store, &preference)).unwrap();

        assert_eq!(store.keys(), vec![THEME_PREF_KEY.to_string()]);
        assert_eq!(
            block_on(load_theme_preference(&store)).unwrap(),
            Some(preference)
        );
    }

    #[test]
    fn store_failures_surface_as_errors_for_theme() {
        assert!(block_on(load_theme_preference(&BrokenStore)).is_err());
        let preference = ThemePreference::default();
        assert!(block_on(persist_theme_preference(&BrokenStore, &preference)).is_err());
    }

    #[test]
    fn config_falls_back_to_defaults() {
        let store = MemoryPrefsStore::default();
        assert_eq!(block_on(load_pos_config(&store)), PosConfig::default());
        assert_eq!(block_on(load_pos_config(&BrokenStore)), PosConfig::default());

        block_on(store.set_pref(CONFIG_PREF_KEY, "[1, 2]")).unwrap();
        assert_eq!(block_on(load_pos_config(&store)), PosConfig::default());
    }

    #[test]
    fn stored_config_override_is_used() {
        let store = MemoryPrefsStore::default();
        let config = PosConfig {
            unit_price: Money::from_cents(1_299),
            ..PosConfig::default()
        };
        block_on(persist_pos_config(&store, &config)).unwrap();
        assert_eq!(block_on(load_pos_config(&store)), config);
    }
}
