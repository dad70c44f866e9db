//! Color scheme preference with optional "follow the system" behavior.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown color scheme `{0}`")]
pub struct UnknownColorScheme(pub String);

impl FromStr for ColorScheme {
    type Err = UnknownColorScheme;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownColorScheme(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Persisted theme preference.
pub struct ThemePreference {
    pub scheme: ColorScheme,
    pub follow_system: bool,
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self {
            scheme: ColorScheme::Light,
            follow_system: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Live theme state. `scheme` is what the screen renders with.
pub struct ThemeState {
    scheme: ColorScheme,
    follow_system: bool,
    system_scheme: ColorScheme,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            scheme: ColorScheme::Light,
            follow_system: true,
            system_scheme: ColorScheme::Light,
        }
    }
}

impl ThemeState {
    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn follows_system(&self) -> bool {
        self.follow_system
    }

    pub fn system_scheme(&self) -> ColorScheme {
        self.system_scheme
    }

    /// The part of the state that is written to storage.
    pub fn preference(&self) -> ThemePreference {
        ThemePreference {
            scheme: self.scheme,
            follow_system: self.follow_system,
        }
    }

    /// Picks a scheme explicitly. The follow-system flag is left as is, so a later system change
    /// still wins while following.
    pub fn set_scheme(&mut self, scheme: ColorScheme) {
        self.scheme = scheme;
    }

    /// Flips between light and dark and stops following the system.
    pub fn toggle(&mut self) {
        self.scheme = self.scheme.flipped();
        self.follow_system = false;
    }

    pub fn set_follow_system(&mut self, follow: bool) {
        self.follow_system = follow;
        if follow {
            self.scheme = self.system_scheme;
        }
    }

    pub fn system_scheme_changed(&mut self, system: ColorScheme) {
        self.system_scheme = system;
        if self.follow_system {
            self.scheme = system;
        }
    }

    /// Applies a stored preference at boot.
    pub fn hydrate(&mut self, preference: ThemePreference) {
        self.follow_system = preference.follow_system;
        self.scheme = if preference.follow_system {
            self.system_scheme
        } else {
            preference.scheme
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn toggle_flips_scheme_and_stops_following_system() {
        let mut theme = ThemeState::default();
        theme.toggle();
        assert_eq!(theme.scheme(), ColorScheme::Dark);
        assert!(!theme.follows_system());

        theme.system_scheme_changed(ColorScheme::Light);
        assert_eq!(theme.scheme(), ColorScheme::Dark);
    }

    #[test]
    fn following_system_tracks_system_changes() {
        let mut theme = ThemeState::default();
        theme.system_scheme_changed(ColorScheme::Dark);
        assert_eq!(theme.scheme(), ColorScheme::Dark);

        theme.toggle();
        theme.set_follow_system(true);
        assert_eq!(theme.scheme(), ColorScheme::Dark);
        theme.system_scheme_changed(ColorScheme::Light);
        assert_eq!(theme.scheme(), ColorScheme::Light);
    }

    #[test]
    fn hydrate_prefers_system_scheme_when_following() {
        let mut theme = ThemeState::default();
        theme.system_scheme_changed(ColorScheme::Dark);

        theme.hydrate(ThemePreference {
            scheme: ColorScheme::Light,
            follow_system: true,
        });
        assert_eq!(theme.scheme(), ColorScheme::Dark);

        theme.hydrate(ThemePreference {
            scheme: ColorScheme::Light,
            follow_system: false,
        });
        assert_eq!(theme.scheme(), ColorScheme::Light);
        assert_eq!(
            theme.preference(),
            ThemePreference {
                scheme: ColorScheme::Light,
                follow_system: false,
            }
        );
    }

    #[test]
    fn scheme_parses_case_insensitively() {
        assert_eq!(" Dark ".parse::<ColorScheme>(), Ok(ColorScheme::Dark));
        assert_eq!(
            "sepia".parse::<ColorScheme>(),
            Err(UnknownColorScheme("sepia".to_string()))
        );
        assert_eq!(
            serde_json::to_string(&ThemePreference::default()).unwrap(),
            r#"{"scheme":"light","follow_system":true}"#
        );
    }
}
