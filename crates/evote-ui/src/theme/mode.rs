//! Theme modes and the preference used to seed them.

use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, PoisonError};

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// The two-valued theme selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Returns the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            _ => Err(ThemeError::InvalidMode(s.to_string())),
        }
    }
}

/// Which mode the registry should start in.
///
/// `System` defers to the OS color scheme through the active detector; see
/// [`set_theme_detector`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
    System,
}

impl ThemePreference {
    /// Resolves the preference to a concrete mode.
    pub fn resolve(self) -> ThemeMode {
        match self {
            ThemePreference::Dark => ThemeMode::Dark,
            ThemePreference::Light => ThemeMode::Light,
            ThemePreference::System => detect_color_mode(),
        }
    }
}

impl FromStr for ThemePreference {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemePreference::Dark),
            "light" => Ok(ThemePreference::Light),
            "system" | "auto" => Ok(ThemePreference::System),
            _ => Err(ThemeError::InvalidMode(s.to_string())),
        }
    }
}

type ThemeDetector = fn() -> ThemeMode;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides how [`ThemePreference::System`] decides between light and dark.
///
/// Tests use this to pin a mode without depending on the host desktop.
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Restores OS detection after [`set_theme_detector`].
pub fn reset_theme_detector() {
    set_theme_detector(os_theme_detector);
}

pub(crate) fn detect_color_mode() -> ThemeMode {
    let detector = *THEME_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    detector()
}

fn os_theme_detector() -> ThemeMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ThemeMode::Dark,
        OsThemeMode::Light => ThemeMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_mode_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn test_toggled_is_involution() {
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            assert_ne!(mode.toggled(), mode);
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("Dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(" light ".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert_eq!(
            "sepia".parse::<ThemeMode>(),
            Err(ThemeError::InvalidMode("sepia".into()))
        );
    }

    #[test]
    fn test_parse_preference_accepts_auto() {
        assert_eq!("auto".parse::<ThemePreference>(), Ok(ThemePreference::System));
    }

    #[test]
    #[serial(theme_detector)]
    fn test_system_preference_uses_detector() {
        set_theme_detector(|| ThemeMode::Light);
        assert_eq!(ThemePreference::System.resolve(), ThemeMode::Light);

        set_theme_detector(|| ThemeMode::Dark);
        assert_eq!(ThemePreference::System.resolve(), ThemeMode::Dark);

        reset_theme_detector();
    }

    #[test]
    fn test_explicit_preferences_ignore_detector() {
        assert_eq!(ThemePreference::Dark.resolve(), ThemeMode::Dark);
        assert_eq!(ThemePreference::Light.resolve(), ThemeMode::Light);
    }

    #[test]
    fn test_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Light).unwrap(), "\"light\"");
    }
}
