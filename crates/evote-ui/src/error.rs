//! Error types for theme propagation and rendering.

use thiserror::Error;

use crate::style::StyleValidationError;

/// Errors raised by the theme registry, scopes, and mode parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// A toggle was requested before any [`ThemeScope`](crate::ThemeScope) mounted.
    ///
    /// This is an initialization-order mistake in the caller. The public
    /// [`ThemeRegistry::request_toggle`](crate::ThemeRegistry::request_toggle)
    /// logs it and carries on.
    #[error("theme toggle requested before any theme scope was mounted")]
    NotMounted,

    /// A themed component rendered outside of any theme scope.
    #[error("no theme is in scope; render components through a ThemeScope")]
    NoProvider,

    /// A textual mode or preference could not be parsed.
    #[error("unknown theme mode '{0}' (expected dark or light)")]
    InvalidMode(String),
}

/// Errors returned while rendering components.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template compilation or evaluation failed.
    #[error(transparent)]
    Template(#[from] minijinja::Error),

    /// The theme could not be resolved for this render.
    #[error(transparent)]
    Theme(#[from] ThemeError),

    /// A theme definition carries broken style aliases.
    #[error("invalid theme styles: {0}")]
    Styles(#[from] StyleValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_mounted_message() {
        let msg = ThemeError::NotMounted.to_string();
        assert!(msg.contains("before any theme scope"));
    }

    #[test]
    fn test_invalid_mode_names_input() {
        let msg = ThemeError::InvalidMode("sepia".into()).to_string();
        assert!(msg.contains("sepia"));
    }

    #[test]
    fn test_render_error_wraps_theme_error() {
        let err: RenderError = ThemeError::NoProvider.into();
        assert!(matches!(err, RenderError::Theme(ThemeError::NoProvider)));
        assert!(err.to_string().contains("no theme is in scope"));
    }
}
