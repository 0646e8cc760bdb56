//! Output mode: how styles are written.

use std::str::FromStr;

/// Controls whether the `style` filter emits escape codes.
///
/// - `Auto`: ANSI when the terminal supports color, plain otherwise
/// - `Term`: always ANSI
/// - `Text`: never ANSI
/// - `TermDebug`: `[name]text[/name]` tags, for tests and for checking which
///   style each piece of output used
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Auto,
    Term,
    Text,
    TermDebug,
}

impl OutputMode {
    pub fn should_use_color(self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::TermDebug => false,
        }
    }

    pub fn is_debug(self) -> bool {
        self == OutputMode::TermDebug
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(OutputMode::Auto),
            "term" => Ok(OutputMode::Term),
            "text" => Ok(OutputMode::Text),
            "term-debug" => Ok(OutputMode::TermDebug),
            other => Err(format!(
                "unknown output mode '{other}' (expected auto, term, text, or term-debug)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_modes() {
        assert!(OutputMode::Term.should_use_color());
        assert!(!OutputMode::Text.should_use_color());
        assert!(!OutputMode::TermDebug.should_use_color());
        assert!(OutputMode::TermDebug.is_debug());
    }

    #[test]
    fn test_parse() {
        assert_eq!("term-debug".parse(), Ok(OutputMode::TermDebug));
        assert!("json".parse::<OutputMode>().is_err());
    }
}
