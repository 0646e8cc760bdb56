//! Registry of named styles.

use std::collections::{HashMap, HashSet};

use console::Style;

use super::{StyleValidationError, StyleValue};

/// Prefix written in front of text whose style name is not registered.
///
/// Rendering never fails on an unknown style; the indicator makes the typo
/// visible in the output instead.
pub const DEFAULT_MISSING_STYLE_INDICATOR: &str = "(!?)";

/// A set of named styles.
///
/// # Example
///
/// ```rust
/// use evote_ui::style::Styles;
/// use console::Style;
///
/// let styles = Styles::new()
///     .add("primary", Style::new().blue())
///     .add("card.votes", "primary");
///
/// assert!(styles.validate().is_ok());
/// assert_eq!(styles.apply_with_mode("card.votes", "15", false), "15");
/// ```
#[derive(Debug, Clone)]
pub struct Styles {
    entries: HashMap<String, StyleValue>,
    missing_indicator: String,
}

impl Styles {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            missing_indicator: DEFAULT_MISSING_STYLE_INDICATOR.to_string(),
        }
    }

    /// Registers `name`, replacing any previous entry.
    pub fn add<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.entries.insert(name.to_string(), value.into());
        self
    }

    /// Replaces the indicator written for unknown style names.
    pub fn missing_indicator(mut self, indicator: &str) -> Self {
        self.missing_indicator = indicator.to_string();
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Follows aliases from `name` to a concrete style.
    ///
    /// Returns `None` for unknown names, dangling aliases, and cycles.
    pub fn resolve(&self, name: &str) -> Option<&Style> {
        let mut seen = HashSet::new();
        let mut current = name;
        loop {
            if !seen.insert(current) {
                return None;
            }
            match self.entries.get(current)? {
                StyleValue::Concrete(style) => return Some(style),
                StyleValue::Alias(target) => current = target.as_str(),
            }
        }
    }

    /// Checks that every alias reaches a concrete style.
    pub fn validate(&self) -> Result<(), StyleValidationError> {
        let mut names: Vec<&String> = self.entries.keys().collect();
        // Sorted so the reported error is stable across runs.
        names.sort();

        for name in names {
            let mut path = vec![name.clone()];
            let mut current = name;
            while let Some(StyleValue::Alias(target)) = self.entries.get(current) {
                if path.contains(target) {
                    path.push(target.clone());
                    return Err(StyleValidationError::CycleDetected { path });
                }
                if !self.entries.contains_key(target) {
                    return Err(StyleValidationError::UnresolvedAlias {
                        from: current.clone(),
                        to: target.clone(),
                    });
                }
                path.push(target.clone());
                current = target;
            }
        }
        Ok(())
    }

    /// Styles `text` with the named style, emitting ANSI codes only when `use_color` is set.
    pub fn apply_with_mode(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.resolve(name) {
            Some(style) => style
                .clone()
                .force_styling(use_color)
                .apply_to(text)
                .to_string(),
            None => format!("{} {}", self.missing_indicator, text),
        }
    }

    /// Wraps `text` in `[name]...[/name]` tags instead of escape codes.
    pub fn apply_debug(&self, name: &str, text: &str) -> String {
        if self.resolve(name).is_some() {
            format!("[{name}]{text}[/{name}]")
        } else {
            format!("[{name}?]{text}[/{name}?]")
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_follows_alias_chain() {
        let styles = Styles::new()
            .add("primary", Style::new().blue())
            .add("accent", "primary")
            .add("card.votes", "accent");

        assert!(styles.resolve("card.votes").is_some());
    }

    #[test]
    fn test_resolve_unknown_is_none() {
        assert!(Styles::new().resolve("nope").is_none());
    }

    #[test]
    fn test_resolve_cycle_is_none() {
        let styles = Styles::new().add("a", "b").add("b", "a");
        assert!(styles.resolve("a").is_none());
    }

    #[test]
    fn test_validate_reports_dangling_alias() {
        let styles = Styles::new().add("label", "muted");
        assert_eq!(
            styles.validate(),
            Err(StyleValidationError::UnresolvedAlias {
                from: "label".into(),
                to: "muted".into(),
            })
        );
    }

    #[test]
    fn test_validate_reports_cycle() {
        let styles = Styles::new().add("a", "b").add("b", "a");
        match styles.validate() {
            Err(StyleValidationError::CycleDetected { path }) => {
                assert_eq!(path, vec!["a", "b", "a"]);
            }
            other => panic!("expected cycle, got {other:?}"),
        }
    }

    #[test]
    fn test_apply_without_color_is_plain() {
        let styles = Styles::new().add("bold", Style::new().bold());
        assert_eq!(styles.apply_with_mode("bold", "Send", false), "Send");
    }

    #[test]
    fn test_apply_with_color_emits_ansi() {
        let styles = Styles::new().add("red", Style::new().red());
        let out = styles.apply_with_mode("red", "x", true);
        assert!(out.contains("\x1b[31m"));
    }

    #[test]
    fn test_apply_missing_style_uses_indicator() {
        let styles = Styles::new().missing_indicator("??");
        assert_eq!(styles.apply_with_mode("ghost", "hi", false), "?? hi");
    }

    #[test]
    fn test_apply_debug_tags() {
        let styles = Styles::new().add("primary", Style::new().blue());
        assert_eq!(styles.apply_debug("primary", "go"), "[primary]go[/primary]");
        assert_eq!(styles.apply_debug("nope", "go"), "[nope?]go[/nope?]");
    }
}
