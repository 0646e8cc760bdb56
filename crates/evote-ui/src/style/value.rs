//! Style values: either a concrete `console` style or an alias.

use console::Style;

/// A registered style.
///
/// Concrete values carry the formatting directly. Aliases name another entry
/// in the same [`Styles`](super::Styles) registry, which lets semantic names
/// such as `card.votes` point at palette roles such as `primary`.
#[derive(Debug, Clone)]
pub enum StyleValue {
    /// Formatting applied as-is.
    Concrete(Style),
    /// Name of another style to resolve.
    Alias(String),
}

impl From<Style> for StyleValue {
    fn from(style: Style) -> Self {
        StyleValue::Concrete(style)
    }
}

impl From<&str> for StyleValue {
    fn from(name: &str) -> Self {
        StyleValue::Alias(name.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(name: String) -> Self {
        StyleValue::Alias(name)
    }
}
