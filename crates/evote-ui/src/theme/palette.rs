//! Palette colors.

use std::fmt;

use console::Style;
use serde::{Serialize, Serializer};

use crate::util::rgb_to_ansi256;

/// An sRGB color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Builds a color from a `0xRRGGBB` literal.
    pub const fn hex(value: u32) -> Self {
        Rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    pub fn to_tuple(self) -> (u8, u8, u8) {
        (self.0, self.1, self.2)
    }

    /// Foreground style using the nearest 256-color palette entry.
    pub fn fg(self) -> Style {
        self.tint(Style::new())
    }

    /// Adds this color as the foreground of an existing style.
    pub fn tint(self, style: Style) -> Style {
        style.color256(rgb_to_ansi256(self.to_tuple()))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The shades of one palette role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorRole {
    pub light: Rgb,
    pub main: Rgb,
    pub dark: Rgb,
    pub contrast_text: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextColors {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub disabled: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Background {
    pub default: Rgb,
    pub paper: Rgb,
}

/// Every color role a themed component may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: ColorRole,
    pub secondary: ColorRole,
    pub error: ColorRole,
    pub success: ColorRole,
    pub text: TextColors,
    pub background: Background,
    pub divider: Rgb,
}

impl Palette {
    /// Role paths accepted by [`Palette::color`], in display order.
    pub const ROLE_PATHS: &'static [&'static str] = &[
        "primary.light",
        "primary.main",
        "primary.dark",
        "secondary.light",
        "secondary.main",
        "secondary.dark",
        "error.main",
        "error.dark",
        "success.main",
        "text.primary",
        "text.secondary",
        "text.disabled",
        "background.default",
        "background.paper",
        "divider",
    ];

    /// Looks up a color by dotted role path, e.g. `primary.main` or `text.secondary`.
    pub fn color(&self, role: &str) -> Option<Rgb> {
        let (group, shade) = role.split_once('.').unwrap_or((role, "main"));
        let from_role = |r: &ColorRole| match shade {
            "light" => Some(r.light),
            "main" => Some(r.main),
            "dark" => Some(r.dark),
            "contrast_text" => Some(r.contrast_text),
            _ => None,
        };
        match group {
            "primary" => from_role(&self.primary),
            "secondary" => from_role(&self.secondary),
            "error" => from_role(&self.error),
            "success" => from_role(&self.success),
            "text" => match shade {
                "primary" | "main" => Some(self.text.primary),
                "secondary" => Some(self.text.secondary),
                "disabled" => Some(self.text.disabled),
                _ => None,
            },
            "background" => match shade {
                "default" | "main" => Some(self.background.default),
                "paper" => Some(self.background.paper),
                _ => None,
            },
            "divider" => Some(self.divider),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLE: ColorRole = ColorRole {
        light: Rgb::hex(0x5ab7ff),
        main: Rgb::hex(0x0097ff),
        dark: Rgb::hex(0x0e75eb),
        contrast_text: Rgb::hex(0xffffff),
    };

    fn palette() -> Palette {
        Palette {
            primary: ROLE,
            secondary: ROLE,
            error: ROLE,
            success: ROLE,
            text: TextColors {
                primary: Rgb::hex(0xffffff),
                secondary: Rgb::hex(0xb3b3b3),
                disabled: Rgb::hex(0x808080),
            },
            background: Background {
                default: Rgb::hex(0x303030),
                paper: Rgb::hex(0x424242),
            },
            divider: Rgb::hex(0x4f4f4f),
        }
    }

    #[test]
    fn test_hex_splits_channels() {
        assert_eq!(Rgb::hex(0x0097ff), Rgb(0x00, 0x97, 0xff));
    }

    #[test]
    fn test_display_is_css_hex() {
        assert_eq!(Rgb::hex(0x0e75eb).to_string(), "#0e75eb");
    }

    #[test]
    fn test_serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgb::hex(0xff5722)).unwrap();
        assert_eq!(json, "\"#ff5722\"");
    }

    #[test]
    fn test_color_lookup_by_role() {
        let p = palette();
        assert_eq!(p.color("primary"), Some(Rgb::hex(0x0097ff)));
        assert_eq!(p.color("primary.dark"), Some(Rgb::hex(0x0e75eb)));
        assert_eq!(p.color("text.secondary"), Some(Rgb::hex(0xb3b3b3)));
        assert_eq!(p.color("background.paper"), Some(Rgb::hex(0x424242)));
        assert_eq!(p.color("primary.ultra"), None);
        assert_eq!(p.color("warning"), None);
    }

    #[test]
    fn test_every_role_path_resolves() {
        let p = palette();
        for role in Palette::ROLE_PATHS {
            assert!(p.color(role).is_some(), "{role} should resolve");
        }
    }
}
