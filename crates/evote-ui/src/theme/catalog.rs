//! The two built-in theme definitions, keyed by mode.

use once_cell::sync::Lazy;

use super::definition::ThemeDefinition;
use super::mode::ThemeMode;
use super::palette::{Background, ColorRole, Palette, Rgb, TextColors};
use super::typography::APP_TYPOGRAPHY;

const WHITE: Rgb = Rgb::hex(0xffffff);

pub const DARK_PALETTE: Palette = Palette {
    primary: ColorRole {
        light: Rgb::hex(0x5ab7ff),
        main: Rgb::hex(0x0097ff),
        dark: Rgb::hex(0x0e75eb),
        contrast_text: WHITE,
    },
    secondary: ColorRole {
        light: Rgb::hex(0x6dd2c4),
        main: Rgb::hex(0x00b09a),
        dark: Rgb::hex(0x00937a),
        contrast_text: WHITE,
    },
    error: ColorRole {
        light: Rgb::hex(0xff8a65),
        main: Rgb::hex(0xff5722),
        dark: Rgb::hex(0xe64a19),
        contrast_text: WHITE,
    },
    success: ColorRole {
        light: Rgb::hex(0x6dd2c4),
        main: Rgb::hex(0x00b09a),
        dark: Rgb::hex(0x00937a),
        contrast_text: WHITE,
    },
    text: TextColors {
        primary: WHITE,
        secondary: Rgb::hex(0xb3b3b3),
        disabled: Rgb::hex(0x808080),
    },
    background: Background {
        default: Rgb::hex(0x303030),
        paper: Rgb::hex(0x424242),
    },
    divider: Rgb::hex(0x4f4f4f),
};

pub const LIGHT_PALETTE: Palette = Palette {
    primary: ColorRole {
        light: Rgb::hex(0x4f1aff),
        main: Rgb::hex(0x0008ff),
        dark: Rgb::hex(0x0006dd),
        contrast_text: WHITE,
    },
    secondary: ColorRole {
        light: Rgb::hex(0x00d2c8),
        main: Rgb::hex(0x00b6a6),
        dark: Rgb::hex(0x009685),
        contrast_text: WHITE,
    },
    error: ColorRole {
        light: Rgb::hex(0xe57373),
        main: Rgb::hex(0xf44336),
        dark: Rgb::hex(0xd32f2f),
        contrast_text: WHITE,
    },
    success: ColorRole {
        light: Rgb::hex(0x00d2c8),
        main: Rgb::hex(0x00b6a6),
        dark: Rgb::hex(0x009685),
        contrast_text: WHITE,
    },
    text: TextColors {
        primary: Rgb::hex(0x212121),
        secondary: Rgb::hex(0x757575),
        disabled: Rgb::hex(0x9e9e9e),
    },
    background: Background {
        default: WHITE,
        paper: WHITE,
    },
    divider: Rgb::hex(0xe0e0e0),
};

static DARK: Lazy<ThemeDefinition> =
    Lazy::new(|| ThemeDefinition::new(ThemeMode::Dark, DARK_PALETTE, APP_TYPOGRAPHY));

static LIGHT: Lazy<ThemeDefinition> =
    Lazy::new(|| ThemeDefinition::new(ThemeMode::Light, LIGHT_PALETTE, APP_TYPOGRAPHY));

/// Returns the definition for `mode`.
///
/// Always the same instance per mode; compare with [`std::ptr::eq`] to check
/// that two renders used the same theme.
pub fn resolve(mode: ThemeMode) -> &'static ThemeDefinition {
    let definition: &'static ThemeDefinition = match mode {
        ThemeMode::Dark => Lazy::force(&DARK),
        ThemeMode::Light => Lazy::force(&LIGHT),
    };
    debug_assert_eq!(
        definition.mode(),
        mode,
        "theme catalog returned the {} definition for {}",
        definition.mode(),
        mode
    );
    definition
}

/// Both definitions, dark first.
pub fn all() -> [&'static ThemeDefinition; 2] {
    [resolve(ThemeMode::Dark), resolve(ThemeMode::Light)]
}
