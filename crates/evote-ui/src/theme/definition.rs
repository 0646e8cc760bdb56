//! Theme definitions: palette plus typography, with derived styles.

use crate::style::{StyleValidationError, Styles};

use super::mode::ThemeMode;
use super::palette::Palette;
use super::typography::{Typography, Variant};

/// The color and typography tokens for one mode.
///
/// Definitions are built once by the catalog and handed out as `&'static`
/// references, so two renders under the same mode see the same instance.
/// The [`Styles`] a definition exposes are derived from its palette and
/// typography when it is built; the style names are the vocabulary that
/// component templates use with the `style` filter.
///
/// | Layer | Names |
/// |-------|-------|
/// | Palette | `primary`, `primary.light`, `primary.dark`, `secondary`, `error`, `error.dark`, `success`, `text`, `text.secondary`, `text.disabled`, `divider` |
/// | Typography | `h3`, `h4`, `h5`, `subtitle1`, `body1`, `caption` |
/// | Components | `headline`, `logo`, `mode`, `card.*`, `info.*`, `button*`, `tx.*`, `field.*`, `error.border` |
#[derive(Debug)]
pub struct ThemeDefinition {
    mode: ThemeMode,
    palette: Palette,
    typography: Typography,
    styles: Styles,
}

impl ThemeDefinition {
    pub fn new(mode: ThemeMode, palette: Palette, typography: Typography) -> Self {
        let styles = derive_styles(&palette, &typography);
        Self {
            mode,
            palette,
            typography,
            styles,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn typography(&self) -> &Typography {
        &self.typography
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    /// Validates that all derived style aliases resolve.
    pub fn validate(&self) -> Result<(), StyleValidationError> {
        self.styles.validate()
    }
}

fn derive_styles(palette: &Palette, typography: &Typography) -> Styles {
    let mut styles = Styles::new()
        .add("primary", palette.primary.main.fg())
        .add("primary.light", palette.primary.light.fg())
        .add("primary.dark", palette.primary.dark.fg())
        .add("secondary", palette.secondary.main.fg())
        .add("error", palette.error.main.fg())
        .add("error.dark", palette.error.dark.fg())
        .add("success", palette.success.main.fg())
        .add("text", palette.text.primary.fg())
        .add("text.secondary", palette.text.secondary.fg())
        .add("text.disabled", palette.text.disabled.fg())
        .add("divider", palette.divider.fg());

    for variant in Variant::ALL {
        let text_style = typography.get(variant).to_style();
        styles = styles.add(variant.style_name(), palette.text.primary.tint(text_style));
    }

    let h4 = typography.h4.to_style();
    let h5 = typography.h5.to_style();
    let caption = typography.caption.to_style();

    styles
        .add("headline", "h3")
        .add("logo", palette.primary.main.tint(h5.clone()))
        .add("mode", "secondary")
        // address card
        .add("card.name", palette.text.primary.tint(h4))
        .add("card.address", "text.secondary")
        .add("card.coins", palette.text.primary.tint(h5.clone()))
        .add("card.votes", palette.primary.main.tint(h5.clone()))
        .add("card.marker", "primary")
        .add("card.action", "text.secondary")
        .add("card.add", "secondary")
        // info line
        .add("info.label", palette.text.secondary.tint(caption))
        .add("info.content", "text")
        .add("info.large", "h5")
        // buttons
        .add("button", palette.primary.main.tint(console::Style::new().bold()))
        .add("button.disabled", "text.disabled")
        // transactions
        .add("tx.icon", "text.secondary")
        .add("tx.in", palette.secondary.main.tint(h5.clone()))
        .add("tx.out", palette.text.primary.tint(h5))
        // form fields
        .add("field.label", "text.secondary")
        .add("field.value", "text")
        .add("field.placeholder", "text.disabled")
        .add("error.border", "error.dark")
}
