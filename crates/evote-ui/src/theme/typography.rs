//! Typography scale shared by both modes.

use console::Style;
use serde::Serialize;

/// Text variants used by the components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    H3,
    H4,
    H5,
    Subtitle1,
    Body1,
    Caption,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::H3,
        Variant::H4,
        Variant::H5,
        Variant::Subtitle1,
        Variant::Body1,
        Variant::Caption,
    ];

    /// Style registry name for this variant.
    pub fn style_name(self) -> &'static str {
        match self {
            Variant::H3 => "h3",
            Variant::H4 => "h4",
            Variant::H5 => "h5",
            Variant::Subtitle1 => "subtitle1",
            Variant::Body1 => "body1",
            Variant::Caption => "caption",
        }
    }
}

/// Size and weight of one variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStyle {
    /// Font size in rem.
    pub size: f32,
    pub weight: u16,
}

impl TextStyle {
    /// Terminal rendition: heavy or large text is bold, small text is dimmed.
    pub fn to_style(self) -> Style {
        let mut style = Style::new();
        if self.weight >= 500 || self.size >= 2.0 {
            style = style.bold();
        }
        if self.size < 0.8 {
            style = style.dim();
        }
        style
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Typography {
    pub h3: TextStyle,
    pub h4: TextStyle,
    pub h5: TextStyle,
    pub subtitle1: TextStyle,
    pub body1: TextStyle,
    pub caption: TextStyle,
}

impl Typography {
    pub fn get(&self, variant: Variant) -> TextStyle {
        match variant {
            Variant::H3 => self.h3,
            Variant::H4 => self.h4,
            Variant::H5 => self.h5,
            Variant::Subtitle1 => self.subtitle1,
            Variant::Body1 => self.body1,
            Variant::Caption => self.caption,
        }
    }
}

/// The app typography: the usual material scale with lighter headlines.
pub const APP_TYPOGRAPHY: Typography = Typography {
    h3: TextStyle { size: 3.0, weight: 400 },
    h4: TextStyle { size: 2.125, weight: 400 },
    h5: TextStyle { size: 1.5, weight: 500 },
    subtitle1: TextStyle { size: 1.0, weight: 400 },
    body1: TextStyle { size: 1.0, weight: 400 },
    caption: TextStyle { size: 0.6, weight: 400 },
};
