//! Leaf components: text lines, buttons, and the error card.

use serde::Serialize;

use super::Component;
use crate::error::RenderError;
use crate::render::RenderContext;
use crate::util::pad_left;

pub(crate) const INFO_LINE: &str = r#"{{ label | style("info.label") }}
{{ content | style(content_style) }}"#;

pub(crate) const HEADLINE: &str = r#"{{ text | style("headline") }}"#;

pub(crate) const SUBHEADING: &str = r#"{{ text | style("h5") }}"#;

pub(crate) const BUTTON: &str = r#"[ {{ label | style(style_name) }} ]"#;

pub(crate) const ERROR_CARD: &str = r#"{{ top | style("error.border") }}
{{ "│" | style("error.border") }} {{ message }} {{ "│" | style("error.border") }}
{{ bottom | style("error.border") }}"#;

pub(crate) const DIVIDER: &str = r#"{{ line | style("divider") }}"#;

/// A small label above a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoLine {
    pub label: String,
    pub content: String,
    pub large: bool,
}

impl InfoLine {
    pub fn new(label: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            content: content.into(),
            large: false,
        }
    }

    pub fn large(mut self) -> Self {
        self.large = true;
        self
    }
}

impl Component for InfoLine {
    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        #[derive(Serialize)]
        struct View<'a> {
            label: &'a str,
            content: &'a str,
            content_style: &'static str,
        }
        cx.template(
            "info_line",
            &View {
                label: &self.label,
                content: &self.content,
                content_style: if self.large { "info.large" } else { "info.content" },
            },
        )
    }
}

/// Page title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline(pub String);

impl Component for Headline {
    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        cx.template("headline", &serde_json::json!({ "text": self.0 }))
    }
}

/// Section title inside a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subheading(pub String);

impl Component for Subheading {
    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        cx.template("subheading", &serde_json::json!({ "text": self.0 }))
    }
}

/// An outlined action button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub disabled: bool,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl Component for Button {
    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        let style_name = if self.disabled { "button.disabled" } else { "button" };
        cx.template(
            "button",
            &serde_json::json!({ "label": self.label, "style_name": style_name }),
        )
    }
}

/// A right-aligned row of buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonContainer {
    pub buttons: Vec<Button>,
    pub width: usize,
}

impl ButtonContainer {
    pub fn new(buttons: Vec<Button>, width: usize) -> Self {
        Self { buttons, width }
    }
}

impl Component for ButtonContainer {
    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        let rendered = self
            .buttons
            .iter()
            .map(|b| cx.child(b))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(pad_left(&rendered.join("  "), self.width))
    }
}

/// A message framed in the error color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorCard {
    pub message: String,
}

impl ErrorCard {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Component for ErrorCard {
    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        let inner = console::measure_text_width(&self.message) + 2;
        let rule = "─".repeat(inner);
        cx.template(
            "error_card",
            &serde_json::json!({
                "top": format!("┌{rule}┐"),
                "bottom": format!("└{rule}┘"),
                "message": self.message,
            }),
        )
    }
}

/// A horizontal rule in the divider color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Divider {
    pub width: usize,
}

impl Component for Divider {
    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        cx.template("divider", &serde_json::json!({ "line": "─".repeat(self.width) }))
    }
}
