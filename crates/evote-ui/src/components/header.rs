//! Application header: logo group plus the theme indicator.

use serde::Serialize;

use super::{Component, Headline};
use crate::error::RenderError;
use crate::render::RenderContext;
use crate::theme::ThemeMode;

pub(crate) const LOGO_GROUP: &str = r#"{{ "◆" | style("logo") }} {{ "GO" | style(name_style) }}
  {{ "LOSOVANIE" | style(name_style) }}"#;

pub(crate) const HEADER: &str = r#"{{ logo }}
{{ icon | style("mode") }} {{ mode_label | style("mode") }}  {{ hint | style("text.secondary") }}
{%- if title %}

{{ title }}
{%- endif %}"#;

/// The "GO / LOSOVANIE" wordmark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogoGroup {
    pub large: bool,
}

impl Component for LogoGroup {
    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        let name_style = if self.large { "headline" } else { "logo" };
        cx.template("logo_group", &serde_json::json!({ "name_style": name_style }))
    }
}

/// Top of every screen.
///
/// Shows which mode is active and how to switch it; the indicator is read
/// from the render context, so it always matches the theme the rest of the
/// frame was drawn with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    pub title: Option<String>,
    pub toggle_hint: Option<String>,
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn toggle_hint(mut self, hint: impl Into<String>) -> Self {
        self.toggle_hint = Some(hint.into());
        self
    }
}

impl Component for Header {
    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        #[derive(Serialize)]
        struct View<'a> {
            logo: String,
            icon: &'static str,
            mode_label: &'static str,
            hint: &'a str,
            title: Option<String>,
        }

        let (icon, mode_label) = match cx.mode() {
            ThemeMode::Dark => ("☾", "dark theme"),
            ThemeMode::Light => ("☀", "light theme"),
        };
        let title = match &self.title {
            Some(t) => Some(cx.child(&Headline(t.clone()))?),
            None => None,
        };
        cx.template(
            "header",
            &View {
                logo: cx.child(&LogoGroup::default())?,
                icon,
                mode_label,
                hint: self.toggle_hint.as_deref().unwrap_or("t: switch theme"),
                title,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::{render_in, tagged, text};
    use crate::OutputMode;

    #[test]
    fn test_logo_group_text() {
        assert_eq!(text(&LogoGroup::default()), "◆ GO\n  LOSOVANIE");
    }

    #[test]
    fn test_large_logo_uses_headline() {
        let out = tagged(&LogoGroup { large: true });
        assert!(out.contains("[headline]GO[/headline]"));
    }

    #[test]
    fn test_header_reports_dark_mode() {
        assert_eq!(
            text(&Header::new()),
            "◆ GO\n  LOSOVANIE\n☾ dark theme  t: switch theme"
        );
    }

    #[test]
    fn test_header_reports_light_mode() {
        let out = render_in(&Header::new(), ThemeMode::Light, OutputMode::Text);
        assert!(out.contains("☀ light theme"));
    }

    #[test]
    fn test_header_with_title_and_hint() {
        let header = Header::new().title("Votes").toggle_hint("press t");
        let out = text(&header);
        assert!(out.ends_with("press t\n\nVotes"));
    }
}
