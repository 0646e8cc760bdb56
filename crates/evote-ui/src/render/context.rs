//! The explicit handle passed to components during a render pass.

use serde::Serialize;

use super::Renderer;
use crate::components::Component;
use crate::error::RenderError;
use crate::output::OutputMode;
use crate::theme::{Palette, ThemeDefinition, ThemeMode};

/// Everything a component needs to render itself for one pass.
///
/// Built by [`ThemeScope::render`](crate::ThemeScope::render) with the
/// definition resolved at the start of the pass. Every component in the tree
/// receives the same `RenderContext`, and through it the same definition.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    renderer: &'a Renderer,
    theme: &'static ThemeDefinition,
}

impl<'a> RenderContext<'a> {
    pub fn new(renderer: &'a Renderer, theme: &'static ThemeDefinition) -> Self {
        Self { renderer, theme }
    }

    pub fn theme(&self) -> &'static ThemeDefinition {
        self.theme
    }

    pub fn mode(&self) -> ThemeMode {
        self.theme.mode()
    }

    pub fn palette(&self) -> &'static Palette {
        self.theme.palette()
    }

    pub fn renderer(&self) -> &'a Renderer {
        self.renderer
    }

    /// Renders one of the renderer's named templates.
    pub fn template<T: Serialize>(&self, name: &str, data: &T) -> Result<String, RenderError> {
        self.renderer.render(name, data)
    }

    /// Renders a child component with this same context.
    pub fn child(&self, component: &dyn Component) -> Result<String, RenderError> {
        component.render(self)
    }

    /// Renders children in order, one per line.
    pub fn children(&self, components: &[&dyn Component]) -> Result<String, RenderError> {
        let parts = components
            .iter()
            .map(|c| c.render(self))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(parts.join("\n"))
    }

    /// Styles `text` from Rust code, honouring the renderer's output mode.
    pub fn style(&self, name: &str, text: &str) -> String {
        let styles = self.theme.styles();
        match self.renderer.output_mode() {
            OutputMode::TermDebug => styles.apply_debug(name, text),
            mode => styles.apply_with_mode(name, text, mode.should_use_color()),
        }
    }
}
