//! Template renderer shared by all components.

use minijinja::Environment;
use serde::Serialize;

use super::filters::register_filters;
use crate::components::TEMPLATES;
use crate::error::RenderError;
use crate::output::OutputMode;
use crate::theme::catalog;

/// A MiniJinja environment with the component templates pre-compiled.
///
/// The renderer holds no theme. Themed output comes from the `style` filter,
/// which reads whatever definition the enclosing
/// [`ThemeScope`](crate::ThemeScope) provides for the current pass, so one
/// renderer serves every mode.
///
/// # Example
///
/// ```rust
/// use evote_ui::{OutputMode, Renderer, ThemeRegistry, ThemeScope};
/// use serde_json::json;
///
/// let mut renderer = Renderer::with_output(OutputMode::TermDebug).unwrap();
/// renderer.add_template("hello", r#"{{ who | style("primary") }}"#).unwrap();
///
/// let registry = ThemeRegistry::new();
/// let scope = ThemeScope::mount(&registry);
/// let out = scope
///     .provide(|_| renderer.render("hello", &json!({ "who": "voter" })))
///     .unwrap();
/// assert_eq!(out, "[primary]voter[/primary]");
/// ```
pub struct Renderer {
    env: Environment<'static>,
    output: OutputMode,
}

impl Renderer {
    /// Creates a renderer that decides on color from the terminal.
    ///
    /// # Errors
    ///
    /// Fails if a catalog definition has broken style aliases or a built-in
    /// template does not compile.
    pub fn new() -> Result<Self, RenderError> {
        Self::with_output(OutputMode::Auto)
    }

    /// Creates a renderer with an explicit output mode.
    pub fn with_output(output: OutputMode) -> Result<Self, RenderError> {
        for definition in catalog::all() {
            definition.validate()?;
        }

        let mut env = Environment::new();
        register_filters(&mut env, output);
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env, output })
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output
    }

    /// Registers an additional named template.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    /// Renders a registered template.
    ///
    /// Styled templates must run inside a scope; outside one the `style`
    /// filter fails.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(data)?)
    }

    /// Renders a one-off template string.
    pub fn render_str<T: Serialize>(&self, source: &str, data: &T) -> Result<String, RenderError> {
        Ok(self.env.render_str(source, data)?)
    }
}
