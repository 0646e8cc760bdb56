//! MiniJinja filters for themed output.

use minijinja::{Environment, Error, ErrorKind, Value};

use crate::output::OutputMode;
use crate::scope::context;
use crate::util::{pad_left, pad_right, truncate_to_width};

/// Registers the built-in filters on `env`.
///
/// `style` resolves the theme from the ambient scope on every call, so a
/// renderer built once keeps working across theme toggles.
pub(crate) fn register_filters(env: &mut Environment<'static>, mode: OutputMode) {
    let is_debug = mode.is_debug();
    let use_color = mode.should_use_color();

    env.add_filter(
        "style",
        move |value: Value, name: String| -> Result<String, Error> {
            let theme = context::use_theme()
                .map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))?;
            let text = value.to_string();
            Ok(if is_debug {
                theme.styles().apply_debug(&name, &text)
            } else {
                theme.styles().apply_with_mode(&name, &text, use_color)
            })
        },
    );

    // {{ value | nl }} ends the value with a line break; {{ "" | nl }} is a blank line.
    env.add_filter("nl", |value: Value| -> String { format!("{}\n", value) });

    env.add_filter("truncate_at", |value: Value, width: usize| -> String {
        truncate_to_width(&value.to_string(), width)
    });

    env.add_filter("pad_right", |value: Value, width: usize| -> String {
        pad_right(&value.to_string(), width)
    });

    env.add_filter("pad_left", |value: Value, width: usize| -> String {
        pad_left(&value.to_string(), width)
    });
}
