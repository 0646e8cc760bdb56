//! Subcommand implementations.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use evote_ui::components::{Dashboard, Divider, Page};
use evote_ui::theme::{catalog, Palette};
use evote_ui::{
    Component, OutputMode, RenderContext, RenderError, Renderer, ThemeRegistry, ThemeScope,
};
use tracing::{debug, info, warn};

use crate::cli::{InteractiveArgs, RenderArgs};

/// Settings shared by every subcommand.
pub struct Session {
    pub output: OutputMode,
    pub dashboard: Dashboard,
}

/// Header plus a single page, without the accounts list.
struct PageScreen<'a>(&'a Dashboard);

impl Component for PageScreen<'_> {
    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        let divider = Divider {
            width: self.0.current_width(),
        };
        Ok([
            cx.child(&self.0.header)?,
            cx.child(&divider)?,
            self.0.render_page(cx)?,
        ]
        .join("\n\n"))
    }
}

pub fn run_render(session: Session, args: &RenderArgs) -> Result<()> {
    let registry = ThemeRegistry::global();
    let scope = ThemeScope::mount(registry);
    let renderer = Renderer::with_output(session.output)?;

    let mut dashboard = session.dashboard;
    if let Some(id) = args.select {
        dashboard.accounts.select(id);
    }
    for _ in 0..args.toggle {
        registry.request_toggle();
    }

    let frame = match args.page.page() {
        Some(page) => {
            dashboard.page = page;
            scope.render(&renderer, &PageScreen(&dashboard))?
        }
        None => scope.render(&renderer, &dashboard)?,
    };
    debug!(mode = %frame.mode, revision = frame.revision, "rendered frame");
    println!("{}", frame.output);
    Ok(())
}

pub fn run_palette(session: Session) -> Result<()> {
    let use_color = session.output.should_use_color();
    for definition in catalog::all() {
        println!("{}", definition.mode());
        for role in Palette::ROLE_PATHS {
            let Some(color) = definition.palette().color(role) else {
                continue;
            };
            let swatch = color.fg().force_styling(use_color).apply_to("██");
            println!("  {swatch} {role:<20} {color}");
        }
        println!();
    }
    Ok(())
}

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    Toggle,
    Select(u64),
    Show(Page),
    Fill { field: String, value: String },
    Submit,
    Redraw,
    Quit,
    Unknown(String),
}

impl Event {
    pub(crate) fn parse(line: &str) -> Event {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        let unknown = || Event::Unknown(line.to_string());
        match (command, rest) {
            ("t", "") => Event::Toggle,
            ("q", "") => Event::Quit,
            ("enter", "") => Event::Submit,
            ("", "") => Event::Redraw,
            ("s", id) => id.parse().map(Event::Select).unwrap_or_else(|_| unknown()),
            ("p", page) => page.parse().map(Event::Show).unwrap_or_else(|_| unknown()),
            ("f", "") => unknown(),
            ("f", rest) => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                Event::Fill {
                    field: field.to_string(),
                    value: value.trim().to_string(),
                }
            }
            _ => unknown(),
        }
    }
}

/// What the event loop does after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Keep reading; redraw if the view state changed.
    Continue { dirty: bool },
    Quit,
}

/// Applies one event to the dashboard. Submitted forms are echoed to `out` as JSON.
pub(crate) fn handle_event(
    event: Event,
    dashboard: &mut Dashboard,
    registry: &ThemeRegistry,
    out: &mut impl Write,
) -> Result<Step> {
    let dirty = match event {
        Event::Toggle => {
            registry.request_toggle();
            false
        }
        Event::Select(id) => dashboard.accounts.select(id).is_some(),
        Event::Show(page) => {
            let changed = dashboard.page != page;
            dashboard.page = page;
            changed
        }
        Event::Fill { field, value } => {
            let known = dashboard.set_field(&field, value);
            if !known {
                writeln!(out, "fields on this page: {}", dashboard.form_fields().join(", "))?;
            }
            known
        }
        Event::Submit => {
            let values = dashboard.submit();
            info!(page = %dashboard.page, %values, "form submitted");
            writeln!(out, "{values}")?;
            false
        }
        Event::Redraw => true,
        Event::Quit => return Ok(Step::Quit),
        Event::Unknown(input) => {
            warn!(%input, "unknown command");
            false
        }
    };
    Ok(Step::Continue { dirty })
}

const HELP: &str = "t: switch theme   s <id>: select account   p <send|receive|voting>: page\n\
                    f <field> <value>: fill form   enter: submit form   q: quit";

pub fn run_interactive(session: Session, args: &InteractiveArgs) -> Result<()> {
    let registry = ThemeRegistry::global();
    let scope = ThemeScope::mount(registry);
    let renderer = Renderer::with_output(session.output)?;
    let _observer = registry.observe(|mode| info!(%mode, "theme switched"));

    let mut dashboard = session.dashboard;
    if let Some(page) = args.page.page() {
        dashboard.page = page;
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut drawn_revision = None;
    let mut dirty = true;

    loop {
        if dirty || drawn_revision != Some(scope.revision()) {
            let frame = scope.render(&renderer, &dashboard)?;
            writeln!(stdout, "{}\n\n{HELP}", frame.output)?;
            stdout.flush()?;
            drawn_revision = Some(frame.revision);
        }

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("reading command from stdin")?;
        if read == 0 {
            break;
        }

        match handle_event(Event::parse(&line), &mut dashboard, registry, &mut stdout)? {
            Step::Continue { dirty: changed } => dirty = changed,
            Step::Quit => break,
        }
        stdout.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use evote_ui::{Account, ThemeMode};
    use serde_json::{json, Value};

    fn dashboard() -> Dashboard {
        Dashboard::new(vec![Account {
            id: 1,
            name: "Poseidon".into(),
            spend_pkey: "03b805fab5".into(),
            scan_pkey: "03b905fab5".into(),
            coins: 1000,
            votes: 15,
        }])
    }

    fn run(lines: &[&str], dashboard: &mut Dashboard, registry: &ThemeRegistry) -> String {
        let mut out = Vec::new();
        for line in lines {
            handle_event(Event::parse(line), dashboard, registry, &mut out).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_events() {
        assert_eq!(Event::parse("t\n"), Event::Toggle);
        assert_eq!(Event::parse("  q "), Event::Quit);
        assert_eq!(Event::parse("s 2"), Event::Select(2));
        assert_eq!(Event::parse("p voting"), Event::Show(Page::Voting));
        assert_eq!(Event::parse("\n"), Event::Redraw);
        assert_eq!(Event::parse("enter\n"), Event::Submit);
    }

    #[test]
    fn test_parse_fill_keeps_rest_of_line() {
        assert_eq!(
            Event::parse("f receiver  03b8 05fa \n"),
            Event::Fill {
                field: "receiver".into(),
                value: "03b8 05fa".into()
            }
        );
        assert_eq!(
            Event::parse("f amount"),
            Event::Fill {
                field: "amount".into(),
                value: String::new()
            }
        );
    }

    #[test]
    fn test_parse_rejects_bad_arguments() {
        assert_eq!(Event::parse("s two"), Event::Unknown("s two".into()));
        assert_eq!(Event::parse("p history"), Event::Unknown("p history".into()));
        assert_eq!(Event::parse("t now"), Event::Unknown("t now".into()));
        assert_eq!(Event::parse("f"), Event::Unknown("f".into()));
        assert_eq!(Event::parse("enter now"), Event::Unknown("enter now".into()));
    }

    #[test]
    fn test_fill_and_submit_echoes_json() {
        let registry = ThemeRegistry::new();
        let mut dashboard = dashboard();
        let out = run(
            &["f receiver 03b805fab5e8ec2eee", "f amount 100", "enter"],
            &mut dashboard,
            &registry,
        );
        let submitted: Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(submitted, json!({ "receiver": "03b805fab5e8ec2eee", "amount": "100" }));
    }

    #[test]
    fn test_submit_uses_active_page_form() {
        let registry = ThemeRegistry::new();
        let mut dashboard = dashboard();
        let out = run(&["p voting", "f vote_id ab12", "enter"], &mut dashboard, &registry);
        assert_eq!(out.trim(), r#"{"vote_id":"ab12"}"#);
    }

    #[test]
    fn test_fill_marks_view_dirty_only_for_known_fields() {
        let registry = ThemeRegistry::new();
        let mut dashboard = dashboard();
        let mut out = Vec::new();
        let known = Event::parse("f amount 5");
        let unknown = Event::parse("f vote_id 5");
        assert_eq!(
            handle_event(known, &mut dashboard, &registry, &mut out).unwrap(),
            Step::Continue { dirty: true }
        );
        assert_eq!(
            handle_event(unknown, &mut dashboard, &registry, &mut out).unwrap(),
            Step::Continue { dirty: false }
        );
        assert!(String::from_utf8(out).unwrap().contains("receiver, amount"));
    }

    #[test]
    fn test_toggle_and_quit_steps() {
        let registry = ThemeRegistry::new();
        let scope = ThemeScope::mount(&registry);
        let mut dashboard = dashboard();
        let mut out = Vec::new();
        handle_event(Event::Toggle, &mut dashboard, &registry, &mut out).unwrap();
        assert_eq!(scope.mode(), ThemeMode::Light);
        assert_eq!(
            handle_event(Event::Quit, &mut dashboard, &registry, &mut out).unwrap(),
            Step::Quit
        );
    }
}
