//! `evote`: the wallet and voting screens in a terminal.

use anyhow::Result;
use clap::Parser;
use evote_ui::components::{Dashboard, DEFAULT_WIDTH};
use evote_ui::{ThemePreference, ThemeRegistry};
use terminal_size::{terminal_size, Width};
use tracing::debug;

mod cli;
mod commands;
mod fixtures;
mod logging;

use crate::cli::{Cli, Command};
use crate::commands::{run_interactive, run_palette, run_render, Session};
use crate::logging::{init_logging, LogConfig};

const MAX_WIDTH: usize = 72;

fn main() {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_verbosity(cli.verbose));

    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let preference = ThemePreference::from(cli.theme);
    let mode = preference.resolve();
    ThemeRegistry::global().set_mode(mode);
    debug!(?preference, %mode, "seeded theme registry");

    let accounts = match &cli.accounts {
        Some(path) => fixtures::load_accounts(path)?,
        None => fixtures::demo_accounts(),
    };
    let width = resolve_width(cli.width);
    let session = Session {
        output: cli.output.into(),
        dashboard: Dashboard::new(accounts)
            .votes(fixtures::demo_votes())
            .width(width),
    };

    match cli.command {
        Command::Render(args) => run_render(session, &args),
        Command::Palette => run_palette(session),
        Command::Interactive(args) => run_interactive(session, &args),
    }
}

/// The requested width, or the terminal's, capped at [`MAX_WIDTH`].
fn resolve_width(requested: Option<usize>) -> usize {
    requested.unwrap_or_else(terminal_width).min(MAX_WIDTH)
}

fn terminal_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| usize::from(w))
        .unwrap_or(DEFAULT_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_width_is_capped() {
        assert_eq!(resolve_width(Some(usize::MAX)), MAX_WIDTH);
        assert_eq!(resolve_width(Some(MAX_WIDTH + 1)), MAX_WIDTH);
        assert_eq!(resolve_width(Some(30)), 30);
    }

    #[test]
    fn test_detected_width_is_capped() {
        assert!(resolve_width(None) <= MAX_WIDTH);
    }
}
