//! Command-line arguments for the `evote` binary.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use evote_ui::components::Page;
use evote_ui::{OutputMode, ThemePreference};

#[derive(Parser, Debug)]
#[command(
    name = "evote",
    version,
    about = "Wallet and voting screens in the terminal, in a dark or light theme"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Starting theme.
    #[arg(long, value_enum, default_value = "dark", env = "EVOTE_THEME", global = true)]
    pub theme: ThemeArg,

    /// How styles are written: ANSI escapes, plain text, or debug tags.
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub output: OutputArg,

    /// Column budget for cards and dividers (defaults to the terminal width; capped at 72).
    #[arg(long, value_name = "COLS", global = true)]
    pub width: Option<usize>,

    /// Load accounts from a JSON file instead of the built-in demo accounts.
    #[arg(long, value_name = "PATH", global = true)]
    pub accounts: Option<PathBuf>,

    /// More log output on stderr (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render one screen and exit.
    Render(RenderArgs),

    /// Print the palette of both themes.
    Palette,

    /// Read commands from stdin and redraw after each one.
    Interactive(InteractiveArgs),
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Screen to render.
    #[arg(long, value_enum, default_value = "dashboard")]
    pub page: PageArg,

    /// Toggle the theme this many times before rendering.
    #[arg(long, default_value_t = 0)]
    pub toggle: usize,

    /// Select the account with this id.
    #[arg(long, value_name = "ID")]
    pub select: Option<u64>,
}

#[derive(Args, Debug)]
pub struct InteractiveArgs {
    /// Page shown next to the accounts at start.
    #[arg(long, value_enum, default_value = "send")]
    pub page: PageArg,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeArg {
    Dark,
    Light,
    System,
}

impl From<ThemeArg> for ThemePreference {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => ThemePreference::Dark,
            ThemeArg::Light => ThemePreference::Light,
            ThemeArg::System => ThemePreference::System,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputArg {
    Auto,
    Term,
    Text,
    TermDebug,
}

impl From<OutputArg> for OutputMode {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Auto => OutputMode::Auto,
            OutputArg::Term => OutputMode::Term,
            OutputArg::Text => OutputMode::Text,
            OutputArg::TermDebug => OutputMode::TermDebug,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageArg {
    Dashboard,
    Send,
    Receive,
    Voting,
}

impl PageArg {
    /// The dashboard page to show; `None` renders the dashboard's default.
    pub fn page(self) -> Option<Page> {
        match self {
            PageArg::Dashboard => None,
            PageArg::Send => Some(Page::Send),
            PageArg::Receive => Some(Page::Receive),
            PageArg::Voting => Some(Page::Voting),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_flags() {
        let cli = Cli::try_parse_from([
            "evote", "render", "--page", "voting", "--toggle", "3", "--select", "2", "--output",
            "term-debug",
        ])
        .unwrap();
        assert_eq!(cli.output, OutputArg::TermDebug);
        match cli.command {
            Command::Render(args) => {
                assert_eq!(args.page.page(), Some(Page::Voting));
                assert_eq!(args.toggle, 3);
                assert_eq!(args.select, Some(2));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["evote", "palette", "--theme", "light", "-vv"]).unwrap();
        assert_eq!(cli.theme, ThemeArg::Light);
        assert_eq!(cli.verbose, 2);
        assert_eq!(ThemePreference::from(cli.theme), ThemePreference::Light);
    }

    #[test]
    fn test_rejects_unknown_page() {
        assert!(Cli::try_parse_from(["evote", "render", "--page", "history"]).is_err());
    }
}
