//! Flags shared by every `adhoc` subcommand.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more about loading, customizing and publishing components.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more (repeat up to -vvv)",
        long_help = "Log more about what adhoc does. Logs go to stderr, so \
                     published metadata on stdout stays clean.
    -v      one line per published component
    -vv     build loading, schema declarations, rendered sizes
    -vvv    everything, including per-variant spans
Failing customizers show their underlying cause from -v on."
    )]
    pub verbose: u8,

    /// Only errors and rendered metadata reach the terminal.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print only errors and metadata"
    )]
    pub quiet: bool,

    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Never color output (also honours NO_COLOR)"
    )]
    pub no_color: bool,

    /// adhoc settings file; without it the per-user location is tried.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from FILE (must exist)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How listings and messages are printed"
    )]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Tracing level for the adhoc crates. `--quiet` wins over `-v`.
    pub fn log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "info",
            (false, 2) => "debug",
            (false, _) => "trace",
        }
    }

    /// Whether errors should carry their cause chain.
    pub fn shows_causes(&self) -> bool {
        self.verbose > 0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Colored headers and status markers.
    Human,
    /// Same lines as `human`, without styling.
    Plain,
    /// Listings as JSON arrays; `publish` is unaffected.
    Json,
}
