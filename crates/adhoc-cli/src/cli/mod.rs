//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "adhoc",
    bin_name = "adhoc",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Inspect and publish ad-hoc software components",
    long_about = "adhoc loads a declarative build file, assembles its software \
                  components from outgoing configurations and renders the \
                  metadata each component would publish.",
    after_help = "EXAMPLES:\n\
        \x20 adhoc usages build.toml\n\
        \x20 adhoc ecosystems build.toml -C native\n\
        \x20 adhoc publish build.toml --format compact | jq .\n\
        \x20 adhoc completions bash > /usr/share/bash-completion/completions/adhoc",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the usages each component publishes.
    #[command(
        visible_alias = "u",
        about = "List materialized usages",
        after_help = "EXAMPLES:\n\
            \x20 adhoc usages build.toml\n\
            \x20 adhoc usages build.toml -C java --output-format json"
    )]
    Usages(TargetArgs),

    /// List the ecosystems each component is tagged with.
    #[command(
        visible_alias = "eco",
        about = "List resolved ecosystems",
        after_help = "EXAMPLES:\n\
            \x20 adhoc ecosystems build.toml\n\
            \x20 adhoc ecosystems build.toml -C native"
    )]
    Ecosystems(TargetArgs),

    /// Render publication metadata.
    #[command(
        visible_alias = "p",
        about = "Render publication metadata",
        after_help = "EXAMPLES:\n\
            \x20 adhoc publish build.toml\n\
            \x20 adhoc publish build.toml -C java --format text"
    )]
    Publish(PublishArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 adhoc completions bash > ~/.local/share/bash-completion/completions/adhoc\n\
            \x20 adhoc completions zsh  > ~/.zfunc/_adhoc\n\
            \x20 adhoc completions fish > ~/.config/fish/completions/adhoc.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the adhoc configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 adhoc config list\n\
            \x20 adhoc config path"
    )]
    Config(ConfigCommands),
}

// ── usages / ecosystems ───────────────────────────────────────────────────────

/// Which build file, and optionally which component, to look at.
#[derive(Debug, Args)]
pub struct TargetArgs {
    /// Path to the build file.
    #[arg(value_name = "BUILD", help = "Path to build.toml")]
    pub build: PathBuf,

    /// Restrict output to one component.
    #[arg(
        short = 'C',
        long = "component",
        value_name = "NAME",
        help = "Only this component (default: all)"
    )]
    pub component: Option<String>,
}

// ── publish ───────────────────────────────────────────────────────────────────

/// Arguments for `adhoc publish`.
#[derive(Debug, Args)]
pub struct PublishArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Metadata format. Falls back to `output.publish_format` from the config.
    #[arg(long = "format", value_enum, help = "Metadata format")]
    pub format: Option<PublishFormat>,
}

/// Metadata formats `adhoc publish` can render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PublishFormat {
    /// Indented JSON.
    #[default]
    Json,
    /// Single-line JSON.
    Compact,
    /// Human-readable summary.
    Text,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `adhoc completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `adhoc config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}
