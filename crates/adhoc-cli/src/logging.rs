//! Tracing setup for the `adhoc` binary.
//!
//! The library crates only emit events. Everything is written to stderr so
//! that `adhoc publish > module.json` captures metadata alone. A set
//! `RUST_LOG` replaces the level derived from `-v`/`-q`.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events are shown at the level chosen on the command line.
const TARGETS: [&str; 3] = ["adhoc", "adhoc_core", "adhoc_adapters"];

pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| filter_for(args));

    // Publication spans already name the component; module paths add noise.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already set: {e}"))
}

fn filter_for(args: &GlobalArgs) -> EnvFilter {
    let level = args.log_level();
    let directives: Vec<String> = TARGETS.iter().map(|t| format!("{t}={level}")).collect();
    EnvFilter::new(directives.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    #[test]
    fn every_adhoc_crate_gets_the_same_level() {
        let args = GlobalArgs {
            verbose: 2,
            quiet: false,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        };

        let filter = filter_for(&args).to_string();
        for target in TARGETS {
            assert!(filter.contains(&format!("{target}=debug")), "{filter}");
        }
    }
}
