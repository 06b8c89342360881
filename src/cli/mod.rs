// CLI module
// Command-line interface, argument parsing and logging setup

mod args;

pub use args::{CliArgs, Command, StrategyType};

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Default log filter when the configured one cannot be parsed
const FALLBACK_LOG_FILTER: &str = "warn";

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments, missing subcommand, or `--help`),
/// clap displays an error message or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Install the global tracing subscriber, writing to stderr
///
/// Stdout is reserved for command output.
pub fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|e| {
        eprintln!(
            "Warning: Invalid log filter '{}' ({}), using '{}'",
            filter, e, FALLBACK_LOG_FILTER
        );
        EnvFilter::new(FALLBACK_LOG_FILTER)
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
