//! Command-line argument parsing.

use clap::Parser;

use crate::theme::Settings;

/// Repotrend - browse the week's trending GitHub repositories
#[derive(Parser, Debug, Default)]
#[command(name = "repotrend")]
#[command(version)]
#[command(
    about = "A small TUI for browsing trending GitHub repositories",
    long_about = None
)]
pub struct Args {
    /// Size of the creation-date window in days (overrides settings.toml)
    #[arg(long)]
    pub days: Option<u32>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What: Resolve the effective log level from flags and settings.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
/// - `settings`: User settings loaded from disk
///
/// Output:
/// - `--verbose` wins, then `--log-level`, then the settings value.
pub fn determine_log_level(args: &Args, settings: &Settings) -> String {
    if args.verbose {
        return "debug".to_string();
    }
    args.log_level
        .clone()
        .unwrap_or_else(|| settings.log_level.clone())
}

/// Resolve the effective window size: flag over settings file.
pub const fn determine_days(args: &Args, settings: &Settings) -> u32 {
    match args.days {
        Some(d) => d,
        None => settings.days,
    }
}
