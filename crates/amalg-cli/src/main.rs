//! # amalg CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use amalg_cli::check::{run_check, CheckArgs};
use amalg_cli::output::OutputFormat;
use amalg_cli::roster::{run_roster, RosterArgs};
use amalg_cli::rules::run_rules;

/// Amalgamation eligibility checker.
///
/// Evaluates businesses in an amalgamation filing against the registry's
/// eligibility rules and reports the first violated rule for each.
#[derive(Parser, Debug)]
#[command(name = "amalg", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate one business against a filing.
    Check(CheckArgs),

    /// Evaluate every business in a filing and summarize the roster.
    Roster(RosterArgs),

    /// List the eligibility rules in priority order.
    Rules,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("amalg CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = match &cli.command {
        Commands::Check(args) => run_check(args, cli.format),
        Commands::Roster(args) => run_roster(args, cli.format),
        Commands::Rules => run_rules(cli.format),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
