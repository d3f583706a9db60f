//! # moodpa CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use moodpa_cli::evaluate::{run_evaluate, EvaluateArgs};
use moodpa_cli::stats::{run_stats, StatsArgs};
use moodpa_cli::thresholds::{run_thresholds, ThresholdsArgs};
use moodpa_cli::EXIT_ERROR;

/// MOOD.PA: municipal zoning compliance for architectural projects.
///
/// Checks setbacks, occupancy rate, permeability rate, floor area ratio and
/// the graphical documentation checklist against municipal thresholds.
#[derive(Parser, Debug)]
#[command(name = "moodpa", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a project submission and print its compliance report.
    Evaluate(EvaluateArgs),

    /// Print the effective zoning thresholds.
    Thresholds(ThresholdsArgs),

    /// Compute portfolio statistics from exported project records.
    Stats(StatsArgs),
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

    tracing::debug!("moodpa CLI starting");

    let result = match cli.command {
        Commands::Evaluate(args) => run_evaluate(&args),
        Commands::Thresholds(args) => run_thresholds(&args),
        Commands::Stats(args) => run_stats(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
