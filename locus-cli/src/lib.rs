//! Command-line interface for the locus engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod analyze;
mod error;

pub use error::CliError;

use analyze::AnalyzeArgs;

const ARG_ANALYZE_SNAPSHOT: &str = "snapshot";
const ARG_ANALYZE_SCORING_CONFIG: &str = "scoring-config";
const ARG_ANALYZE_MAPS_API_KEY: &str = "maps-api-key";
const ARG_ANALYZE_INTELLIGENCE_API_KEY: &str = "intelligence-api-key";
const ARG_ANALYZE_RADIUS_METERS: &str = "radius-meters";
const ENV_ANALYZE_SNAPSHOT: &str = "LOCUS_CMDS_ANALYZE_SNAPSHOT";

/// Run the locus CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when argument parsing, configuration layering,
/// input loading, analysis or output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Analyze(args) => analyze::run_analyze(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "locus",
    about = "Score the investment potential of a location",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyse a location from a recorded provider snapshot.
    Analyze(AnalyzeArgs),
}

#[cfg(test)]
mod tests;
