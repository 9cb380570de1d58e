//! Command-line interface for the turfroute routing engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod analyze;
mod error;

pub use error::CliError;

use analyze::{AnalyzeArgs, run_analyze};
#[cfg(test)]
use analyze::{
    AnalyzeConfig, config_from_layers_for_test, load_analysis_request, run_analyze_with,
};

const ARG_REQUEST: &str = "request";
const ENV_REQUEST: &str = "TURFROUTE_CMDS_ANALYZE_REQUEST_PATH";
const ARG_START_LATITUDE: &str = "start-latitude";
const ARG_START_LONGITUDE: &str = "start-longitude";
const ARG_AVERAGE_SPEED_MPH: &str = "average-speed-mph";
const ARG_OUTPUT: &str = "output";

/// Run the turfroute CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse()?;
    match cli.command {
        Command::Analyze(args) => run_analyze(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "turfroute",
    about = "Route optimisation for landscaping crews",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Optimise a day's stops and report the distance and time saved.
    Analyze(AnalyzeArgs),
}

#[cfg(test)]
mod tests;
