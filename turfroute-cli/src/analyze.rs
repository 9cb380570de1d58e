//! Analyze command implementation for the turfroute CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Write};
use turfroute_core::{
    AnalysisConfig, AnalysisRequest, Location, RouteAnalysis, RouteOptimizer, TwoOptOptimizer,
    analyze_with,
};
use turfroute_fs::{create_utf8_file, open_utf8_file};

use crate::{
    ARG_AVERAGE_SPEED_MPH, ARG_OUTPUT, ARG_REQUEST, ARG_START_LATITUDE, ARG_START_LONGITUDE,
    CliError, ENV_REQUEST,
};

/// CLI arguments for the `analyze` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Optimise the visiting order of a day's stops with 2-opt and \
                 report the distance and driving time saved. The request is \
                 provided as a JSON-encoded AnalysisRequest; the report is \
                 written as JSON to stdout unless --output is given.",
    about = "Analyse and optimise a route"
)]
#[ortho_config(prefix = "TURFROUTE")]
pub(crate) struct AnalyzeArgs {
    /// Path to a JSON file containing an AnalysisRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Latitude of the departure point; overrides the request's start.
    #[arg(long = ARG_START_LATITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) start_latitude: Option<f64>,
    /// Longitude of the departure point; overrides the request's start.
    #[arg(long = ARG_START_LONGITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) start_longitude: Option<f64>,
    /// Average driving speed used to convert miles saved into minutes.
    #[arg(long = ARG_AVERAGE_SPEED_MPH, value_name = "mph")]
    #[serde(default)]
    pub(crate) average_speed_mph: Option<f64>,
    /// Write the report to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Emit single-line JSON.
    #[arg(long)]
    #[serde(default)]
    pub(crate) compact: bool,
}

impl AnalyzeArgs {
    pub(crate) fn into_config(self) -> Result<AnalyzeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AnalyzeConfig::try_from(merged)
    }
}

/// Resolved `analyze` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AnalyzeConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Departure override; takes precedence over the request's own start.
    pub(crate) start: Option<Location>,
    pub(crate) analysis: AnalysisConfig,
    /// Report destination; `None` means stdout.
    pub(crate) output: Option<Utf8PathBuf>,
    pub(crate) compact: bool,
}

impl AnalyzeConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_REQUEST)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match turfroute_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Pick the departure point: the CLI override when given, otherwise the
    /// one carried by the request.
    fn start_for(&self, request: &AnalysisRequest) -> Option<Location> {
        self.start.or(request.start)
    }
}

impl TryFrom<AnalyzeArgs> for AnalyzeConfig {
    type Error = CliError;

    fn try_from(args: AnalyzeArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_REQUEST,
        })?;

        let start = match (args.start_latitude, args.start_longitude) {
            (Some(latitude), Some(longitude)) => Some(
                Location::new(latitude, longitude).map_err(CliError::InvalidStartLocation)?,
            ),
            (None, None) => None,
            _ => {
                return Err(CliError::IncompleteStartLocation {
                    latitude: ARG_START_LATITUDE,
                    longitude: ARG_START_LONGITUDE,
                });
            }
        };

        let analysis = match args.average_speed_mph {
            Some(speed) => AnalysisConfig::new(speed)?,
            None => AnalysisConfig::default(),
        };

        Ok(Self {
            request_path,
            start,
            analysis,
            output: args.output,
            compact: args.compact,
        })
    }
}

pub(super) fn run_analyze(args: AnalyzeArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_analyze_with(args, &TwoOptOptimizer, &mut stdout)
}

pub(super) fn run_analyze_with(
    args: AnalyzeArgs,
    optimizer: &dyn RouteOptimizer,
    stdout: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_analyze_config(args)?;
    let analysis = execute_analyze(&config, optimizer)?;
    match &config.output {
        Some(path) => {
            let file = create_utf8_file(path).map_err(|source| CliError::CreateReport {
                path: path.clone(),
                source,
            })?;
            let mut writer = BufWriter::new(file);
            write_analysis(&mut writer, &analysis, config.compact)?;
            log::info!("wrote analysis report to {path}");
            Ok(())
        }
        None => write_analysis(stdout, &analysis, config.compact),
    }
}

fn execute_analyze(
    config: &AnalyzeConfig,
    optimizer: &dyn RouteOptimizer,
) -> Result<RouteAnalysis, CliError> {
    let request = load_analysis_request(&config.request_path)?;
    request
        .validate()
        .map_err(|source| CliError::InvalidAnalysisRequest {
            path: config.request_path.clone(),
            source,
        })?;
    let start = config.start_for(&request);
    log::debug!(
        "analysing {} stops from {} (start override: {})",
        request.stops.len(),
        config.request_path,
        config.start.is_some()
    );
    Ok(analyze_with(
        &request.stops,
        start,
        &config.analysis,
        optimizer,
    ))
}

fn resolve_analyze_config(args: AnalyzeArgs) -> Result<AnalyzeConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`AnalysisRequest`] from disk.
pub(super) fn load_analysis_request(path: &Utf8Path) -> Result<AnalysisRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenAnalysisRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseAnalysisRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_analysis(
    writer: &mut dyn Write,
    analysis: &RouteAnalysis,
    compact: bool,
) -> Result<(), CliError> {
    let payload = if compact {
        serde_json::to_string(analysis)
    } else {
        serde_json::to_string_pretty(analysis)
    }
    .map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteReport)?;
    writer.write_all(b"\n").map_err(CliError::WriteReport)?;
    writer.flush().map_err(CliError::WriteReport)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<AnalyzeConfig, CliError> {
    let merged = AnalyzeArgs::merge_from_layers(layers).map_err(CliError::from)?;
    AnalyzeConfig::try_from(merged)
}
