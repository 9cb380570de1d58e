//! Error types emitted by the turfroute CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use turfroute_core::{AnalysisConfigError, AnalysisRequestError, CoordinateError};

/// Errors emitted by the turfroute CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Only one half of the start override was given.
    #[error("--{latitude} and --{longitude} must be given together")]
    IncompleteStartLocation {
        latitude: &'static str,
        longitude: &'static str,
    },
    /// The start override is not a valid coordinate.
    #[error("invalid start location: {0}")]
    InvalidStartLocation(#[source] CoordinateError),
    /// The average speed override is unusable.
    #[error(transparent)]
    InvalidAverageSpeed(#[from] AnalysisConfigError),
    /// Opening the analysis request file failed.
    #[error("failed to open analysis request at {path:?}: {source}")]
    OpenAnalysisRequest {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Analysis request JSON could not be decoded.
    #[error("failed to parse analysis request JSON at {path:?}: {source}")]
    ParseAnalysisRequest {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The analysis request payload failed validation.
    #[error("analysis request in {path:?} failed validation: {source}")]
    InvalidAnalysisRequest {
        path: Utf8PathBuf,
        #[source]
        source: AnalysisRequestError,
    },
    /// Creating the report output file failed.
    #[error("failed to create report at {path:?}: {source}")]
    CreateReport {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Serialising the analysis report failed.
    #[error("failed to serialise analysis report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Writing the analysis report failed.
    #[error("failed to write analysis report: {0}")]
    WriteReport(#[source] std::io::Error),
}
