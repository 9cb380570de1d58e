//! Focused unit tests covering analyze CLI configuration and request loading.

use super::helpers::{Workspace, write_utf8};
use super::*;
use camino::Utf8PathBuf;
use rstest::rstest;
use turfroute_core::test_support::{crossed_route, stop};
use turfroute_core::{
    AnalysisConfig, AnalysisRequest, AnalysisRequestError, Location, OptimizationStats,
    OptimizedRoute, RouteAnalysis, RouteOptimizer, RoutePoint,
};

/// Leaves the stops where they are and reports a fixed length.
struct FixedOptimizer;

impl RouteOptimizer for FixedOptimizer {
    fn optimize_route(&self, _start: Option<Location>, points: &[RoutePoint]) -> OptimizedRoute {
        OptimizedRoute {
            route: points.to_vec(),
            original_distance_miles: 12.0,
            distance_miles: 12.0,
            stats: OptimizationStats::default(),
        }
    }
}

fn args_for(request_path: Utf8PathBuf) -> AnalyzeArgs {
    AnalyzeArgs {
        request_path: Some(request_path),
        ..AnalyzeArgs::default()
    }
}

#[rstest]
fn converting_analyze_without_request_errors() {
    let err = AnalyzeConfig::try_from(AnalyzeArgs::default())
        .expect_err("missing request should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_REQUEST);
            assert_eq!(env, ENV_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn analyze_config_applies_defaults() {
    let config = AnalyzeConfig::try_from(args_for(Utf8PathBuf::from("request.json")))
        .expect("config should build");
    assert_eq!(config.request_path, Utf8PathBuf::from("request.json"));
    assert_eq!(config.start, None);
    assert_eq!(config.analysis, AnalysisConfig::default());
    assert_eq!(config.output, None);
    assert!(!config.compact);
}

#[rstest]
#[case::latitude_only(Some(40.0), None)]
#[case::longitude_only(None, Some(-75.0))]
fn half_a_start_location_is_rejected(
    #[case] latitude: Option<f64>,
    #[case] longitude: Option<f64>,
) {
    let args = AnalyzeArgs {
        start_latitude: latitude,
        start_longitude: longitude,
        ..args_for(Utf8PathBuf::from("request.json"))
    };
    let err = AnalyzeConfig::try_from(args).expect_err("partial start should error");
    match err {
        CliError::IncompleteStartLocation {
            latitude,
            longitude,
        } => {
            assert_eq!(latitude, ARG_START_LATITUDE);
            assert_eq!(longitude, ARG_START_LONGITUDE);
        }
        other => panic!("expected IncompleteStartLocation, found {other:?}"),
    }
}

#[rstest]
fn complete_start_location_is_resolved() {
    let args = AnalyzeArgs {
        start_latitude: Some(40.0),
        start_longitude: Some(-75.0),
        ..args_for(Utf8PathBuf::from("request.json"))
    };
    let config = AnalyzeConfig::try_from(args).expect("config should build");
    let start = config.start.expect("start should be set");
    assert_eq!(start.latitude(), 40.0);
    assert_eq!(start.longitude(), -75.0);
}

#[rstest]
fn out_of_range_start_location_is_rejected() {
    let args = AnalyzeArgs {
        start_latitude: Some(91.0),
        start_longitude: Some(0.0),
        ..args_for(Utf8PathBuf::from("request.json"))
    };
    let err = AnalyzeConfig::try_from(args).expect_err("bad start should error");
    assert!(
        matches!(err, CliError::InvalidStartLocation(_)),
        "expected InvalidStartLocation, found {err:?}"
    );
}

#[rstest]
#[case::zero(0.0)]
#[case::negative(-10.0)]
#[case::nan(f64::NAN)]
fn unusable_average_speed_is_rejected(#[case] speed: f64) {
    let args = AnalyzeArgs {
        average_speed_mph: Some(speed),
        ..args_for(Utf8PathBuf::from("request.json"))
    };
    let err = AnalyzeConfig::try_from(args).expect_err("bad speed should error");
    assert!(
        matches!(err, CliError::InvalidAverageSpeed(_)),
        "expected InvalidAverageSpeed, found {err:?}"
    );
}

#[rstest]
fn validate_sources_reports_missing_request() {
    let workspace = Workspace::new();
    let config = AnalyzeConfig::try_from(args_for(workspace.request_path()))
        .expect("config should build");
    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_REQUEST);
            assert_eq!(path, workspace.request_path());
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let workspace = Workspace::new();
    std::fs::create_dir(workspace.request_path()).expect("request directory");
    let config = AnalyzeConfig::try_from(args_for(workspace.request_path()))
        .expect("config should build");
    let err = config
        .validate_sources()
        .expect_err("expected directory path to fail validation");
    match err {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_REQUEST),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_analysis_request_decodes_json() {
    let workspace = Workspace::new();
    let request = AnalysisRequest::new(crossed_route())
        .with_start(Location::new(0.5, -0.5).expect("valid start"));
    let path = workspace.write_request(&request);

    let decoded = load_analysis_request(&path).expect("request should decode");
    assert_eq!(decoded, request);
}

#[rstest]
fn load_analysis_request_accepts_minimal_stops() {
    let workspace = Workspace::new();
    let path = workspace.request_path();
    write_utf8(
        &path,
        br#"{"stops":[{"id":"yard","latitude":39.95,"longitude":-75.16}]}"#,
    );

    let decoded = load_analysis_request(&path).expect("request should decode");
    assert_eq!(decoded.stops, vec![stop("yard", 39.95, -75.16)]);
    assert_eq!(decoded.start, None);
}

#[rstest]
#[case::malformed(b"{ not valid json".as_slice())]
#[case::bad_coordinate(br#"{"stops":[{"id":"a","latitude":95.0,"longitude":0.0}]}"#.as_slice())]
fn load_analysis_request_rejects_unusable_json(#[case] payload: &[u8]) {
    let workspace = Workspace::new();
    let path = workspace.request_path();
    write_utf8(&path, payload);

    let err = load_analysis_request(&path).expect_err("invalid json should error");
    match err {
        CliError::ParseAnalysisRequest { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ParseAnalysisRequest, found {other:?}"),
    }
}

#[rstest]
fn load_analysis_request_io_error_returns_open_error() {
    let workspace = Workspace::new();
    let path = workspace.request_path();

    let err = load_analysis_request(&path).expect_err("missing request should error");
    match err {
        CliError::OpenAnalysisRequest { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected OpenAnalysisRequest, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "request_path": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let workspace = Workspace::new();
    let env_request = workspace.path("from-env-request.json");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "start_latitude": 39.9,
            "start_longitude": -75.2,
            "average_speed_mph": 20.0,
        }),
        None,
    );
    composer.push_environment(json!({
        "request_path": env_request.as_str(),
        "average_speed_mph": 25.0,
    }));
    composer.push_cli(json!({
        "average_speed_mph": 35.0,
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.request_path, env_request);
    assert_eq!(config.analysis.average_speed_mph(), 35.0);
    let start = config.start.expect("start from file layer");
    assert_eq!(start.latitude(), 39.9);
    assert_eq!(start.longitude(), -75.2);
}

#[rstest]
fn run_analyze_with_rejects_duplicate_stop_ids() {
    let workspace = Workspace::new();
    let request = AnalysisRequest::new(vec![stop("a", 0.0, 0.0), stop("a", 0.0, 1.0)]);
    let path = workspace.write_request(&request);

    let mut stdout = Vec::new();
    let err = run_analyze_with(args_for(path), &FixedOptimizer, &mut stdout)
        .expect_err("duplicate ids should error");
    match err {
        CliError::InvalidAnalysisRequest { source, .. } => assert_eq!(
            source,
            AnalysisRequestError::DuplicateStopId {
                id: "a".to_owned()
            }
        ),
        other => panic!("expected InvalidAnalysisRequest, found {other:?}"),
    }
    assert!(stdout.is_empty());
}

#[rstest]
fn run_analyze_with_uses_the_supplied_optimizer() {
    let workspace = Workspace::new();
    let path = workspace.write_request(&AnalysisRequest::new(crossed_route()));

    let mut stdout = Vec::new();
    run_analyze_with(args_for(path), &FixedOptimizer, &mut stdout).expect("analysis succeeds");

    let report: RouteAnalysis = serde_json::from_slice(&stdout).expect("JSON report");
    assert_eq!(report.original_distance_miles, 12.0);
    assert_eq!(report.distance_saved_miles, 0.0);
    assert_eq!(report.optimized_route, crossed_route());
}

#[rstest]
fn compact_reports_fit_on_one_line() {
    let workspace = Workspace::new();
    let path = workspace.write_request(&AnalysisRequest::new(crossed_route()));
    let args = AnalyzeArgs {
        compact: true,
        ..args_for(path)
    };

    let mut stdout = Vec::new();
    run_analyze_with(args, &FixedOptimizer, &mut stdout).expect("analysis succeeds");

    let text = String::from_utf8(stdout).expect("stdout utf-8");
    assert_eq!(text.trim_end().lines().count(), 1);
    assert!(text.ends_with('\n'));
}

#[rstest]
fn output_path_receives_the_report() {
    let workspace = Workspace::new();
    let path = workspace.write_request(&AnalysisRequest::new(crossed_route()));
    let output = workspace.path("reports/monday.json");
    let args = AnalyzeArgs {
        output: Some(output.clone()),
        ..args_for(path)
    };

    let mut stdout = Vec::new();
    run_analyze_with(args, &FixedOptimizer, &mut stdout).expect("analysis succeeds");

    assert!(stdout.is_empty(), "report should not go to stdout");
    let written = std::fs::read(output.as_std_path()).expect("report written");
    let report: RouteAnalysis = serde_json::from_slice(&written).expect("JSON report");
    assert_eq!(report.optimized_route.len(), 4);
}
