//! Focused unit tests covering plan CLI configuration and request parsing.

use super::helpers::{
    DENVER, FixedLookupBuilder, GARY, trip_input, utf8_workspace, write_trip_input, write_utf8,
};
use super::*;
use camino::Utf8PathBuf;
use crate::plan::{PlanArgs, PlanConfig, config_from_layers_for_test, load_trip_input, run_plan_with};
use haulplan_core::{PlanResponse, PlanningError, TripInputError};
use haulplan_data::routing::DEFAULT_BASE_URL;
use rstest::rstest;
use std::time::Duration;

fn args_for(request_path: Utf8PathBuf) -> PlanArgs {
    PlanArgs {
        request_path: Some(request_path),
        ors_base_url: None,
        ors_api_key: Some("test-key".to_owned()),
        timeout_secs: None,
    }
}

#[rstest]
fn converting_plan_without_request_errors() {
    let args = PlanArgs {
        request_path: None,
        ors_api_key: Some("test-key".to_owned()),
        ..PlanArgs::default()
    };

    let err = PlanConfig::try_from(args).expect_err("missing request should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_PLAN_REQUEST);
            assert_eq!(env, ENV_PLAN_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn converting_plan_without_api_key_errors() {
    let args = PlanArgs {
        request_path: Some(Utf8PathBuf::from("request.json")),
        ..PlanArgs::default()
    };

    let err = PlanConfig::try_from(args).expect_err("missing key should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_PLAN_ORS_API_KEY);
            assert_eq!(env, ENV_PLAN_ORS_API_KEY);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn plan_config_defaults_to_the_public_service() {
    let config = PlanConfig::try_from(args_for(Utf8PathBuf::from("request.json")))
        .expect("config should build");

    assert_eq!(config.ors_base_url, DEFAULT_BASE_URL);
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.ors_api_key, "test-key");
}

#[rstest]
fn plan_config_debug_redacts_the_api_key() {
    let config = PlanConfig::try_from(args_for(Utf8PathBuf::from("request.json")))
        .expect("config should build");

    let rendered = format!("{config:?}");
    assert!(!rendered.contains("test-key"));
}

#[rstest]
fn validate_sources_reports_missing_request() {
    let (_tmp, root) = utf8_workspace();
    let config = PlanConfig::try_from(args_for(root.join("absent.json"))).expect("config");

    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_PLAN_REQUEST),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let (_tmp, root) = utf8_workspace();
    let request_path = root.join("request.json");
    std::fs::create_dir(&request_path).expect("request directory");
    let config = PlanConfig::try_from(args_for(request_path.clone())).expect("config");

    let err = config
        .validate_sources()
        .expect_err("expected directory path to fail validation");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_PLAN_REQUEST);
            assert_eq!(path, request_path);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_trip_input_decodes_json() {
    let (_tmp, root) = utf8_workspace();
    let request_path = root.join("request.json");
    let input = trip_input(12.5);
    write_trip_input(&request_path, &input);

    let decoded = load_trip_input(&request_path).expect("request should decode");
    assert_eq!(decoded, input);
}

#[rstest]
#[case::not_json(b"{ not valid json".as_slice())]
#[case::missing_field(br#"{"current_location": "A", "pickup_location": "B", "hours_used": 1}"#.as_slice())]
#[case::wrong_type(br#"{"current_location": "A", "pickup_location": "B", "dropoff_location": "C", "hours_used": "ten"}"#.as_slice())]
fn load_trip_input_rejects_malformed_json(#[case] payload: &[u8]) {
    let (_tmp, root) = utf8_workspace();
    let request_path = root.join("request.json");
    write_utf8(&request_path, payload);

    let err = load_trip_input(&request_path).expect_err("malformed json should error");
    match err {
        CliError::ParseTripRequest { path, .. } => assert_eq!(path, request_path),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn load_trip_input_io_error_returns_open_error() {
    let (_tmp, root) = utf8_workspace();
    let request_path = root.join("request.json");

    let err = load_trip_input(&request_path).expect_err("missing request should error");
    match err {
        CliError::OpenTripRequest { path, .. } => assert_eq!(path, request_path),
        other => panic!("expected OpenTripRequest, found {other:?}"),
    }
}

#[rstest]
fn run_plan_with_prints_accepted_plan() {
    let (_tmp, root) = utf8_workspace();
    let request_path = root.join("request.json");
    write_trip_input(&request_path, &trip_input(0.0));
    let mut stdout = Vec::new();

    run_plan_with(
        args_for(request_path),
        &FixedLookupBuilder::with_distance(1000.0),
        &mut stdout,
    )
    .expect("plan should succeed");

    let text = String::from_utf8(stdout).expect("stdout utf-8");
    assert!(text.ends_with('\n'));
    let response: PlanResponse = serde_json::from_str(&text).expect("JSON response");
    assert_eq!(response.total_miles, 1000.0);
    assert_eq!(response.schedule.len(), 2);
    assert_eq!(response.pickup_coords, Some(GARY.as_lat_lon()));
    assert_eq!(response.dropoff_coords, Some(DENVER.as_lat_lon()));
}

#[rstest]
fn run_plan_with_prints_body_before_reporting_rejection() {
    let (_tmp, root) = utf8_workspace();
    let request_path = root.join("request.json");
    write_trip_input(&request_path, &trip_input(70.0));
    let mut stdout = Vec::new();

    let err = run_plan_with(
        args_for(request_path),
        &FixedLookupBuilder::with_distance(1000.0),
        &mut stdout,
    )
    .expect_err("exhausted cycle should be rejected");

    match err {
        CliError::PlanRejected { source } => {
            assert_eq!(source, PlanningError::CycleExhausted { hours_used: 70.0 });
        }
        other => panic!("expected PlanRejected, found {other:?}"),
    }
    let response: PlanResponse = serde_json::from_slice(&stdout).expect("JSON response");
    assert!(response.is_rejection());
    assert_eq!(response.error_code.as_deref(), Some("cycle_exhausted"));
    assert_eq!(response.total_miles, 1000.0);
}

#[rstest]
fn run_plan_with_rejects_negative_hours_before_lookup() {
    let (_tmp, root) = utf8_workspace();
    let request_path = root.join("request.json");
    write_trip_input(&request_path, &trip_input(-1.0));
    let mut stdout = Vec::new();

    let err = run_plan_with(
        args_for(request_path),
        &FixedLookupBuilder::with_distance(1000.0),
        &mut stdout,
    )
    .expect_err("negative hours should be rejected");

    match err {
        CliError::InvalidTripRequest { source, .. } => {
            assert_eq!(source, TripInputError::NegativeHours { value: -1.0 });
        }
        other => panic!("expected InvalidTripRequest, found {other:?}"),
    }
    assert!(stdout.is_empty(), "nothing is printed for invalid input");
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "timeout_secs": "soon" }));

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

    let (_tmp, root) = utf8_workspace();
    let env_request = root.join("from-env-request.json");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "ors_base_url": "http://from-file:8080",
            "ors_api_key": "file-key",
            "timeout_secs": 5,
        }),
        None,
    );
    composer.push_environment(json!({
        "request_path": env_request.as_str(),
        "ors_api_key": "env-key",
    }));
    composer.push_cli(json!({
        "timeout_secs": 9,
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.request_path, env_request);
    assert_eq!(config.ors_base_url, "http://from-file:8080");
    assert_eq!(config.ors_api_key, "env-key");
    assert_eq!(config.timeout, Duration::from_secs(9));
}
