//! Focused unit tests covering solve CLI configuration and request loading.

use super::helpers::{
    FixedAllocatorBuilder, collinear_request, collinear_response, write_request, write_utf8,
};
use super::*;
use crate::options::{AllocationSettings, OutputFormat, Strategy};
use crate::solve::{
    SolveArgs, SolveConfig, config_from_layers_for_test, load_allocation_request, run_solve_with,
};
use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use spotwise_core::AllocationResponse;
use tempfile::TempDir;

struct Workspace {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }
}

#[fixture]
fn workspace() -> Workspace {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    Workspace { _tmp: tmp, root }
}

fn args_for(request_path: Utf8PathBuf) -> SolveArgs {
    SolveArgs {
        request_path: Some(request_path),
        ..SolveArgs::default()
    }
}

#[rstest]
fn converting_solve_without_request_errors() {
    let err = SolveConfig::try_from(SolveArgs::default()).expect_err("missing request");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_SOLVE_REQUEST);
            assert_eq!(env, ENV_SOLVE_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn solve_config_fills_default_settings(workspace: Workspace) {
    let request_path = workspace.path("request.json");
    let config = SolveConfig::try_from(args_for(request_path.clone())).expect("config");
    assert_eq!(config.request_path, request_path);
    assert_eq!(config.settings, AllocationSettings::default());
}

#[rstest]
fn validate_sources_reports_missing_request(workspace: Workspace) {
    let request_path = workspace.path("absent.json");
    let config = SolveConfig::try_from(args_for(request_path.clone())).expect("config");
    match config.validate_sources().expect_err("missing file") {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_SOLVE_REQUEST);
            assert_eq!(path, request_path);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories(workspace: Workspace) {
    let dir = workspace.path("requests");
    std::fs::create_dir(dir.as_std_path()).expect("create dir");
    let config = SolveConfig::try_from(args_for(dir.clone())).expect("config");
    match config.validate_sources().expect_err("directory") {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_SOLVE_REQUEST);
            assert_eq!(path, dir);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_allocation_request_reads_json(workspace: Workspace) {
    let request_path = workspace.path("request.json");
    write_request(&request_path, &collinear_request());
    let request = load_allocation_request(&request_path).expect("request should load");
    assert_eq!(request, collinear_request());
}

#[rstest]
fn load_allocation_request_defaults_missing_spots(workspace: Workspace) {
    let request_path = workspace.path("request.json");
    write_utf8(&request_path, br#"{ "agents": [{ "x": 0.0, "y": 0.0 }] }"#);
    let request = load_allocation_request(&request_path).expect("request should load");
    assert_eq!(request.agents.len(), 1);
    assert!(request.spots.is_empty());
}

#[rstest]
fn load_allocation_request_reports_parse_errors(workspace: Workspace) {
    let request_path = workspace.path("request.json");
    write_utf8(&request_path, b"{ not valid json");
    match load_allocation_request(&request_path).expect_err("invalid JSON") {
        CliError::ParseRequest { path, .. } => assert_eq!(path, request_path),
        other => panic!("expected ParseRequest, found {other:?}"),
    }
}

#[rstest]
fn load_allocation_request_reports_open_errors(workspace: Workspace) {
    let request_path = workspace.path("missing.json");
    match load_allocation_request(&request_path).expect_err("missing file") {
        CliError::OpenRequest { path, .. } => assert_eq!(path, request_path),
        other => panic!("expected OpenRequest, found {other:?}"),
    }
}

#[rstest]
fn run_solve_with_writes_json_and_passes_settings(workspace: Workspace) {
    let request_path = workspace.path("request.json");
    write_request(&request_path, &collinear_request());
    let args = SolveArgs {
        strategy: Some(Strategy::Greedy),
        format: Some(OutputFormat::Json),
        ..args_for(request_path)
    };
    let builder = FixedAllocatorBuilder::new(collinear_response());
    let mut stdout = Vec::new();

    run_solve_with(args, &builder, &mut stdout).expect("solve should succeed");

    let response: AllocationResponse =
        serde_json::from_slice(&stdout).expect("output should be an allocation response");
    assert_eq!(response, collinear_response());
    let seen = builder.seen().expect("builder invoked");
    assert_eq!(seen.strategy, Strategy::Greedy);
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "request_path": 42 }));

    match config_from_layers_for_test(composer.layers()).expect_err("invalid layer") {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence(workspace: Workspace) {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let env_request = workspace.path("from-env.json");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "request_path": workspace.path("from-file.json").as_str(),
            "strategy": "greedy",
            "max_candidates": 50,
            "format": "json",
        }),
        None,
    );
    composer.push_environment(json!({
        "request_path": env_request.as_str(),
        "max_candidates": 100,
    }));
    composer.push_cli(json!({ "strategy": "exhaustive", "parallel": true }));

    let config = config_from_layers_for_test(composer.layers()).expect("merged config");
    assert_eq!(config.request_path, env_request);
    assert_eq!(
        config.settings,
        AllocationSettings {
            strategy: Strategy::Exhaustive,
            parallel: true,
            max_candidates: 100,
            format: OutputFormat::Json,
        }
    );
}
