//! Solve command implementation for the Spotwise CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use spotwise_core::{AllocationRequest, AllocationResponse};
use std::io::{BufReader, Write};

use crate::fs::{file_is_file, open_utf8_file};
use crate::options::{
    AllocationSettings, AllocatorBuilder, DefaultAllocatorBuilder, OutputFormat, Strategy,
    allocate,
};
use crate::render::write_response;
use crate::{
    ARG_FORMAT, ARG_MAX_CANDIDATES, ARG_PARALLEL, ARG_SOLVE_REQUEST, ARG_STRATEGY, CliError,
    ENV_SOLVE_REQUEST,
};

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Allocate spots to ground vehicles from a JSON-encoded \
                 AllocationRequest holding `agents` and `spots` coordinate \
                 lists. Options can come from CLI flags, configuration \
                 files, or environment variables.",
    about = "Allocate the spots described by a JSON request"
)]
#[ortho_config(prefix = "SPOTWISE")]
pub(crate) struct SolveArgs {
    /// Path to a JSON file containing an AllocationRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Allocation algorithm (default: exhaustive).
    #[arg(long = ARG_STRATEGY, value_enum, value_name = "strategy")]
    #[serde(default)]
    pub(crate) strategy: Option<Strategy>,
    /// Split the exhaustive search across threads.
    #[arg(
        long = ARG_PARALLEL,
        value_name = "bool",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) parallel: Option<bool>,
    /// Largest number of partitions the exhaustive search may score.
    #[arg(long = ARG_MAX_CANDIDATES, value_name = "count")]
    #[serde(default)]
    pub(crate) max_candidates: Option<u64>,
    /// Output format (default: text).
    #[arg(long = ARG_FORMAT, value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl SolveArgs {
    pub(crate) fn into_config(self) -> Result<SolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SolveConfig::try_from(merged)
    }
}

/// Resolved `solve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SolveConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Allocation options.
    pub(crate) settings: AllocationSettings,
}

impl SolveConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_SOLVE_REQUEST)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
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
}

impl TryFrom<SolveArgs> for SolveConfig {
    type Error = CliError;

    fn try_from(args: SolveArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_SOLVE_REQUEST,
            env: ENV_SOLVE_REQUEST,
        })?;
        let settings = AllocationSettings::resolve(
            args.strategy,
            args.parallel,
            args.max_candidates,
            args.format,
        );
        Ok(Self {
            request_path,
            settings,
        })
    }
}

pub(crate) fn run_solve(args: SolveArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_solve_with(args, &DefaultAllocatorBuilder, &mut stdout)
}

pub(crate) fn run_solve_with(
    args: SolveArgs,
    builder: &dyn AllocatorBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_solve_config(args)?;
    let response = execute_solve(&config, builder)?;
    write_response(writer, &response, config.settings.format)
}

fn execute_solve(
    config: &SolveConfig,
    builder: &dyn AllocatorBuilder,
) -> Result<AllocationResponse, CliError> {
    let request = load_allocation_request(&config.request_path)?;
    log::debug!(
        "loaded request with {} agents and {} spots from {}",
        request.agents.len(),
        request.spots.len(),
        config.request_path
    );
    allocate(&request, &config.settings, builder)
}

fn resolve_solve_config(args: SolveArgs) -> Result<SolveConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`AllocationRequest`] from disk.
pub(crate) fn load_allocation_request(path: &Utf8Path) -> Result<AllocationRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRequest {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SolveConfig, CliError> {
    let merged = SolveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SolveConfig::try_from(merged)
}
