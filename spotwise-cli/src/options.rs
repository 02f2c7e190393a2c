//! Allocation options shared by the `solve` and `prompt` subcommands.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use spotwise_core::{AllocationRequest, AllocationResponse, Allocator};
use spotwise_solver::{ExhaustiveAllocator, ExhaustiveConfig, GreedyAllocator, search_space_size};

use crate::CliError;

/// Largest exhaustive search the CLI runs unless told otherwise.
pub(crate) const DEFAULT_MAX_CANDIDATES: u64 = 10_000_000;

/// Allocation algorithm selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum Strategy {
    /// Score every partition and keep the best.
    #[default]
    Exhaustive,
    /// Append each spot to the cheapest agent; fast but approximate.
    Greedy,
}

/// Output encoding for the allocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum OutputFormat {
    /// Human-readable route listing.
    #[default]
    Text,
    /// Pretty-printed allocation response.
    Json,
}

/// Allocation options after configuration merging and defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AllocationSettings {
    pub(crate) strategy: Strategy,
    pub(crate) parallel: bool,
    pub(crate) max_candidates: u64,
    pub(crate) format: OutputFormat,
}

impl Default for AllocationSettings {
    fn default() -> Self {
        Self::resolve(None, None, None, None)
    }
}

impl AllocationSettings {
    /// Fill unset options with their defaults.
    pub(crate) fn resolve(
        strategy: Option<Strategy>,
        parallel: Option<bool>,
        max_candidates: Option<u64>,
        format: Option<OutputFormat>,
    ) -> Self {
        Self {
            strategy: strategy.unwrap_or_default(),
            parallel: parallel.unwrap_or(false),
            max_candidates: max_candidates.unwrap_or(DEFAULT_MAX_CANDIDATES),
            format: format.unwrap_or_default(),
        }
    }

    /// Refuse exhaustive searches larger than `max_candidates`.
    pub(crate) fn check_search_space(&self, request: &AllocationRequest) -> Result<(), CliError> {
        if self.strategy != Strategy::Exhaustive {
            return Ok(());
        }
        let agents = request.agents.len();
        let spots = request.spots.len();
        match search_space_size(agents, spots) {
            Some(size) if size <= self.max_candidates => Ok(()),
            _ => Err(CliError::SearchSpaceTooLarge {
                agents,
                spots,
                limit: self.max_candidates,
            }),
        }
    }
}

/// Builds an allocator for the current invocation.
pub(crate) trait AllocatorBuilder {
    fn build(&self, settings: &AllocationSettings) -> Box<dyn Allocator>;
}

pub(crate) struct DefaultAllocatorBuilder;

impl AllocatorBuilder for DefaultAllocatorBuilder {
    fn build(&self, settings: &AllocationSettings) -> Box<dyn Allocator> {
        match settings.strategy {
            Strategy::Exhaustive => Box::new(ExhaustiveAllocator::with_config(ExhaustiveConfig {
                parallel: settings.parallel,
                ..ExhaustiveConfig::default()
            })),
            Strategy::Greedy => Box::new(GreedyAllocator),
        }
    }
}

/// Validate, size-check and allocate a request.
pub(crate) fn allocate(
    request: &AllocationRequest,
    settings: &AllocationSettings,
    builder: &dyn AllocatorBuilder,
) -> Result<AllocationResponse, CliError> {
    request
        .validate_detailed()
        .map_err(CliError::InvalidRequest)?;
    settings.check_search_space(request)?;
    let allocator = builder.build(settings);
    let response = allocator
        .allocate(request)
        .map_err(|source| CliError::Allocate { source })?;
    log::info!(
        "allocated {} spots across {} agents in {:?} ({} candidates)",
        request.spots.len(),
        request.agents.len(),
        response.diagnostics.solve_time,
        response.diagnostics.candidates_evaluated
    );
    Ok(response)
}
