//! Command-line interface for the Spotwise spot allocator.
//!
//! Two subcommands share one set of allocation options:
//!
//! - `solve <path>` reads a JSON-encoded [`spotwise_core::AllocationRequest`].
//! - `prompt` asks for agent and spot coordinates on standard input.
//!
//! Options layer CLI flags over `SPOTWISE_CMDS_*` environment variables and
//! configuration files through `ortho_config`.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod options;
mod prompt;
mod render;
mod solve;

pub use error::{CliError, PromptInputError};

use prompt::{PromptArgs, run_prompt};
use solve::{SolveArgs, run_solve};

pub(crate) const ARG_SOLVE_REQUEST: &str = "request";
pub(crate) const ARG_STRATEGY: &str = "strategy";
pub(crate) const ARG_PARALLEL: &str = "parallel";
pub(crate) const ARG_MAX_CANDIDATES: &str = "max-candidates";
pub(crate) const ARG_FORMAT: &str = "format";
pub(crate) const ENV_SOLVE_REQUEST: &str = "SPOTWISE_CMDS_SOLVE_REQUEST_PATH";

/// Run the Spotwise CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Solve(args) => run_solve(args),
        Command::Prompt(args) => run_prompt(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "spotwise",
    about = "Split inspection spots between ground vehicles so the longest route is shortest",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Allocate the spots described by a JSON request file.
    Solve(SolveArgs),
    /// Enter agent and spot positions interactively.
    Prompt(PromptArgs),
}

#[cfg(test)]
mod tests;
