//! Error types emitted by the Spotwise CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use spotwise_core::{AllocationError, AllocationRequestValidationError};
use thiserror::Error;

/// Errors emitted by the Spotwise CLI.
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
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening the allocation request file failed.
    #[error("failed to open allocation request at {path:?}: {source}")]
    OpenRequest {
        /// Request file path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Allocation request JSON could not be decoded.
    #[error("failed to parse allocation request JSON at {path:?}: {source}")]
    ParseRequest {
        /// Request file path.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// A line typed at a prompt could not be understood.
    #[error("{prompt} {source}")]
    PromptInput {
        /// The prompt the input answered.
        prompt: String,
        /// What was wrong with the input.
        #[source]
        source: PromptInputError,
    },
    /// Reading interactive input failed.
    #[error("failed to read input: {0}")]
    ReadInput(#[source] std::io::Error),
    /// Writing an interactive prompt failed.
    #[error("failed to write prompt: {0}")]
    WritePrompt(#[source] std::io::Error),
    /// The allocation request failed validation.
    #[error("allocation request failed validation: {0}")]
    InvalidRequest(#[source] AllocationRequestValidationError),
    /// The exhaustive search would score more candidates than allowed.
    #[error(
        "{agents} agents and {spots} spots give more than {limit} candidate partitions; \
         raise --max-candidates or use --strategy greedy"
    )]
    SearchSpaceTooLarge {
        /// Number of agents requested.
        agents: usize,
        /// Number of spots requested.
        spots: usize,
        /// Configured candidate limit.
        limit: u64,
    },
    /// The allocator rejected the request.
    #[error("allocation failed: {source}")]
    Allocate {
        /// Allocator failure.
        source: AllocationError,
    },
    /// Serializing the allocation response failed.
    #[error("failed to serialize allocation response: {0}")]
    SerializeResponse(#[source] serde_json::Error),
    /// Writing the allocation output failed.
    #[error("failed to write allocation output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

/// Problems with a single line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptInputError {
    /// Input ended before the prompt was answered.
    #[error("input ended before a value was entered")]
    EndOfInput,
    /// A count was not a non-negative whole number.
    #[error("expected a whole number, found {token:?}")]
    InvalidCount {
        /// Text that failed to parse.
        token: String,
    },
    /// A position line did not hold exactly two values.
    #[error("expected two numbers `x y`, found {found} value(s)")]
    WrongTokenCount {
        /// Number of whitespace-separated values on the line.
        found: usize,
    },
    /// A coordinate was not a number.
    #[error("expected a number, found {token:?}")]
    InvalidNumber {
        /// Text that failed to parse.
        token: String,
    },
    /// A coordinate was NaN or infinite.
    #[error("coordinates must be finite, found {token:?}")]
    NonFinite {
        /// Text that parsed to a non-finite value.
        token: String,
    },
}
