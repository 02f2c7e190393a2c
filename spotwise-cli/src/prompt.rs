//! Interactive `prompt` command: read agents and spots from standard input.

use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use spotwise_core::{AllocationRequest, Point};
use std::io::{BufRead, Write};

use crate::options::{
    AllocationSettings, AllocatorBuilder, DefaultAllocatorBuilder, OutputFormat, Strategy,
    allocate,
};
use crate::render::write_response;
use crate::{
    ARG_FORMAT, ARG_MAX_CANDIDATES, ARG_PARALLEL, ARG_STRATEGY, CliError, PromptInputError,
};

/// CLI arguments for the `prompt` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Ask for the number of ground vehicles and their start \
                 positions, then the number of spots and their positions, \
                 one `x y` pair per line, and print the allocation.",
    about = "Enter agents and spots interactively"
)]
#[ortho_config(prefix = "SPOTWISE")]
pub(crate) struct PromptArgs {
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

impl PromptArgs {
    pub(crate) fn into_settings(self) -> Result<AllocationSettings, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(AllocationSettings::from(merged))
    }
}

impl From<PromptArgs> for AllocationSettings {
    fn from(args: PromptArgs) -> Self {
        Self::resolve(args.strategy, args.parallel, args.max_candidates, args.format)
    }
}

pub(crate) fn run_prompt(args: PromptArgs) -> Result<(), CliError> {
    let mut stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    run_prompt_with(args, &DefaultAllocatorBuilder, &mut stdin, &mut stdout)
}

pub(crate) fn run_prompt_with(
    args: PromptArgs,
    builder: &dyn AllocatorBuilder,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<(), CliError> {
    let settings = args.into_settings()?;
    let request = read_request(input, output)?;
    let response = allocate(&request, &settings, builder)?;
    output.write_all(b"\n").map_err(CliError::WriteOutput)?;
    write_response(output, &response, settings.format)
}

/// Prompt for every agent and spot and collect them into a request.
pub(crate) fn read_request(
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<AllocationRequest, CliError> {
    let agent_count = read_count(input, output, "Enter number of UGVs:")?;
    let mut agents = Vec::new();
    for number in 1..=agent_count {
        let prompt = format!("Enter position of UGV {number} as x y:");
        agents.push(read_point(input, output, &prompt)?);
    }

    let spot_count = read_count(input, output, "Enter number of spots:")?;
    let mut spots = Vec::new();
    for number in 1..=spot_count {
        let prompt = format!("Enter position of Spot {number} as x y:");
        spots.push(read_point(input, output, &prompt)?);
    }

    Ok(AllocationRequest { agents, spots })
}

fn read_count(
    input: &mut dyn BufRead,
    output: &mut dyn Write,
    prompt: &str,
) -> Result<usize, CliError> {
    let line = ask(input, output, prompt)?;
    let token = line.trim();
    token.parse().map_err(|_| CliError::PromptInput {
        prompt: prompt.to_owned(),
        source: PromptInputError::InvalidCount {
            token: token.to_owned(),
        },
    })
}

fn read_point(
    input: &mut dyn BufRead,
    output: &mut dyn Write,
    prompt: &str,
) -> Result<Point, CliError> {
    let line = ask(input, output, prompt)?;
    parse_point(&line).map_err(|source| CliError::PromptInput {
        prompt: prompt.to_owned(),
        source,
    })
}

/// Parse a whitespace-separated `x y` pair of finite numbers.
pub(crate) fn parse_point(line: &str) -> Result<Point, PromptInputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [x, y] = tokens.as_slice() else {
        return Err(PromptInputError::WrongTokenCount {
            found: tokens.len(),
        });
    };
    Ok(Point {
        x: parse_coordinate(x)?,
        y: parse_coordinate(y)?,
    })
}

fn parse_coordinate(token: &str) -> Result<f64, PromptInputError> {
    let value: f64 = token.parse().map_err(|_| PromptInputError::InvalidNumber {
        token: token.to_owned(),
    })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PromptInputError::NonFinite {
            token: token.to_owned(),
        })
    }
}

fn ask(input: &mut dyn BufRead, output: &mut dyn Write, prompt: &str) -> Result<String, CliError> {
    write!(output, "{prompt} ").map_err(CliError::WritePrompt)?;
    output.flush().map_err(CliError::WritePrompt)?;
    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(CliError::ReadInput)?;
    if read == 0 {
        return Err(CliError::PromptInput {
            prompt: prompt.to_owned(),
            source: PromptInputError::EndOfInput,
        });
    }
    Ok(line)
}
