//! Output rendering for allocation responses.

use std::fmt::Write as _;
use std::io::Write;

use spotwise_core::{AgentRoute, AllocationResponse};

use crate::CliError;
use crate::options::OutputFormat;

const TEXT_HEADER: &str = "--- Spot Assignments (Time-balanced) ---";

/// Write `response` to `writer` in the requested format.
pub(crate) fn write_response(
    writer: &mut dyn Write,
    response: &AllocationResponse,
    format: OutputFormat,
) -> Result<(), CliError> {
    let payload = match format {
        OutputFormat::Text => render_text(response),
        OutputFormat::Json => {
            serde_json::to_string_pretty(response).map_err(CliError::SerializeResponse)?
        }
    };
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    writer.flush().map_err(CliError::WriteOutput)
}

/// Render the route listing, numbering agents from 1.
pub(crate) fn render_text(response: &AllocationResponse) -> String {
    let mut out = String::from(TEXT_HEADER);
    for (position, route) in response.assignment.routes().iter().enumerate() {
        // Writing into a `String` cannot fail.
        let _ = write!(out, "\nUGV {} -> {}", position + 1, format_spots(route));
    }
    let _ = write!(out, "\nMax route length: {:.3}", response.score);
    out
}

fn format_spots(route: &AgentRoute) -> String {
    let spots: Vec<String> = route
        .spots
        .iter()
        .map(|spot| format!("({:?}, {:?})", spot.location.x, spot.location.y))
        .collect();
    format!("[{}]", spots.join(", "))
}
