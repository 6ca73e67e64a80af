//! Output formatting for respira.
//!
//! This module provides formatters for the technique catalog and session
//! results in pretty (colored) and JSON form.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::engine::{SessionSummary, Technique};
use crate::error::RespiraError;

pub use json::*;
pub use pretty::*;

/// Format the technique catalog based on output format
///
/// # Errors
///
/// Returns `RespiraError::Parse` if JSON serialization fails.
pub fn format_techniques(
    techniques: &[Technique],
    format: OutputFormat,
) -> Result<String, RespiraError> {
    match format {
        OutputFormat::Pretty => Ok(format_techniques_pretty(techniques)),
        OutputFormat::Json => format_techniques_json(techniques),
    }
}

/// Format a single technique based on output format
///
/// # Errors
///
/// Returns `RespiraError::Parse` if JSON serialization fails.
pub fn format_technique(
    technique: &Technique,
    format: OutputFormat,
) -> Result<String, RespiraError> {
    match format {
        OutputFormat::Pretty => Ok(format_technique_pretty(technique)),
        OutputFormat::Json => format_technique_json(technique),
    }
}

/// Format a session summary based on output format
///
/// # Errors
///
/// Returns `RespiraError::Parse` if JSON serialization fails.
pub fn format_summary(
    summary: &SessionSummary,
    format: OutputFormat,
) -> Result<String, RespiraError> {
    match format {
        OutputFormat::Pretty => Ok(format_summary_pretty(summary)),
        OutputFormat::Json => format_summary_json(summary),
    }
}
