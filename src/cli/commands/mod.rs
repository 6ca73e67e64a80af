//! Command implementations for respira.
//!
//! This module contains the implementation of all CLI commands.

mod completions;
mod start;

pub use completions::completions;
pub use start::start;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::engine::Technique;
use crate::error::RespiraError;
use crate::output::{format_technique, format_techniques};

/// Execute list command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn list(config: &Config, format: OutputFormat) -> Result<String, RespiraError> {
    let catalog = config.catalog();
    format_techniques(&catalog, format)
}

/// Execute show command
///
/// # Errors
///
/// Returns an error if the technique cannot be found or output formatting
/// fails.
pub fn show(config: &Config, query: &str, format: OutputFormat) -> Result<String, RespiraError> {
    let catalog = config.catalog();
    let index = resolve_technique(&catalog, query)?;
    format_technique(&catalog[index], format)
}

/// Resolve a technique query to a catalog index.
///
/// Accepts the 1-based number shown by `list` or a case-insensitive name
/// match.
///
/// # Errors
///
/// Returns `RespiraError::NotFound` if nothing matches.
pub fn resolve_technique(catalog: &[Technique], query: &str) -> Result<usize, RespiraError> {
    if let Ok(number) = query.trim().parse::<usize>() {
        if number >= 1 && number <= catalog.len() {
            return Ok(number - 1);
        }
        return Err(RespiraError::NotFound(format!(
            "technique {number}: catalog has {} technique(s)",
            catalog.len()
        )));
    }

    catalog
        .iter()
        .position(|t| t.name.eq_ignore_ascii_case(query.trim()))
        .ok_or_else(|| RespiraError::NotFound(format!("technique '{query}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::builtin_catalog;

    #[test]
    fn test_resolve_by_number() {
        let catalog = builtin_catalog();
        assert_eq!(resolve_technique(&catalog, "1").unwrap(), 0);
        assert_eq!(resolve_technique(&catalog, "3").unwrap(), 2);
    }

    #[test]
    fn test_resolve_by_name_case_insensitive() {
        let catalog = builtin_catalog();
        assert_eq!(resolve_technique(&catalog, "four directions").unwrap(), 1);
        assert_eq!(resolve_technique(&catalog, " Vagal Awakening ").unwrap(), 0);
    }

    #[test]
    fn test_resolve_out_of_range_number() {
        let catalog = builtin_catalog();
        assert!(resolve_technique(&catalog, "0").is_err());
        assert!(resolve_technique(&catalog, "99").is_err());
    }

    #[test]
    fn test_resolve_unknown_name() {
        let catalog = builtin_catalog();
        assert!(resolve_technique(&catalog, "holotropic").is_err());
    }

    #[test]
    fn test_list_pretty() {
        let output = list(&Config::default(), OutputFormat::Pretty).unwrap();
        assert!(output.contains("Breathing Matrix"));
    }

    #[test]
    fn test_show_json() {
        let output = show(&Config::default(), "2", OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["name"], "Four Directions");
    }
}
