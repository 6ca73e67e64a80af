//! JSON output formatting for respira.
//!
//! This module provides functions for formatting techniques and session
//! results as JSON.

use serde_json::json;

use crate::engine::{Event, SessionSummary, Technique};
use crate::error::RespiraError;

/// Format the technique catalog as JSON
///
/// # Errors
///
/// Returns `RespiraError::Parse` if JSON serialization fails.
pub fn format_techniques_json(techniques: &[Technique]) -> Result<String, RespiraError> {
    let output = json!({
        "count": techniques.len(),
        "items": techniques
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a single technique as JSON
///
/// # Errors
///
/// Returns `RespiraError::Parse` if JSON serialization fails.
pub fn format_technique_json(technique: &Technique) -> Result<String, RespiraError> {
    Ok(serde_json::to_string_pretty(technique)?)
}

/// Format a session summary as JSON
///
/// # Errors
///
/// Returns `RespiraError::Parse` if JSON serialization fails.
pub fn format_summary_json(summary: &SessionSummary) -> Result<String, RespiraError> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// Format a session event as a single JSON line
///
/// # Errors
///
/// Returns `RespiraError::Parse` if JSON serialization fails.
pub fn format_event_json(event: &Event) -> Result<String, RespiraError> {
    Ok(serde_json::to_string(event)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::builtin_catalog;

    #[test]
    fn test_format_techniques_json_envelope() {
        let catalog = builtin_catalog();
        let json = format_techniques_json(&catalog).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["count"], 3);
        assert_eq!(value["items"][0]["name"], "Vagal Awakening");
        assert_eq!(value["items"][0]["pattern"][1], 7);
    }

    #[test]
    fn test_format_event_json_is_single_line() {
        let event = Event::Tick { remaining: 2, elapsed: 17 };
        let line = format_event_json(&event).unwrap();
        assert!(!line.contains('\n'));
        assert!(line.contains("\"tick\""));
    }
}
