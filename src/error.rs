//! Error types for respira.

use thiserror::Error;

/// Errors that can occur in respira.
#[derive(Debug, Error)]
pub enum RespiraError {
    /// Technique index is outside the catalog.
    #[error("invalid technique index {index}: catalog has {count} technique(s)")]
    InvalidTechniqueIndex {
        /// The index that was requested.
        index: usize,
        /// Number of techniques in the catalog.
        count: usize,
    },

    /// A session operation was attempted with no technique selected.
    #[error("no technique selected")]
    NoTechniqueSelected,

    /// Technique data is malformed.
    #[error("invalid technique: {0}")]
    InvalidTechnique(String),

    /// A named item could not be found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Configuration or terminal setup error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl RespiraError {
    /// Machine-readable error kind, stable across message changes.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidTechniqueIndex { .. } => "invalid_technique_index",
            Self::NoTechniqueSelected => "no_technique_selected",
            Self::InvalidTechnique(_) => "invalid_technique",
            Self::NotFound(_) => "not_found",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Parse(_) => "parse",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RespiraError::InvalidTechniqueIndex { index: 99, count: 3 };
        assert_eq!(
            err.to_string(),
            "invalid technique index 99: catalog has 3 technique(s)"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(RespiraError::NoTechniqueSelected.kind(), "no_technique_selected");
        assert_eq!(
            RespiraError::InvalidTechnique("cycles must be at least 1".to_string()).kind(),
            "invalid_technique"
        );
    }
}
