//! Error types for the structuring engine.
//!
//! Malformed legal text inside a document never produces an error:
//! unmatched panel tokens, unclassifiable conclusion clauses and missing
//! table attachments all degrade to explicit "could not classify"
//! markers. Errors are reserved for documents the engine cannot
//! structure at all and for I/O around rosters and document files.

use thiserror::Error;

/// Main error type for the structuring library.
#[derive(Debug, Error)]
pub enum StructuringError {
    /// No structural heading anywhere in the paragraph stream.
    #[error("No recognizable structure in document '{document}': the section tree is empty")]
    NoStructure { document: String },

    /// Document uses the legacy style set that predates named ECHR styles.
    #[error("Document '{document}' uses the legacy style set and cannot be structured")]
    LegacyFormat { document: String },

    /// Judge roster data did not have the expected shape.
    #[error("Invalid judge roster: {0}")]
    RosterFormat(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for structuring operations.
pub type Result<T> = std::result::Result<T, StructuringError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_structure_display() {
        let err = StructuringError::NoStructure {
            document: "001-12345".to_string(),
        };
        assert!(err.to_string().contains("001-12345"));
        assert!(err.to_string().contains("section tree is empty"));
    }

    #[test]
    fn test_legacy_format_display() {
        let err = StructuringError::LegacyFormat {
            document: "001-200".to_string(),
        };
        assert!(err.to_string().contains("legacy style set"));
    }
}
