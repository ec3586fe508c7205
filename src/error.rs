//! Error types for `competency-annotator`
//!
//! Annotation itself never fails on data: missing pages and missing
//! category codes degrade silently. The errors here cover everything around
//! the pass (loading competency data, parsing selectors, file I/O) and map
//! onto process exit codes.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Competency data error (unreadable, unparsable, too large)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Document error (invalid selector, document too large)
    pub const DOCUMENT_ERROR: i32 = 4;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for annotator operations.
///
/// Aggregates the domain errors and maps each onto an exit code.
#[derive(Debug, Error)]
pub enum AnnotatorError {
    /// Competency data loading error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Document query or serialization error
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Invalid combination of command-line arguments
    #[error("usage error: {0}")]
    Usage(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnnotatorError {
    /// Returns the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::Document(_) => ExitCode::DOCUMENT_ERROR,
            Self::Usage(_) => ExitCode::USAGE_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Competency Data Errors
// ============================================================================

/// Competency data loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Parsing failed
    #[error("parse error in {path}{}: {message}", line.map_or_else(String::new, |l| format!(" (line {l})")))]
    ParseError {
        /// Path to the data file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Data file not found or unreadable
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// A `.js` data file does not contain a `competencies = {...}` assignment
    #[error("no competencies assignment found in {path}")]
    MissingAssignment {
        /// Path to the script file
        path: PathBuf,
    },

    /// Field has an invalid value
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The actual value provided
        value: String,
        /// Description of what was expected
        expected: String,
    },
}

// ============================================================================
// Document Errors
// ============================================================================

/// Errors raised while querying or rewriting a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The row selector is not valid CSS
    #[error("invalid row selector: '{0}'")]
    InvalidSelector(String),

    /// Input document exceeds the configured size limit
    #[error("document too large: {size} bytes (limit: {limit})")]
    TooLarge {
        /// Actual document size in bytes
        size: usize,
        /// Configured size limit in bytes
        limit: usize,
    },

    /// Serializing the annotated document failed
    #[error("failed to serialize document: {0}")]
    Serialize(#[source] std::io::Error),
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for annotator operations.
pub type Result<T> = std::result::Result<T, AnnotatorError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::SUCCESS, 0);
        assert_eq!(ExitCode::ERROR, 1);
        assert_eq!(ExitCode::CONFIG_ERROR, 2);
        assert_eq!(ExitCode::IO_ERROR, 3);
        assert_eq!(ExitCode::DOCUMENT_ERROR, 4);
        assert_eq!(ExitCode::USAGE_ERROR, 64);
    }

    #[test]
    fn test_config_error_exit_code() {
        let err: AnnotatorError = ConfigError::MissingFile {
            path: PathBuf::from("/test"),
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::CONFIG_ERROR);
    }

    #[test]
    fn test_document_error_exit_code() {
        let err: AnnotatorError = DocumentError::InvalidSelector("tr[".to_string()).into();
        assert_eq!(err.exit_code(), ExitCode::DOCUMENT_ERROR);
    }

    #[test]
    fn test_io_error_exit_code() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: AnnotatorError = io_err.into();
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_usage_error_exit_code() {
        let err = AnnotatorError::Usage("--in-place with --output".to_string());
        assert_eq!(err.exit_code(), ExitCode::USAGE_ERROR);
    }

    #[test]
    fn test_parse_error_display_with_line() {
        let err = ConfigError::ParseError {
            path: PathBuf::from("competencies.yaml"),
            line: Some(7),
            message: "unexpected token".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("competencies.yaml"));
        assert!(msg.contains("(line 7)"));
        assert!(msg.contains("unexpected token"));
    }

    #[test]
    fn test_parse_error_display_without_line() {
        let err = ConfigError::ParseError {
            path: PathBuf::from("competencies.json"),
            line: None,
            message: "EOF".to_string(),
        };
        assert_eq!(err.to_string(), "parse error in competencies.json: EOF");
    }

    #[test]
    fn test_too_large_display() {
        let err = DocumentError::TooLarge {
            size: 100,
            limit: 10,
        };
        assert_eq!(err.to_string(), "document too large: 100 bytes (limit: 10)");
    }
}
