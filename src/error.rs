//! Error types for fixql.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for fixture rewriting.
///
/// Only the two conditions that abort a batch are modeled as recoverable
/// errors; contract violations (unknown table name, a value list with no
/// comma) panic instead.
#[derive(Debug, Error)]
pub enum FixqlError {
    /// The expected fixture file is not on disk.
    #[error("query file does not exist: {}", path.display())]
    MissingFile { path: PathBuf },

    /// A data row is missing its `VALUES` marker.
    #[error("query does not contain VALUES: {line}")]
    MalformedQuery { line: String },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FixqlError {
    /// Create a missing-file error for the given path.
    pub fn missing_file(path: impl Into<PathBuf>) -> Self {
        Self::MissingFile { path: path.into() }
    }

    /// Create a malformed-query error carrying the offending line.
    pub fn malformed(line: impl Into<String>) -> Self {
        Self::MalformedQuery { line: line.into() }
    }
}

/// Result type alias for fixture rewriting operations.
pub type FixqlResult<T> = Result<T, FixqlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_display() {
        let err = FixqlError::missing_file("/data/50/STUDENT.sql");
        assert_eq!(
            err.to_string(),
            "query file does not exist: /data/50/STUDENT.sql"
        );
    }

    #[test]
    fn test_malformed_query_display() {
        let err = FixqlError::malformed("INSERT INTO STUDENT ('1', 'a');");
        assert_eq!(
            err.to_string(),
            "query does not contain VALUES: INSERT INTO STUDENT ('1', 'a');"
        );
    }
}
