//! Error types for the test runner
//!
//! Everything in here is fatal: a configuration problem that aborts the
//! whole run before or while suites execute. Assertion failures are not
//! errors, they are recorded as action outcomes (see [`crate::asserts::Failure`]).

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal configuration errors
#[derive(Error, Debug)]
pub enum Error {
    // === Invocation Errors ===
    #[error("--test-spec must be specified")]
    NoSuites,

    #[error("Invalid --var '{0}'. Value should be key=value")]
    InvalidVar(String),

    // === Suite Errors ===
    #[error("All actions must have names (action {index} has none)")]
    MissingActionName { index: usize },

    #[error("Unrecognized test suite file type: {0}")]
    UnsupportedSuiteFormat(String),

    #[error("Failed to parse test suite '{path}': {error}")]
    SuiteParse { path: String, error: String },

    #[error("Template error: {0}")]
    Template(String),

    #[error("Failed to parse values file '{path}': {error}")]
    ValuesParse { path: String, error: String },

    // === Configuration Errors ===
    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Client Errors ===
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl Error {
    /// Create a file read error for a path
    pub fn file_read(path: &std::path::Path, error: &io::Error) -> Self {
        Self::FileRead {
            path: path.display().to_string(),
            error: error.to_string(),
        }
    }

    /// Create a suite parse error for a path
    pub fn suite_parse<E: std::fmt::Display>(path: &std::path::Path, error: E) -> Self {
        Self::SuiteParse {
            path: path.display().to_string(),
            error: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_missing_name_mentions_index() {
        let e = Error::MissingActionName { index: 3 };
        assert_eq!(e.to_string(), "All actions must have names (action 3 has none)");
    }

    #[test]
    fn test_file_read_carries_path() {
        let io = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e = Error::file_read(Path::new("suite.yaml"), &io);
        assert!(e.to_string().contains("suite.yaml"));
        assert!(e.to_string().contains("gone"));
    }
}
