//! Error types for swbuild
//!
//! Uses `thiserror` for library errors. All errors are terminal for the
//! invocation: there is no retry or partial-success path.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for swbuild operations
pub type SwResult<T> = Result<T, SwError>;

/// Main error type for swbuild operations
#[derive(Error, Debug)]
pub enum SwError {
    /// Unrecognized `--mode` or `--type` value, rejected before any I/O
    #[error("unrecognized {flag} '{value}' (expected one of: {expected})")]
    Config {
        flag: &'static str,
        value: String,
        expected: &'static str,
    },

    /// Bundler reported diagnostics (warnings are escalated to errors)
    #[error("failed to compile {entry}:\n{diagnostics}")]
    Compile {
        entry: PathBuf,
        diagnostics: String,
    },

    /// Read or write failure, carrying the failing path
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SwError {
    /// Attach a path to an underlying IO error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SwError::Io {
            path: path.into(),
            source,
        }
    }
}
