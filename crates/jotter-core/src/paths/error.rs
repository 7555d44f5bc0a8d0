//! Path-related error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving the data directory.
#[derive(Debug, Error)]
pub enum PathError {
    /// None of the candidate directories exist under `base`.
    #[error("Cannot determine data path.")]
    NotFound {
        /// Directory the search started from.
        base: PathBuf,
    },

    /// Failed to get the current working directory.
    #[error("Cannot determine current directory: {0}")]
    CurrentDirError(String),
}

impl PathError {
    /// Whether this is the "no candidate directory exists" failure.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
