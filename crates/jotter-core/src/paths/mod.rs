//! Data directory resolution for notebook and script projects.
//!
//! Projects keep their data in a folder (named `data` by default) that may
//! sit at the project root, under `data/`, or under `src/`. This module finds
//! it from an explicit start path, the `DATA_PATH` environment variable, or
//! the current working directory.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - Read-only: candidates are checked for existence, nothing is created
//! - `DATA_PATH` is trusted as given and never checked for existence

mod data_path;
mod env;
mod error;
mod platform;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export public API

// Error type
pub use error::PathError;

// Environment access
pub use env::{DATA_PATH_VAR, EnvSource, ProcessEnv};

// Resolution
pub use data_path::{
    DEFAULT_DATA_FOLDER, DataPathResolution, DataPathResolver, DataPathSource, compute_data_path,
    resolve_data_path, resolve_data_path_with_source,
};
