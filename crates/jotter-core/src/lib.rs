//! Helpers for notebook-style data processing.
//!
//! - [`mode`]: interactive / dev mode flags, with a process-wide instance
//! - [`display`]: output that only appears in interactive sessions
//! - [`paths`]: locating a project's data directory
#![deny(unused_crate_dependencies)]

pub mod display;
pub mod mode;
pub mod paths;

pub use display::{
    BufferSink, Console, DisplayError, DisplaySink, NoopSink, StdoutSink, display_interactive,
    pprint_interactive, print_interactive,
};
pub use mode::{ModeFlags, ModeSnapshot};
pub use paths::{
    DATA_PATH_VAR, DEFAULT_DATA_FOLDER, DataPathResolution, DataPathResolver, DataPathSource,
    EnvSource, PathError, ProcessEnv, compute_data_path, resolve_data_path,
    resolve_data_path_with_source,
};

// Only used by the integration tests
#[cfg(test)]
use tracing_subscriber as _;
