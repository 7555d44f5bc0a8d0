//! Path helpers shared by the resolver.

use std::env;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Read the process working directory.
pub(super) fn current_dir() -> Result<PathBuf, PathError> {
    env::current_dir().map_err(|e| PathError::CurrentDirError(e.to_string()))
}

/// Make `path` absolute by joining it onto `cwd`.
///
/// `..` segments and symlinks are left alone; only the working directory is
/// prepended. An empty path resolves to `cwd` itself.
pub(super) fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else if path.as_os_str().is_empty() {
        cwd.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Whether the last component of `path` is exactly `name`.
pub(super) fn ends_with_component(path: &Path, name: &str) -> bool {
    path.components()
        .next_back()
        .is_some_and(|last| last.as_os_str() == name)
}
