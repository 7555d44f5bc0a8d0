//! Data directory resolution.
//!
//! Locates a project's data folder from an explicit start path, the
//! `DATA_PATH` environment variable, or the current working directory.

use std::path::{Path, PathBuf};

use super::env::{DATA_PATH_VAR, EnvSource, ProcessEnv};
use super::error::PathError;
use super::platform::{absolutize, current_dir, ends_with_component};

/// Folder name searched for when the caller does not pick one.
pub const DEFAULT_DATA_FOLDER: &str = "data";

/// How the data directory was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataPathSource {
    /// Start path returned as given because no folder name was requested.
    Verbatim,
    /// Taken from the `DATA_PATH` environment variable.
    EnvVar,
    /// The search base is itself named after the folder.
    BaseIsTarget,
    /// `<base>/<folder>`
    Direct,
    /// `<base>/data/<folder>`
    UnderData,
    /// `<base>/src/<folder>`
    UnderSrc,
}

/// Resolution result for the data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPathResolution {
    /// The resolved data directory.
    pub path: PathBuf,
    /// How the path was determined.
    pub source: DataPathSource,
}

type Candidate = fn(&Path, &str) -> Option<PathBuf>;

/// Search candidates under the base directory, tried in order.
const CANDIDATES: &[(DataPathSource, Candidate)] = &[
    (DataPathSource::BaseIsTarget, base_is_target),
    (DataPathSource::Direct, direct),
    (DataPathSource::UnderData, under_data),
    (DataPathSource::UnderSrc, under_src),
];

fn base_is_target(base: &Path, folder: &str) -> Option<PathBuf> {
    ends_with_component(base, folder).then(|| base.to_path_buf())
}

fn direct(base: &Path, folder: &str) -> Option<PathBuf> {
    existing(base.join(folder))
}

fn under_data(base: &Path, folder: &str) -> Option<PathBuf> {
    existing(base.join("data").join(folder))
}

fn under_src(base: &Path, folder: &str) -> Option<PathBuf> {
    existing(base.join("src").join(folder))
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    tracing::trace!(candidate = %path.display(), "probing data path candidate");
    path.exists().then_some(path)
}

/// Resolves data directories against an environment and working directory.
///
/// `DataPathResolver::new()` uses the real process environment and working
/// directory. Both can be replaced, which keeps resolution deterministic in
/// tests and tools that evaluate layouts other than their own.
#[derive(Debug, Clone, Default)]
pub struct DataPathResolver<E = ProcessEnv> {
    env: E,
    working_dir: Option<PathBuf>,
}

impl DataPathResolver {
    /// Resolver backed by the process environment and working directory.
    pub const fn new() -> Self {
        Self {
            env: ProcessEnv,
            working_dir: None,
        }
    }
}

impl<E: EnvSource> DataPathResolver<E> {
    /// Resolver that reads variables from `env` instead of the process.
    pub const fn with_env(env: E) -> Self {
        Self {
            env,
            working_dir: None,
        }
    }

    /// Use `dir` in place of the process working directory.
    #[must_use]
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    fn cwd(&self) -> Result<PathBuf, PathError> {
        match &self.working_dir {
            Some(dir) => Ok(dir.clone()),
            None => current_dir(),
        }
    }

    fn absolute(&self, path: &Path) -> Result<PathBuf, PathError> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            Ok(absolutize(path, &self.cwd()?))
        }
    }

    /// Resolve the data directory and report which rule produced it.
    ///
    /// Resolution order:
    /// 1. `start_path` with an empty `folder_name`: returned unchanged
    /// 2. `start_path` otherwise: made absolute and searched
    /// 3. `DATA_PATH` (non-empty): made absolute, returned without checking it exists
    /// 4. The working directory: searched
    ///
    /// The search returns the base itself when its last component is
    /// `folder_name`, else the first existing of `<base>/<folder>`,
    /// `<base>/data/<folder>` and `<base>/src/<folder>`.
    pub fn resolve(
        &self,
        start_path: Option<&Path>,
        folder_name: &str,
    ) -> Result<DataPathResolution, PathError> {
        let base = if let Some(start) = start_path {
            if folder_name.is_empty() {
                tracing::debug!(path = %start.display(), "using start path verbatim");
                return Ok(DataPathResolution {
                    path: start.to_path_buf(),
                    source: DataPathSource::Verbatim,
                });
            }
            self.absolute(start)?
        } else if let Some(value) = self.env.non_empty(DATA_PATH_VAR) {
            let path = self.absolute(Path::new(&value))?;
            tracing::debug!(path = %path.display(), "using {DATA_PATH_VAR} from environment");
            return Ok(DataPathResolution {
                path,
                source: DataPathSource::EnvVar,
            });
        } else {
            self.cwd()?
        };

        search(&base, folder_name)
    }

    /// Resolve the data directory, discarding how it was found.
    pub fn resolve_path(
        &self,
        start_path: Option<&Path>,
        folder_name: &str,
    ) -> Result<PathBuf, PathError> {
        self.resolve(start_path, folder_name)
            .map(|resolution| resolution.path)
    }
}

fn search(base: &Path, folder_name: &str) -> Result<DataPathResolution, PathError> {
    let found = CANDIDATES.iter().find_map(|(source, candidate)| {
        candidate(base, folder_name).map(|path| DataPathResolution {
            path,
            source: *source,
        })
    });

    match found {
        Some(resolution) => {
            tracing::debug!(
                path = %resolution.path.display(),
                source = ?resolution.source,
                "resolved data path"
            );
            Ok(resolution)
        }
        None => {
            tracing::debug!(base = %base.display(), folder = folder_name, "no data path candidate exists");
            Err(PathError::NotFound {
                base: base.to_path_buf(),
            })
        }
    }
}

/// Resolve the data directory using the process environment.
///
/// See [`DataPathResolver::resolve`] for the resolution order.
pub fn resolve_data_path(start_path: Option<&Path>, folder_name: &str) -> Result<PathBuf, PathError> {
    DataPathResolver::new().resolve_path(start_path, folder_name)
}

/// Like [`resolve_data_path`], reporting which rule matched.
pub fn resolve_data_path_with_source(
    start_path: Option<&Path>,
    folder_name: &str,
) -> Result<DataPathResolution, PathError> {
    DataPathResolver::new().resolve(start_path, folder_name)
}

/// Resolve the default `data` folder starting from `start_path` (or the
/// environment / working directory when `None`).
pub fn compute_data_path(start_path: Option<&Path>) -> Result<PathBuf, PathError> {
    resolve_data_path(start_path, DEFAULT_DATA_FOLDER)
}
