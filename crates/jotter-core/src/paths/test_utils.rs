//! Test utilities for tests that touch process-wide state.
//!
//! `DATA_PATH` and the working directory are shared by every test in the
//! binary, so tests that read or change them hold `ENV_LOCK` for their
//! whole body and restore the previous state through the guards below.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Shared lock to serialize tests that depend on environment variables or
/// the working directory.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// RAII guard that restores an environment variable to its original value on drop.
///
/// # Example
///
/// ```ignore
/// let _guard = ENV_LOCK.lock().unwrap();
/// let _env = EnvVarGuard::set("DATA_PATH", "/tmp/test");
/// // ... test code that uses DATA_PATH ...
/// // Original value restored when _env is dropped
/// ```
pub struct EnvVarGuard {
    key: String,
    previous: Option<String>,
}

impl EnvVarGuard {
    /// Set an environment variable and return a guard that will restore it.
    #[allow(unsafe_code)]
    pub fn set(key: &str, value: &str) -> Self {
        let previous = env::var(key).ok();
        unsafe {
            env::set_var(key, value);
        }
        Self {
            key: key.to_string(),
            previous,
        }
    }

    /// Unset an environment variable and return a guard that will restore it.
    #[allow(unsafe_code)]
    pub fn remove(key: &str) -> Self {
        let previous = env::var(key).ok();
        unsafe {
            env::remove_var(key);
        }
        Self {
            key: key.to_string(),
            previous,
        }
    }
}

impl Drop for EnvVarGuard {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        if let Some(ref value) = self.previous {
            unsafe {
                env::set_var(&self.key, value);
            }
        } else {
            unsafe {
                env::remove_var(&self.key);
            }
        }
    }
}

/// RAII guard that changes the working directory and restores it on drop.
pub struct CwdGuard {
    previous: PathBuf,
}

impl CwdGuard {
    pub fn change_to(dir: &Path) -> Self {
        let previous = env::current_dir().unwrap();
        env::set_current_dir(dir).unwrap();
        Self { previous }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.previous);
    }
}
