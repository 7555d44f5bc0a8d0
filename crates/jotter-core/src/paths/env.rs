//! Environment lookup used by the resolver.
//!
//! Resolution only ever reads the environment, so the lookup sits behind a
//! small trait. `ProcessEnv` is the real process environment; a `HashMap`
//! works as a fixed environment for callers that want deterministic results.

use std::collections::HashMap;
use std::env;
use std::ffi::OsString;

/// Environment variable that overrides the data directory search.
pub const DATA_PATH_VAR: &str = "DATA_PATH";

/// Read-only view of environment variables.
pub trait EnvSource {
    /// Return the value of `key`, or `None` when it is unset.
    fn var_os(&self, key: &str) -> Option<OsString>;

    /// Return the value of `key` when it is set to a non-empty value.
    fn non_empty(&self, key: &str) -> Option<OsString> {
        self.var_os(key).filter(|value| !value.is_empty())
    }
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        env::var_os(key)
    }
}

impl EnvSource for HashMap<String, String> {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.get(key).map(OsString::from)
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var_os(&self, key: &str) -> Option<OsString> {
        (**self).var_os(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_are_treated_as_unset() {
        let env = HashMap::from([
            (DATA_PATH_VAR.to_string(), String::new()),
            ("OTHER".to_string(), "value".to_string()),
        ]);

        assert_eq!(env.var_os(DATA_PATH_VAR), Some(OsString::new()));
        assert_eq!(env.non_empty(DATA_PATH_VAR), None);
        assert_eq!(env.non_empty("OTHER"), Some(OsString::from("value")));
        assert_eq!(env.non_empty("MISSING"), None);
    }
}
