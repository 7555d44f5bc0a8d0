//! Interactive and development mode flags.
//!
//! Code that runs both in notebooks and in batch jobs checks these flags to
//! decide whether to print extra output (`interactive`) or work on reduced
//! data for faster iteration (`dev_mode`). Both default to `false`.
//!
//! Pass a `ModeFlags` to the code that needs it, or use the process-wide
//! instance from [`global`]. The two flags are independent; reading one says
//! nothing about when the other was last written.

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};

/// Environment variable read by [`ModeFlags::from_env`] for the interactive flag.
pub const INTERACTIVE_VAR: &str = "JOTTER_INTERACTIVE";

/// Environment variable read by [`ModeFlags::from_env`] for the dev mode flag.
pub const DEV_MODE_VAR: &str = "JOTTER_DEV_MODE";

static GLOBAL: ModeFlags = ModeFlags::new();

/// The process-wide flags.
pub fn global() -> &'static ModeFlags {
    &GLOBAL
}

/// Interactive / dev mode toggles.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(from = "ModeSnapshot", into = "ModeSnapshot")]
pub struct ModeFlags {
    interactive: AtomicBool,
    dev_mode: AtomicBool,
}

/// Plain copy of [`ModeFlags`] at one point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeSnapshot {
    pub interactive: bool,
    pub dev_mode: bool,
}

impl ModeFlags {
    /// Both flags off.
    pub const fn new() -> Self {
        Self {
            interactive: AtomicBool::new(false),
            dev_mode: AtomicBool::new(false),
        }
    }

    /// Flags initialised from `JOTTER_INTERACTIVE` and `JOTTER_DEV_MODE`.
    ///
    /// `1`, `true`, `yes` and `on` (any case) switch a flag on; any other
    /// value, or an unset variable, leaves it off.
    pub fn from_env() -> Self {
        let flags = Self::new();
        flags.set_interactive(env_flag(INTERACTIVE_VAR));
        flags.set_dev_mode(env_flag(DEV_MODE_VAR));
        flags
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive.load(Ordering::Relaxed)
    }

    pub fn set_interactive(&self, value: bool) {
        tracing::debug!(interactive = value, "setting interactive mode");
        self.interactive.store(value, Ordering::Relaxed);
    }

    pub fn is_dev_mode(&self) -> bool {
        self.dev_mode.load(Ordering::Relaxed)
    }

    pub fn set_dev_mode(&self, value: bool) {
        tracing::debug!(dev_mode = value, "setting dev mode");
        self.dev_mode.store(value, Ordering::Relaxed);
    }

    /// Pick `reduced` in dev mode and `full` otherwise.
    ///
    /// ```
    /// use jotter_core::ModeFlags;
    ///
    /// let flags = ModeFlags::new();
    /// assert_eq!(flags.dev_or(100_000, 500), 100_000);
    /// flags.set_dev_mode(true);
    /// assert_eq!(flags.dev_or(100_000, 500), 500);
    /// ```
    pub fn dev_or<T>(&self, full: T, reduced: T) -> T {
        if self.is_dev_mode() { reduced } else { full }
    }

    pub fn snapshot(&self) -> ModeSnapshot {
        ModeSnapshot {
            interactive: self.is_interactive(),
            dev_mode: self.is_dev_mode(),
        }
    }

    /// Overwrite both flags from `snapshot`.
    pub fn apply(&self, snapshot: &ModeSnapshot) {
        self.set_interactive(snapshot.interactive);
        self.set_dev_mode(snapshot.dev_mode);
    }
}

impl Clone for ModeFlags {
    fn clone(&self) -> Self {
        Self::from(self.snapshot())
    }
}

impl From<ModeSnapshot> for ModeFlags {
    fn from(snapshot: ModeSnapshot) -> Self {
        Self {
            interactive: AtomicBool::new(snapshot.interactive),
            dev_mode: AtomicBool::new(snapshot.dev_mode),
        }
    }
}

impl From<ModeFlags> for ModeSnapshot {
    fn from(flags: ModeFlags) -> Self {
        flags.snapshot()
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key).is_ok_and(|value| parse_flag(&value))
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
