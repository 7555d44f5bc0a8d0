//! Output that only appears in interactive sessions.
//!
//! Notebook code tends to print intermediate tables and summaries that are
//! noise in batch runs. The helpers here forward to a [`DisplaySink`] when
//! the interactive flag is on and do nothing otherwise.
//!
//! # Example
//!
//! ```
//! use jotter_core::{BufferSink, Console, ModeFlags};
//!
//! let flags = ModeFlags::new();
//! let console = Console::new(&flags, BufferSink::new());
//!
//! console.print(&[&"rows:", &42]);
//! flags.set_interactive(true);
//! console.print(&[&"rows:", &42]);
//!
//! assert_eq!(console.sink().lines(), vec!["rows: 42".to_string()]);
//! ```

use std::cell::RefCell;
use std::fmt::{self, Debug, Display};

use serde::Serialize;
use thiserror::Error;

use crate::mode::{self, ModeFlags};

/// Errors from rendering a value for display.
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("Failed to render value for display: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Destination for rendered output.
///
/// # Implementations
///
/// - `StdoutSink` - prints each rendering on its own line
/// - `BufferSink` - keeps renderings in memory
/// - `NoopSink` - discards everything
pub trait DisplaySink {
    /// Show one rendered value.
    fn show(&self, rendered: &str);
}

impl<T: DisplaySink + ?Sized> DisplaySink for &T {
    fn show(&self, rendered: &str) {
        (**self).show(rendered);
    }
}

/// Prints to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl DisplaySink for StdoutSink {
    fn show(&self, rendered: &str) {
        println!("{rendered}");
    }
}

/// Discards all output.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DisplaySink for NoopSink {
    fn show(&self, _rendered: &str) {}
}

/// Collects output in memory.
#[derive(Debug, Default)]
pub struct BufferSink {
    lines: RefCell<Vec<String>>,
}

impl BufferSink {
    pub const fn new() -> Self {
        Self {
            lines: RefCell::new(Vec::new()),
        }
    }

    /// Everything shown so far, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Remove and return everything shown so far.
    pub fn take(&self) -> Vec<String> {
        self.lines.take()
    }
}

impl DisplaySink for BufferSink {
    fn show(&self, rendered: &str) {
        self.lines.borrow_mut().push(rendered.to_string());
    }
}

/// A sink paired with the flags that gate it.
///
/// Every method returns whether anything was forwarded to the sink.
#[derive(Debug)]
pub struct Console<'a, S> {
    flags: &'a ModeFlags,
    sink: S,
}

impl Console<'static, StdoutSink> {
    /// Standard output gated by the process-wide flags.
    pub fn stdout() -> Self {
        Self::new(mode::global(), StdoutSink)
    }
}

impl<'a, S: DisplaySink> Console<'a, S> {
    pub const fn new(flags: &'a ModeFlags, sink: S) -> Self {
        Self { flags, sink }
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub fn is_enabled(&self) -> bool {
        self.flags.is_interactive()
    }

    /// Show `items` separated by single spaces.
    pub fn print(&self, items: &[&dyn Display]) -> bool {
        if !self.is_enabled() {
            return false;
        }
        self.sink.show(&join_displayed(items));
        true
    }

    /// Show the pretty `Debug` rendering of `value`.
    pub fn pprint<T: Debug + ?Sized>(&self, value: &T) -> bool {
        if !self.is_enabled() {
            return false;
        }
        self.sink.show(&format!("{value:#?}"));
        true
    }

    /// Show `value` as pretty-printed JSON.
    ///
    /// Nothing is serialized when the session is not interactive.
    pub fn display<T: Serialize + ?Sized>(&self, value: &T) -> Result<bool, DisplayError> {
        if !self.is_enabled() {
            return Ok(false);
        }
        let rendered = serde_json::to_string_pretty(value)?;
        self.sink.show(&rendered);
        Ok(true)
    }
}

fn join_displayed(items: &[&dyn Display]) -> String {
    use fmt::Write as _;

    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{item}");
    }
    out
}

/// Print `items` to stdout when the process is in interactive mode.
pub fn print_interactive(items: &[&dyn Display]) -> bool {
    Console::stdout().print(items)
}

/// Pretty-print `value` to stdout when the process is in interactive mode.
pub fn pprint_interactive<T: Debug + ?Sized>(value: &T) -> bool {
    Console::stdout().pprint(value)
}

/// Show `value` as JSON on stdout when the process is in interactive mode.
pub fn display_interactive<T: Serialize + ?Sized>(value: &T) -> Result<bool, DisplayError> {
    Console::stdout().display(value)
}
