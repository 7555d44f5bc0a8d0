//! Integration tests for interactive output gating.

use jotter_core::{BufferSink, Console, ModeFlags, ModeSnapshot, mode};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Frame {
    name: &'static str,
    rows: u32,
}

#[test]
fn batch_session_shows_nothing() {
    let flags = ModeFlags::new();
    let console = Console::new(&flags, BufferSink::new());

    console.print(&[&"hello"]);
    console.pprint(&Frame { name: "a", rows: 1 });
    console.display(&Frame { name: "a", rows: 1 }).unwrap();

    assert!(console.sink().lines().is_empty());
}

#[test]
fn interactive_session_shows_everything() {
    let flags = ModeFlags::from(ModeSnapshot {
        interactive: true,
        dev_mode: false,
    });
    let console = Console::new(&flags, BufferSink::new());
    let frame = Frame {
        name: "sales",
        rows: 12,
    };

    console.print(&[&frame.name, &frame.rows]);
    console.pprint(&frame);
    console.display(&frame).unwrap();

    let lines = console.sink().lines();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "sales 12");
    assert!(lines[1].starts_with("Frame {"));
    assert!(lines[2].contains("\"rows\": 12"));
}

#[test]
fn dev_mode_selects_reduced_sizes() {
    let flags = ModeFlags::new();
    assert_eq!(flags.dev_or(1_000_000_usize, 1_000), 1_000_000);

    flags.set_dev_mode(true);
    assert_eq!(flags.dev_or(1_000_000_usize, 1_000), 1_000);
    assert!(!flags.is_interactive());
}

#[test]
fn global_flags_are_shared() {
    // Only this test touches the process-wide flags in this binary.
    let before = mode::global().snapshot();

    mode::global().set_interactive(true);
    assert!(mode::global().is_interactive());
    assert!(Console::stdout().is_enabled());

    mode::global().apply(&before);
    assert_eq!(mode::global().snapshot(), before);
}
