//! ANSI styling for console sinks.
//!
//! The console sinks bracket every write between [`style_for`] and
//! [`reset`]. The selection is a fixed per-level table; nothing here
//! touches terminal state beyond emitting escape sequences, and two sinks
//! sharing one terminal may still interleave styling across concurrent
//! writes.

use crate::level::Level;

const RESET: &str = "\x1b[0m";
const GREEN: &str = "\x1b[32m";
const BLUE: &str = "\x1b[34m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RED_ON_WHITE: &str = "\x1b[31;47m";

/// Returns the escape sequence that styles output for `level`.
pub const fn style_for(level: Level) -> &'static str {
    match level {
        Level::None | Level::Trace => RESET,
        Level::Info => GREEN,
        Level::Debug => BLUE,
        Level::Warning => YELLOW,
        Level::Error => RED,
        Level::Critical => RED_ON_WHITE,
    }
}

/// Returns the escape sequence that restores default styling.
pub const fn reset() -> &'static str {
    RESET
}
