use crate::level::Level;
use crate::sink::{lock, Sink, DEFAULT_FLUSH_LEVEL};
use crate::style;
use std::io::{self, Write};
use std::sync::Mutex;

/// A sink that writes colorized lines to standard output.
///
/// Each message is bracketed by the styling for its level and a reset.
/// Console output is flushed after every write regardless of the
/// [`flush_on`] threshold.
///
/// [`flush_on`]: Sink::flush_on
#[derive(Debug)]
pub struct ConsoleSink {
    // Serializes writers. Console sinks flush unconditionally, so the
    // threshold it guards is stored but has no effect on them.
    flush_level: Mutex<Level>,
}

/// A sink that writes colorized lines to standard error.
///
/// Identical to [`ConsoleSink`] apart from the stream it writes to.
#[derive(Debug)]
pub struct ErrorConsoleSink {
    flush_level: Mutex<Level>,
}

impl ConsoleSink {
    /// Returns a new sink over standard output.
    pub fn new() -> Self {
        ConsoleSink {
            flush_level: Mutex::new(DEFAULT_FLUSH_LEVEL),
        }
    }
}

impl ErrorConsoleSink {
    /// Returns a new sink over standard error.
    pub fn new() -> Self {
        ErrorConsoleSink {
            flush_level: Mutex::new(DEFAULT_FLUSH_LEVEL),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        ConsoleSink::new()
    }
}

impl Default for ErrorConsoleSink {
    fn default() -> Self {
        ErrorConsoleSink::new()
    }
}

fn write_styled<W: Write>(mut writer: W, message: &str, level: Level) {
    let _ = writer.write_all(style::style_for(level).as_bytes());
    let _ = writer.write_all(message.as_bytes());
    let _ = writer.write_all(style::reset().as_bytes());
    let _ = writer.flush();
}

impl Sink for ConsoleSink {
    fn log(&self, message: &str, level: Level) {
        let _guard = lock(&self.flush_level);
        write_styled(io::stdout().lock(), message, level);
    }

    fn flush_on(&self, level: Level) {
        *lock(&self.flush_level) = level;
    }
}

impl Sink for ErrorConsoleSink {
    fn log(&self, message: &str, level: Level) {
        let _guard = lock(&self.flush_level);
        write_styled(io::stderr().lock(), message, level);
    }

    fn flush_on(&self, level: Level) {
        *lock(&self.flush_level) = level;
    }
}
