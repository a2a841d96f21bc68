//! Output destinations for rendered log lines.
//!
//! A [`Sink`] accepts a fully rendered message together with its severity
//! and persists or displays it. Sinks are shared behind `Arc`, so one sink
//! may serve several [`Logger`]s; each sink serializes its writes under an
//! internal lock, and no two messages ever interleave mid-write at a single
//! sink.
//!
//! Four sinks are provided: [`ConsoleSink`] and [`ErrorConsoleSink`] write
//! colorized lines to standard output and standard error, [`FileSink`]
//! appends to a single file, and [`RotatingFileSink`] appends to a file
//! that rotates through numbered backups once it grows past a size limit.
//!
//! [`Logger`]: crate::Logger

use crate::level::Level;
use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};

mod console;
mod error;
mod file;
mod rotating;

pub use console::{ConsoleSink, ErrorConsoleSink};
pub use error::OpenError;
pub use file::FileSink;
pub use rotating::RotatingFileSink;

/// A destination for rendered log lines.
///
/// Implementors persist or display a message; they never inspect it. Every
/// `log` call on one sink instance is serialized, and a per-sink flush
/// threshold controls when the underlying medium is flushed.
pub trait Sink: Send + Sync {
    /// Writes one rendered message at the given severity.
    ///
    /// Write failures are swallowed: logging a message must never abort
    /// the caller's control flow.
    fn log(&self, message: &str, level: Level);

    /// Sets the severity at or above which every write is immediately
    /// flushed.
    ///
    /// The comparison is inclusive, and the default threshold is
    /// [`Level::Trace`], flushing on every write.
    fn flush_on(&self, level: Level);
}

/// Threshold every sink starts with: flush on each write.
pub(crate) const DEFAULT_FLUSH_LEVEL: Level = Level::Trace;

/// Locks a sink mutex, ignoring poisoning.
///
/// A sink's critical sections only write bytes; a panicking writer leaves
/// no state worth protecting, and logging must not panic in sympathy.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Appends `message` to `writer`, flushing iff `level >= flush_level`.
pub(crate) fn append<W: Write>(writer: &mut W, message: &str, level: Level, flush_level: Level) {
    let _ = writer.write_all(message.as_bytes());
    if level >= flush_level {
        let _ = writer.flush();
    }
}
