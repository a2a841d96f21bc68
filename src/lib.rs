//! Pattern-driven logging with positional message formatting and rotating
//! file sinks.
//!
//! # Overview
//!
//! `timber` renders every log call in three steps. The [message
//! formatter][mod@crate::formatter] substitutes positional `{}`
//! placeholders in the call's template with its arguments. The [pattern
//! renderer][mod@crate::pattern] then expands the logger's configured
//! pattern, whose `%` tokens select the message, logger name, level name,
//! and broken-down timestamp fields, into the final line. Finally the line
//! is handed to every [`Sink`] attached to the [`Logger`], in registration
//! order, on the calling thread.
//!
//! Logging is deliberately forgiving: malformed templates, out-of-range
//! placeholders, and unknown pattern tokens all degrade to literal text,
//! and write failures are swallowed. A log statement never aborts the
//! caller's control flow.
//!
//! # Getting started
//!
//! Attach a sink to a named logger and go:
//!
//! ```
//! use std::sync::Arc;
//! use timber::{ConsoleSink, Logger};
//!
//! let logger = Logger::new("app")
//!     .with_pattern("[%T] [%L] %N: %V%n")
//!     .with_sink(Arc::new(ConsoleSink::new()));
//!
//! timber::info!(logger, "listening on {}:{}", "0.0.0.0", 8080);
//! timber::warning!(logger, "{} of {} workers busy", 7, 8);
//! ```
//!
//! ```log
//! [15:04:05] [info] app: listening on 0.0.0.0:8080
//! [15:04:05] [warning] app: 7 of 8 workers busy
//! ```
//!
//! # Sinks
//!
//! A logger fans out to any number of sinks, and a sink may be shared by
//! several loggers:
//!
//! * [`ConsoleSink`] and [`ErrorConsoleSink`] write to standard output and
//!   standard error, colorized by level.
//! * [`FileSink`] appends to a single file.
//! * [`RotatingFileSink`] appends to a file that rotates through numbered
//!   backups (`app.log`, `app.1.log`, `app.2.log`, …) once it grows past a
//!   size limit, retaining a bounded number of backups.
//!
//! ```no_run
//! use std::sync::Arc;
//! use timber::{ConsoleSink, Logger, RotatingFileSink};
//!
//! # fn main() -> Result<(), timber::OpenError> {
//! let console = Arc::new(ConsoleSink::new());
//! let file = Arc::new(RotatingFileSink::new("logs/app.log", 1024 * 1024, 3)?);
//!
//! let logger = Logger::new("app")
//!     .with_sink(console)
//!     .with_sink(file);
//!
//! timber::error!(logger, "lost connection to {}", "db-1");
//! # Ok(())
//! # }
//! ```
//!
//! Each sink serializes its own writes under a lock, so concurrent loggers
//! never interleave two messages mid-write at one sink. Sinks flush their
//! medium per message when the message's level reaches the sink's
//! [`flush_on`][Sink::flush_on] threshold; console sinks always flush.
//!
//! # Custom sinks
//!
//! Anything implementing [`Sink`] can be attached. The trait is two
//! methods, one to receive a rendered line and one to accept a flush
//! threshold, so a test capture buffer or a bespoke destination is a few
//! lines of code.

pub mod formatter;
pub mod pattern;
pub mod sink;
pub mod style;
pub mod timestamp;

mod level;
mod logger;
#[macro_use]
mod macros;

pub use crate::formatter::{format, Argument};
pub use crate::level::Level;
pub use crate::logger::Logger;
pub use crate::sink::{
    ConsoleSink, ErrorConsoleSink, FileSink, OpenError, RotatingFileSink, Sink,
};
pub use crate::timestamp::Timestamp;
