use crate::formatter::{self, Argument};
use crate::level::Level;
use crate::pattern;
use crate::sink::Sink;
use crate::timestamp::Timestamp;
use smallvec::SmallVec;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// The pattern a logger starts with.
pub(crate) const DEFAULT_PATTERN: &str = "[%R] %N: %V";

/// A named logger that renders messages through a pattern and fans them
/// out to its sinks.
///
/// Each `log` call formats the user message, expands the logger's pattern
/// around it with a freshly captured timestamp, and hands the final line
/// to every attached sink in registration order, synchronously, on the
/// calling thread.
///
/// A `Logger` itself is not synchronized: share it across threads only
/// after configuration is done, and let each sink's own lock serialize the
/// writes.
///
/// # Examples
///
/// ```
/// use timber::{ConsoleSink, Logger};
/// use std::sync::Arc;
///
/// let logger = Logger::new("app")
///     .with_pattern("[%L] %N: %V%n")
///     .with_sink(Arc::new(ConsoleSink::new()));
///
/// timber::info!(logger, "listening on port {}", 8080);
/// ```
pub struct Logger {
    name: String,
    pattern: String,
    // Most loggers hold one or two sinks, so keep them inline
    sinks: SmallVec<[Arc<dyn Sink>; 2]>,
}

impl Logger {
    /// Returns a logger with the given name, the default pattern
    /// `"[%R] %N: %V"`, and no sinks.
    pub fn new(name: impl Into<String>) -> Self {
        Logger {
            name: name.into(),
            pattern: DEFAULT_PATTERN.to_owned(),
            sinks: SmallVec::new(),
        }
    }

    /// Replaces the pattern, builder style.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Attaches a sink, builder style.
    pub fn with_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Appends a sink to the dispatch order.
    ///
    /// Sinks are not de-duplicated; attaching one twice writes every
    /// message twice.
    pub fn add_sink(&mut self, sink: Arc<dyn Sink>) {
        self.sinks.push(sink);
    }

    /// Renames the logger.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the logger's name.
    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// Replaces the pattern. The text is not validated; unknown tokens
    /// render as themselves.
    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.pattern = pattern.into();
    }

    /// Returns the pattern exactly as it was set.
    pub fn get_pattern(&self) -> &str {
        &self.pattern
    }

    /// Propagates a flush threshold to every currently attached sink.
    ///
    /// Sinks attached afterward keep their own default.
    pub fn flush_on(&self, level: Level) {
        for sink in &self.sinks {
            sink.flush_on(level);
        }
    }

    /// Formats `template` with `args`, renders the pattern around it, and
    /// dispatches the line to every sink in registration order.
    ///
    /// The [`log!`] macro is the ergonomic front end to this method.
    ///
    /// [`log!`]: crate::log
    pub fn log(&self, level: Level, template: &str, args: &[Argument]) {
        let message = formatter::format(template, args);
        let timestamp = Timestamp::now();
        let line = pattern::render(&self.pattern, level, &self.name, &message, &timestamp);
        for sink in &self.sinks {
            sink.log(&line, level);
        }
    }

    /// Logs at [`Level::Trace`].
    pub fn trace(&self, template: &str, args: &[Argument]) {
        self.log(Level::Trace, template, args);
    }

    /// Logs at [`Level::Info`].
    pub fn info(&self, template: &str, args: &[Argument]) {
        self.log(Level::Info, template, args);
    }

    /// Logs at [`Level::Debug`].
    pub fn debug(&self, template: &str, args: &[Argument]) {
        self.log(Level::Debug, template, args);
    }

    /// Logs at [`Level::Warning`].
    pub fn warning(&self, template: &str, args: &[Argument]) {
        self.log(Level::Warning, template, args);
    }

    /// Logs at [`Level::Error`].
    pub fn error(&self, template: &str, args: &[Argument]) {
        self.log(Level::Error, template, args);
    }

    /// Logs at [`Level::Critical`].
    pub fn critical(&self, template: &str, args: &[Argument]) {
        self.log(Level::Critical, template, args);
    }

    /// Formats `template` with `args` and appends the bare message to the
    /// file at `path`, bypassing the pattern and the attached sinks.
    ///
    /// This is a best-effort convenience: if the file cannot be opened or
    /// written, the call is a silent no-op.
    pub fn log_to_file(&self, path: impl AsRef<Path>, template: &str, args: &[Argument]) {
        let message = formatter::format(template, args);
        if let Ok(mut file) = OpenOptions::new().append(true).create(true).open(path) {
            let _ = file.write_all(message.as_bytes());
            let _ = file.flush();
        }
    }
}

impl Default for Logger {
    /// A logger named after the crate, with the default pattern and no
    /// sinks.
    fn default() -> Self {
        Logger::new("timber")
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("pattern", &self.pattern)
            .field("sinks", &self.sinks.len())
            .finish_non_exhaustive()
    }
}
