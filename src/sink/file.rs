use crate::level::Level;
use crate::sink::{append, lock, OpenError, Sink, DEFAULT_FLUSH_LEVEL};
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

/// A sink that appends rendered lines to a single file.
///
/// The file is opened eagerly when the sink is constructed and held open
/// for the sink's lifetime; dropping the sink releases the handle.
///
/// # Examples
///
/// ```no_run
/// use timber::{FileSink, Logger};
/// use std::sync::Arc;
///
/// # fn main() -> Result<(), timber::OpenError> {
/// let sink = Arc::new(FileSink::new("app.log")?);
/// let logger = Logger::new("app").with_sink(sink);
/// timber::info!(logger, "ready");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FileSink {
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    file: File,
    flush_level: Level,
}

impl FileSink {
    /// Opens `path` in append mode, creating the file if it is absent.
    ///
    /// # Errors
    ///
    /// Returns an [`OpenError`] if the file cannot be opened or created.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, OpenError> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(|source| OpenError::new(path, source))?;

        Ok(FileSink {
            inner: Mutex::new(Inner {
                file,
                flush_level: DEFAULT_FLUSH_LEVEL,
            }),
        })
    }
}

impl Sink for FileSink {
    fn log(&self, message: &str, level: Level) {
        let mut inner = lock(&self.inner);
        let flush_level = inner.flush_level;
        append(&mut inner.file, message, level, flush_level);
    }

    fn flush_on(&self, level: Level) {
        lock(&self.inner).flush_level = level;
    }
}
