use crate::level::Level;
use crate::sink::{append, lock, OpenError, Sink, DEFAULT_FLUSH_LEVEL};
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A sink that appends to a file and rotates it through numbered backups
/// once it grows past a size limit.
///
/// Backups are named `<stem>.<n><ext>`: a base path of `app.log` rotates
/// into `app.1.log`, `app.2.log`, and so on, with `1` always the youngest.
/// At most `max_files` backups are retained; rotating past that discards
/// the oldest.
///
/// The constructor creates the parent directory if necessary and seeds the
/// size counter from the file's existing length, so the rotation limit
/// holds across restarts.
///
/// Rotation happens *before* a write that would push the file past
/// `max_size`. A single message larger than `max_size` still rotates
/// first and is then written whole; the fresh file may exceed the limit
/// until the next write rotates it again.
///
/// # Examples
///
/// ```no_run
/// use timber::{Logger, RotatingFileSink};
/// use std::sync::Arc;
///
/// # fn main() -> Result<(), timber::OpenError> {
/// // keep at most five megabytes across three backups
/// let sink = Arc::new(RotatingFileSink::new("logs/app.log", 5 * 1024 * 1024, 3)?);
/// let logger = Logger::new("app").with_sink(sink);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RotatingFileSink {
    base_path: PathBuf,
    max_size: u64,
    max_files: usize,
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    file: File,
    current_size: u64,
    flush_level: Level,
}

impl RotatingFileSink {
    /// Opens `path` in append mode, creating it and its parent directory
    /// if necessary.
    ///
    /// `max_size` is the size in bytes past which the file rotates, and
    /// `max_files` is the number of numbered backups retained.
    ///
    /// # Errors
    ///
    /// Returns an [`OpenError`] if the directory or the file cannot be
    /// created or opened.
    pub fn new(
        path: impl Into<PathBuf>,
        max_size: u64,
        max_files: usize,
    ) -> Result<Self, OpenError> {
        let base_path = path.into();

        if let Some(parent) = base_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| OpenError::new(&base_path, source))?;
            }
        }

        let file = open_append(&base_path).map_err(|source| OpenError::new(&base_path, source))?;
        let current_size = file
            .metadata()
            .map_err(|source| OpenError::new(&base_path, source))?
            .len();

        Ok(RotatingFileSink {
            base_path,
            max_size,
            max_files,
            inner: Mutex::new(Inner {
                file,
                current_size,
                flush_level: DEFAULT_FLUSH_LEVEL,
            }),
        })
    }

    /// Returns the path of the backup numbered `index`.
    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = OsString::new();
        if let Some(stem) = self.base_path.file_stem() {
            name.push(stem);
        }
        name.push(format!(".{}", index));
        if let Some(extension) = self.base_path.extension() {
            name.push(".");
            name.push(extension);
        }
        self.base_path.with_file_name(name)
    }

    /// Shifts every backup up one slot and starts a fresh active file.
    ///
    /// The shift walks down from the highest retained slot so each rename
    /// lands in a vacated name; the loop bounds make the walk empty when
    /// there is at most one slot.
    fn rotate(&self, inner: &mut Inner) -> io::Result<()> {
        inner.file.flush()?;

        if self.max_files == 0 {
            // no retention slots: the active file is discarded outright
            fs::remove_file(&self.base_path)?;
        } else {
            let oldest = self.backup_path(self.max_files);
            if oldest.exists() {
                fs::remove_file(&oldest)?;
            }

            for index in (1..self.max_files).rev() {
                let from = self.backup_path(index);
                if from.exists() {
                    fs::rename(&from, self.backup_path(index + 1))?;
                }
            }

            if self.base_path.exists() {
                fs::rename(&self.base_path, self.backup_path(1))?;
            }
        }

        // the old handle is released once the new one replaces it
        inner.file = open_append(&self.base_path)?;
        inner.current_size = 0;
        Ok(())
    }
}

impl Sink for RotatingFileSink {
    fn log(&self, message: &str, level: Level) {
        let mut inner = lock(&self.inner);

        if inner.current_size + message.len() as u64 > self.max_size {
            // best effort: a failed rotation keeps appending to the
            // active file rather than dropping the message
            let _ = self.rotate(&mut inner);
        }

        let flush_level = inner.flush_level;
        append(&mut inner.file, message, level, flush_level);
        inner.current_size += message.len() as u64;
    }

    fn flush_on(&self, level: Level) {
        lock(&self.inner).flush_level = level;
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().append(true).create(true).open(path)
}
