use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Error returned when a file-backed sink cannot open its target path.
///
/// Construction fails fast: a sink that cannot open its file is unusable,
/// and the caller decides what to do about it. Nothing is retried.
#[derive(Debug)]
pub struct OpenError {
    path: PathBuf,
    source: io::Error,
}

impl OpenError {
    pub(crate) fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        OpenError {
            path: path.into(),
            source,
        }
    }

    /// Returns the path that could not be opened.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for OpenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "failed to open log file `{}`: {}",
            self.path.display(),
            self.source,
        )
    }
}

impl std::error::Error for OpenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
