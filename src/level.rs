//! Severity levels for log messages.

use std::fmt;

/// The severity of a log message.
///
/// Levels are ordered by declaration: `None < Trace < Info < Debug <
/// Warning < Error < Critical`. The ordering exists only for flush-threshold
/// comparisons in [`Sink::flush_on`]; no level ever suppresses a message.
///
/// [`Sink::flush_on`]: crate::sink::Sink::flush_on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    None,
    Trace,
    Info,
    Debug,
    Warning,
    Error,
    Critical,
}

impl Level {
    /// Returns the lowercase name of the level.
    ///
    /// # Examples
    ///
    /// ```
    /// # use timber::Level;
    /// assert_eq!(Level::Warning.as_str(), "warning");
    /// assert_eq!(Level::None.as_str(), "none");
    /// ```
    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Critical => "critical",
            Level::None => "none",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Level;

    #[test]
    fn declaration_order_is_comparison_order() {
        assert!(Level::None < Level::Trace);
        assert!(Level::Trace < Level::Info);
        assert!(Level::Info < Level::Debug);
        assert!(Level::Debug < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Critical);
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Level::Critical.to_string(), "critical");
    }
}
