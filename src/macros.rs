/// Logs a message through a [`Logger`] at an explicit [`Level`].
///
/// Everything after the template is captured as an [`Argument`] at the
/// call boundary, so any mix of strings, numbers, characters, and booleans
/// can be passed without boxing.
///
/// # Examples
///
/// ```
/// use timber::{Level, Logger};
///
/// let logger = Logger::new("app");
/// timber::log!(logger, Level::Warning, "disk {} at {}% capacity", "sda1", 93);
/// ```
///
/// [`Logger`]: crate::Logger
/// [`Level`]: crate::Level
/// [`Argument`]: crate::Argument
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.log($level, $template, &[$($crate::Argument::from($arg)),*])
    };
}

/// Logs a message at the trace level.
///
/// # Examples
///
/// ```
/// use timber::Logger;
///
/// let logger = Logger::new("app");
/// timber::trace!(logger, "entering {}", "main");
/// // is equivalent to:
/// timber::log!(logger, timber::Level::Trace, "entering {}", "main");
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Trace, $template $(, $arg)*)
    };
}

/// Logs a message at the info level.
///
/// # Examples
///
/// ```
/// use timber::Logger;
///
/// let logger = Logger::new("app");
/// timber::info!(logger, "listening on port {}", 8080);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Info, $template $(, $arg)*)
    };
}

/// Logs a message at the debug level.
///
/// # Examples
///
/// ```
/// use timber::Logger;
///
/// let logger = Logger::new("app");
/// timber::debug!(logger, "cache hit ratio {0:.2}", 0.873);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Debug, $template $(, $arg)*)
    };
}

/// Logs a message at the warning level.
///
/// # Examples
///
/// ```
/// use timber::Logger;
///
/// let logger = Logger::new("app");
/// timber::warning!(logger, "retrying request {} of {}", 2, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Warning, $template $(, $arg)*)
    };
}

/// Logs a message at the error level.
///
/// # Examples
///
/// ```
/// use timber::Logger;
///
/// let logger = Logger::new("app");
/// timber::error!(logger, "connection to {} refused", "10.0.0.2");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Error, $template $(, $arg)*)
    };
}

/// Logs a message at the critical level.
///
/// # Examples
///
/// ```
/// use timber::Logger;
///
/// let logger = Logger::new("app");
/// timber::critical!(logger, "out of file descriptors");
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Critical, $template $(, $arg)*)
    };
}
