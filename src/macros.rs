//! Formatting macros for the level methods.
//!
//! The level macros forward `format!`-style arguments to the `*f` methods, so
//! the format string is interpolated before the line prefix is built and no
//! newline is appended. `log_args!` builds an operand list for the plain and
//! `*ln` methods.
//!
//! # Examples
//!
//! ```
//! use rust_tree_logger::prelude::*;
//! use rust_tree_logger::{info, log_args};
//!
//! let logger = Logger::new_root("svc", []);
//!
//! let addr = "0.0.0.0:8080";
//! info!(logger, "listening on {}\n", addr);
//! logger.infoln(log_args!["ports", 8080, 8443]);
//! ```

/// Log a formatted message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_tree_logger::prelude::*;
/// # let logger = Logger::new_root("svc", []);
/// use rust_tree_logger::log;
/// log!(logger, LogLevel::Info, "worker pool ready\n");
/// log!(logger, LogLevel::Error, "upstream answered {}\n", 502);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.logf($level, format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// ```
/// # use rust_tree_logger::prelude::*;
/// # let logger = Logger::new_root("svc", []);
/// use rust_tree_logger::debug;
/// debug!(logger, "{} jobs queued\n", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(format_args!($($arg)+))
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(format_args!($($arg)+))
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warningf(format_args!($($arg)+))
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(format_args!($($arg)+))
    };
}

/// Log a fatal-level message, then exit the process.
///
/// ```no_run
/// # use rust_tree_logger::prelude::*;
/// # let logger = Logger::new_root("svc", []);
/// use rust_tree_logger::fatal;
/// fatal!(logger, "cannot write journal: {}\n", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(format_args!($($arg)+))
    };
}

/// Build an operand list for the plain and `*ln` logging methods.
///
/// ```
/// use rust_tree_logger::{log_args, join_args};
///
/// assert_eq!(join_args(&log_args!["retry", 2, 5]), "retry2 5");
/// ```
#[macro_export]
macro_rules! log_args {
    ($($arg:expr),* $(,)?) => {
        ::std::vec![$($crate::LogArg::from($arg)),*]
    };
}
