//! # Rust Tree Logger
//!
//! A synchronous, hierarchical text logger. Loggers form a tree: a root is
//! configured with options, children derive from it by copying its
//! configuration and overriding parts of it, and every line is formatted and
//! written before the logging call returns.
//!
//! ## Features
//!
//! - **Name Trees**: dotted `root.child.grandchild` names with a name column
//!   whose width can be shared across the whole tree
//! - **Optional Segments**: timestamp, severity tag and call site
//! - **Per-Level Colors**: ANSI colors, overridable per logger
//! - **Sink Routing**: primary sink, secondary sink with its own threshold,
//!   and an append-only file sink
//! - **Thread Safe**: loggers of one tree can be used and derived from many threads

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Color, IntoLogArgs, LogArg, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        LoggerMetrics, LoggerOption, LoggerSettings, Result, Sink, SinkHandle, TimestampFormat,
    };
    pub use crate::sinks::{ConsoleSink, FileSink, MemorySink, WriterSink};
}

pub use crate::core::{
    join_args, CallSite, Color, ColorTable, FileTarget, IntoLogArgs, LineFormatter, LogArg,
    LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, LoggerOption,
    LoggerSettings, LoggerTree, NameLayout, NodeId, OutputTarget, Result, SecondarySink, Sink,
    SinkHandle, TimestampFormat, FATAL_EXIT_CODE, LEVEL_COUNT, RESET,
};
pub use sinks::{ConsoleSink, FileSink, MemorySink, WriterSink};
