//! Core logger types and traits

pub mod args;
pub mod caller;
pub mod color;
pub mod error;
pub mod formatter;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod options;
pub mod settings;
pub mod sink;
pub mod timestamp;
pub mod tree;

pub use args::{join_args, IntoLogArgs, LogArg};
pub use caller::CallSite;
pub use color::{Color, ColorTable, RESET};
pub use error::{LoggerError, Result};
pub use formatter::LineFormatter;
pub use log_level::{LogLevel, LEVEL_COUNT};
pub use logger::{Logger, LoggerBuilder, FATAL_EXIT_CODE};
pub use metrics::LoggerMetrics;
pub use options::{FileTarget, LoggerConfig, LoggerOption, NameLayout, SecondarySink};
pub use settings::{FileSettings, LoggerSettings, OutputTarget, SecondarySettings, TreeNameSettings};
pub use sink::{Sink, SinkHandle};
pub use timestamp::TimestampFormat;
pub use tree::{LoggerTree, NodeId};
