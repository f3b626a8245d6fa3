//! Logger configuration snapshot and the options that mutate it
//!
//! A logger is configured by applying a list of [`LoggerOption`]s, in order,
//! to a [`LoggerConfig`]. Roots start from [`LoggerConfig::for_root`]; derived
//! loggers start from a copy of their parent's configuration. Options do not
//! validate their input: a pad of zero or below simply renders unpadded.

use super::color::{Color, ColorTable};
use super::error::Result;
use super::log_level::LogLevel;
use super::sink::SinkHandle;
use super::timestamp::TimestampFormat;
use crate::sinks::FileSink;
use std::path::PathBuf;

/// How the bracketed name segment is rendered and padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameLayout {
    /// Render the dotted path from the tree root instead of the bare name.
    pub show_tree_name: bool,
    /// Column width of the name segment; `<= 0` means unpadded.
    pub pad: i32,
    /// Let the tree root overwrite `pad` with the widest name in the tree.
    pub auto_adjust: bool,
}

#[derive(Debug, Clone)]
pub struct SecondarySink {
    pub sink: SinkHandle,
    pub min_level: LogLevel,
}

#[derive(Debug, Clone)]
pub struct FileTarget {
    pub sink: SinkHandle,
    /// Flush (and sync) after every line.
    pub flush: bool,
}

/// Full configuration of one logger.
///
/// Cloning copies every field; sinks are shared handles, the color table is
/// an independent copy.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub min_level: LogLevel,
    pub show_caller: bool,
    pub caller_pad: i32,
    pub show_time: bool,
    pub timestamp_format: TimestampFormat,
    pub show_level: bool,
    pub use_color: bool,
    pub colors: ColorTable,
    pub name_layout: NameLayout,
    pub primary: SinkHandle,
    pub secondary: Option<SecondarySink>,
    pub file: Option<FileTarget>,
}

impl LoggerConfig {
    /// Defaults for a root logger named `name`: Info threshold, no optional
    /// segments, name column as wide as the name, default palette, stdout.
    pub fn for_root(name: &str) -> Self {
        Self {
            min_level: LogLevel::Info,
            show_caller: false,
            caller_pad: 0,
            show_time: false,
            timestamp_format: TimestampFormat::default(),
            show_level: false,
            use_color: false,
            colors: ColorTable::default(),
            name_layout: NameLayout {
                show_tree_name: false,
                pad: name_width(name),
                auto_adjust: false,
            },
            primary: SinkHandle::stdout(),
            secondary: None,
            file: None,
        }
    }

    /// Apply `options` in order; later options win on shared fields.
    pub fn apply<I>(&mut self, options: I)
    where
        I: IntoIterator<Item = LoggerOption>,
    {
        for option in options {
            option.apply(self);
        }
    }
}

/// Width of a name as counted by the name column.
pub(crate) fn name_width(name: &str) -> i32 {
    i32::try_from(name.chars().count()).unwrap_or(i32::MAX)
}

/// One self-contained configuration mutation.
#[derive(Debug, Clone)]
pub enum LoggerOption {
    /// Minimum severity delivered to the primary sink.
    MinLevel(LogLevel),
    /// Show `file:line` of the logging call, left-justified to `pad`.
    Caller { pad: i32 },
    /// Prefix every line with the current time.
    Timestamp(TimestampFormat),
    /// Show the severity tag.
    Level,
    /// Wrap every line in its severity color.
    Color,
    /// Override the color of one severity.
    LevelColor(LogLevel, Color),
    /// Show the dotted tree path, padded to `pad`, optionally auto-adjusted.
    TreeName { pad: i32, auto_adjust: bool },
    /// Replace the primary sink.
    PrimarySink(SinkHandle),
    /// Route messages at or above `min_level` here instead of the primary sink.
    SecondarySink { sink: SinkHandle, min_level: LogLevel },
    /// Copy every line to an append-only file sink.
    FileSink { sink: SinkHandle, flush: bool },
}

impl LoggerOption {
    /// Open `path` for append and wrap it as a file-sink option.
    pub fn file(path: impl Into<PathBuf>, flush: bool) -> Result<Self> {
        Ok(LoggerOption::FileSink {
            sink: SinkHandle::new(FileSink::open(path)?),
            flush,
        })
    }

    pub fn apply(self, config: &mut LoggerConfig) {
        match self {
            LoggerOption::MinLevel(level) => config.min_level = level,
            LoggerOption::Caller { pad } => {
                config.show_caller = true;
                config.caller_pad = pad;
            }
            LoggerOption::Timestamp(format) => {
                config.show_time = true;
                config.timestamp_format = format;
            }
            LoggerOption::Level => config.show_level = true,
            LoggerOption::Color => config.use_color = true,
            LoggerOption::LevelColor(level, color) => config.colors.set(level, color),
            LoggerOption::TreeName { pad, auto_adjust } => {
                config.name_layout = NameLayout {
                    show_tree_name: true,
                    pad,
                    auto_adjust,
                };
            }
            LoggerOption::PrimarySink(sink) => config.primary = sink,
            LoggerOption::SecondarySink { sink, min_level } => {
                config.secondary = Some(SecondarySink { sink, min_level });
            }
            LoggerOption::FileSink { sink, flush } => {
                config.file = Some(FileTarget { sink, flush });
            }
        }
    }
}
