//! Declarative logger configuration
//!
//! [`LoggerSettings`] describes the options of one logger in a serde-friendly
//! shape, so logger trees can be configured from JSON files. Absent fields
//! mean "leave the option out", which for derived loggers keeps the inherited
//! value.
//!
//! ```
//! use rust_tree_logger::{LoggerSettings, LogLevel};
//!
//! let settings = LoggerSettings::from_json(r#"{
//!     "level": "debug",
//!     "show_level": true,
//!     "tree_name": { "pad": 0, "auto_adjust": true },
//!     "secondary": { "output": "stderr", "level": "warning" }
//! }"#).unwrap();
//!
//! assert_eq!(settings.level, Some(LogLevel::Debug));
//! assert_eq!(settings.into_options().unwrap().len(), 4);
//! ```

use super::color::Color;
use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::options::LoggerOption;
use super::sink::SinkHandle;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Console stream selectable from settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    Stdout,
    Stderr,
}

impl OutputTarget {
    fn sink(self) -> SinkHandle {
        match self {
            OutputTarget::Stdout => SinkHandle::stdout(),
            OutputTarget::Stderr => SinkHandle::stderr(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNameSettings {
    #[serde(default)]
    pub pad: i32,
    #[serde(default)]
    pub auto_adjust: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondarySettings {
    pub output: OutputTarget,
    pub level: LogLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    pub path: PathBuf,
    #[serde(default)]
    pub flush: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerSettings {
    pub level: Option<LogLevel>,
    /// Enables the caller segment with this pad.
    pub caller_pad: Option<i32>,
    /// Enables the time prefix with this format.
    pub timestamp: Option<TimestampFormat>,
    pub show_level: bool,
    pub color: bool,
    pub colors: BTreeMap<LogLevel, Color>,
    pub tree_name: Option<TreeNameSettings>,
    pub output: Option<OutputTarget>,
    pub secondary: Option<SecondarySettings>,
    pub file: Option<FileSettings>,
}

impl LoggerSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger settings",
                format!("cannot read '{}'", path.display()),
                e,
            )
        })?;
        Self::from_json(&json)
    }

    /// Translate into options, in field order. Opens the file sink if one is
    /// configured.
    pub fn into_options(self) -> Result<Vec<LoggerOption>> {
        let mut options = Vec::new();

        if let Some(level) = self.level {
            options.push(LoggerOption::MinLevel(level));
        }
        if let Some(pad) = self.caller_pad {
            options.push(LoggerOption::Caller { pad });
        }
        if let Some(format) = self.timestamp {
            options.push(LoggerOption::Timestamp(format));
        }
        if self.show_level {
            options.push(LoggerOption::Level);
        }
        if self.color {
            options.push(LoggerOption::Color);
        }
        for (level, color) in self.colors {
            options.push(LoggerOption::LevelColor(level, color));
        }
        if let Some(tree_name) = self.tree_name {
            options.push(LoggerOption::TreeName {
                pad: tree_name.pad,
                auto_adjust: tree_name.auto_adjust,
            });
        }
        if let Some(output) = self.output {
            options.push(LoggerOption::PrimarySink(output.sink()));
        }
        if let Some(secondary) = self.secondary {
            options.push(LoggerOption::SecondarySink {
                sink: secondary.output.sink(),
                min_level: secondary.level,
            });
        }
        if let Some(file) = self.file {
            if file.path.as_os_str().is_empty() {
                return Err(LoggerError::config("file", "path must not be empty"));
            }
            options.push(LoggerOption::file(file.path, file.flush)?);
        }

        Ok(options)
    }
}
