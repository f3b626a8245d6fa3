//! Timestamp rendering for the optional time prefix of a log line

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How the time prefix of a line is rendered.
///
/// # Examples
///
/// ```
/// use rust_tree_logger::TimestampFormat;
///
/// let stamp = TimestampFormat::Custom("%Y-%m-%d %H:%M:%S".to_string()).format_now();
/// assert_eq!(stamp.len(), 19);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339, `1999-12-31T23:59:58.250+00:00`
    #[default]
    Rfc3339,

    /// UTC with milliseconds, `1999-12-31T23:59:58.250Z`
    Iso8601,

    /// UTC with microseconds
    Iso8601Micros,

    /// Seconds since the epoch
    Unix,

    UnixMillis,

    /// strftime format string, passed through unchecked
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Iso8601Micros => datetime.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => {
                use std::fmt::Write;
                // chrono reports bad specifiers through fmt::Error; render them as nothing
                let mut out = String::new();
                if write!(out, "{}", datetime.format(format_str)).is_err() {
                    out.clear();
                }
                out
            }
        }
    }

    /// Render the current wall-clock time.
    #[must_use]
    pub fn format_now(&self) -> String {
        self.format(&Utc::now())
    }
}
