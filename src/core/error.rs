//! Error types for the tree logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON settings could not be parsed
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Sink was closed and can no longer accept writes
    #[error("Sink '{sink}' is already closed")]
    SinkClosed { sink: String },
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a closed-sink error
    pub fn sink_closed(sink: impl Into<String>) -> Self {
        LoggerError::SinkClosed { sink: sink.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_closed_sink_message() {
        let err = LoggerError::sink_closed("file:svc.log");
        assert!(matches!(err, LoggerError::SinkClosed { ref sink } if sink == "file:svc.log"));
        assert_eq!(err.to_string(), "Sink 'file:svc.log' is already closed");
    }

    #[test]
    fn test_config_message() {
        let err = LoggerError::config("file", "path must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for file: path must not be empty"
        );
    }

    #[test]
    fn test_io_operation_keeps_source() {
        let cause = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err = LoggerError::io_operation("opening log file", "cannot open 'x/svc.log'", cause);

        assert_eq!(
            err.to_string(),
            "IO error while opening log file: cannot open 'x/svc.log'"
        );
        let source = err.source().expect("io source");
        assert_eq!(source.to_string(), "no such directory");
    }

    #[test]
    fn test_conversions() {
        let err: LoggerError = std::io::Error::from(std::io::ErrorKind::BrokenPipe).into();
        assert!(matches!(err, LoggerError::IoError(_)));

        let parse = serde_json::from_str::<u8>("x").expect_err("invalid json");
        assert!(matches!(LoggerError::from(parse), LoggerError::JsonError(_)));
    }
}
