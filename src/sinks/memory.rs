//! In-memory sink for capturing output

use crate::core::{LoggerError, Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Collects written bytes in a shared buffer.
///
/// Clones share the buffer, so one clone can be handed to a logger while
/// another is kept to inspect what was written.
///
/// # Example
///
/// ```
/// use rust_tree_logger::sinks::MemorySink;
/// use rust_tree_logger::{Logger, LoggerOption, SinkHandle};
///
/// let capture = MemorySink::new();
/// let logger = Logger::new_root(
///     "svc",
///     [LoggerOption::PrimarySink(SinkHandle::new(capture.clone()))],
/// );
/// logger.infoln("ready");
/// assert_eq!(capture.contents(), " [svc]  > ready\n");
/// ```
#[derive(Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
    closed: Arc<Mutex<bool>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Written output split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }

    pub fn is_closed(&self) -> bool {
        *self.closed.lock()
    }
}

impl Sink for MemorySink {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        if self.is_closed() {
            return Err(LoggerError::sink_closed("memory"));
        }
        self.buffer.lock().extend_from_slice(bytes);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }

    fn close(&mut self) -> Result<()> {
        let mut closed = self.closed.lock();
        if *closed {
            return Err(LoggerError::sink_closed("memory"));
        }
        *closed = true;
        Ok(())
    }
}
