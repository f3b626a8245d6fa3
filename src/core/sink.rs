//! Sink trait for log output destinations

use super::error::Result;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// A destination that accepts formatted log bytes.
pub trait Sink: Send {
    fn write(&mut self, bytes: &[u8]) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;

    /// Detach the underlying resource; later writes fail.
    ///
    /// Streams that cannot be closed only flush.
    fn close(&mut self) -> Result<()> {
        self.flush()
    }
}

/// Shared, lock-guarded sink.
///
/// Loggers derived from one another inherit sinks by cloning this handle, so
/// writes through any of them are serialized on the same lock.
#[derive(Clone)]
pub struct SinkHandle {
    inner: Arc<Mutex<dyn Sink>>,
}

impl SinkHandle {
    pub fn new<S: Sink + 'static>(sink: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(sink)),
        }
    }

    /// Standard output; the default primary sink.
    pub fn stdout() -> Self {
        Self::new(crate::sinks::ConsoleSink::stdout())
    }

    pub fn stderr() -> Self {
        Self::new(crate::sinks::ConsoleSink::stderr())
    }

    pub fn write(&self, bytes: &[u8]) -> Result<()> {
        self.inner.lock().write(bytes)
    }

    pub fn flush(&self) -> Result<()> {
        self.inner.lock().flush()
    }

    pub fn close(&self) -> Result<()> {
        self.inner.lock().close()
    }

    pub fn name(&self) -> String {
        self.inner.lock().name().to_string()
    }

    /// Whether both handles point at the same sink.
    pub fn same_sink(&self, other: &SinkHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for SinkHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkHandle").field("name", &self.name()).finish()
    }
}

impl Default for SinkHandle {
    fn default() -> Self {
        Self::stdout()
    }
}
