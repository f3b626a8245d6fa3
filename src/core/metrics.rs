//! Delivery counters for a logger tree
//!
//! Logging calls never report sink failures to the caller; the counters here
//! are the only place those failures become visible.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters shared by every logger of one tree.
///
/// # Example
///
/// ```
/// use rust_tree_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_delivered();
/// metrics.record_dropped();
///
/// assert_eq!(metrics.delivered_count(), 1);
/// assert_eq!(metrics.dropped_count(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines written to a primary or secondary sink
    delivered: AtomicU64,

    /// Lines that passed neither the secondary nor the primary threshold
    suppressed: AtomicU64,

    /// Lines written to a file sink
    file_writes: AtomicU64,

    /// Sink writes or flushes that failed
    dropped: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            delivered: AtomicU64::new(0),
            suppressed: AtomicU64::new(0),
            file_writes: AtomicU64::new(0),
            dropped: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn delivered_count(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed_count(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn file_write_count(&self) -> u64 {
        self.file_writes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.delivered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.suppressed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_file_write(&self) -> u64 {
        self.file_writes.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.dropped.fetch_add(1, Ordering::Relaxed)
    }

    /// Failed writes as a percentage (0.0 - 100.0) of attempted writes.
    ///
    /// Returns 0.0 if nothing was written yet.
    pub fn drop_rate(&self) -> f64 {
        let dropped = self.dropped_count();
        let attempted = self.delivered_count() + self.file_write_count() + dropped;
        if attempted == 0 {
            0.0
        } else {
            (dropped as f64 / attempted as f64) * 100.0
        }
    }

    pub fn reset(&self) {
        self.delivered.store(0, Ordering::Relaxed);
        self.suppressed.store(0, Ordering::Relaxed);
        self.file_writes.store(0, Ordering::Relaxed);
        self.dropped.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}
