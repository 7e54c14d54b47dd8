//! Process-wide call counters and latency stats.
//!
//! All counters are atomic and use `Relaxed` ordering — these are advisory
//! observability values, not synchronization primitives, and no cross-counter
//! atomicity is promised. Safe for concurrent updates from arbitrarily many
//! request handlers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;

/// Cumulative latency stats for one operation, in atomics.
///
/// Tracks count, total, min, and max; durations are recorded in
/// microseconds to keep sub-millisecond resolution.
#[derive(Debug)]
pub struct LatencyStats {
    count: AtomicU64,
    total_us: AtomicU64,
    /// Starts at `u64::MAX` so `fetch_min` works without a first-sample case.
    min_us: AtomicU64,
    max_us: AtomicU64,
}

impl Default for LatencyStats {
    fn default() -> Self {
        Self {
            count: AtomicU64::new(0),
            total_us: AtomicU64::new(0),
            min_us: AtomicU64::new(u64::MAX),
            max_us: AtomicU64::new(0),
        }
    }
}

impl LatencyStats {
    /// Records one observed duration.
    pub fn record(&self, elapsed: Duration) {
        let us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        self.count.fetch_add(1, Ordering::Relaxed);
        self.total_us.fetch_add(us, Ordering::Relaxed);
        self.max_us.fetch_max(us, Ordering::Relaxed);
        self.min_us.fetch_min(us, Ordering::Relaxed);
    }

    /// Returns a point-in-time snapshot in milliseconds.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn snapshot(&self) -> LatencySnapshot {
        let count = self.count.load(Ordering::Relaxed);
        let total_us = self.total_us.load(Ordering::Relaxed);
        let min_us = if count == 0 {
            0
        } else {
            self.min_us.load(Ordering::Relaxed)
        };
        let max_us = self.max_us.load(Ordering::Relaxed);
        let mean_ms = if count == 0 {
            0.0
        } else {
            total_us as f64 / count as f64 / 1_000.0
        };
        LatencySnapshot {
            count,
            total_ms: total_us as f64 / 1_000.0,
            min_ms: min_us as f64 / 1_000.0,
            max_ms: max_us as f64 / 1_000.0,
            mean_ms,
        }
    }
}

/// Point-in-time view of a [`LatencyStats`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatencySnapshot {
    /// Number of recorded samples.
    pub count: u64,
    /// Sum of all samples in milliseconds.
    pub total_ms: f64,
    /// Smallest sample in milliseconds (0 if no samples).
    pub min_ms: f64,
    /// Largest sample in milliseconds.
    pub max_ms: f64,
    /// Mean sample in milliseconds (0 if no samples).
    pub mean_ms: f64,
}

/// Call counters and latency stats for the management API, accumulated
/// process-wide since startup. Purely observational; never influences
/// request outcomes.
#[derive(Debug, Default)]
pub struct ResourceMetrics {
    create_call: AtomicU64,
    get_call: AtomicU64,
    get_all_call: AtomicU64,
    delete_call: AtomicU64,
    update_call: AtomicU64,
    call_error: AtomicU64,
    create_call_latency: LatencyStats,
    delete_call_latency: LatencyStats,
}

impl ResourceMetrics {
    /// Creates a metrics instance with all counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a create call.
    pub fn record_create_call(&self) {
        self.create_call.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts a get call.
    pub fn record_get_call(&self) {
        self.get_call.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts a get-all call.
    pub fn record_get_all_call(&self) {
        self.get_all_call.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts a delete call.
    pub fn record_delete_call(&self) {
        self.delete_call.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts an update call (rejected, but still counted).
    pub fn record_update_call(&self) {
        self.update_call.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts one failed call, whatever the operation.
    pub fn record_error(&self) {
        self.call_error.fetch_add(1, Ordering::Relaxed);
    }

    /// Records the latency of a successful create (initialize + persist).
    pub fn record_create_latency(&self, elapsed: Duration) {
        self.create_call_latency.record(elapsed);
    }

    /// Records the latency of a successful delete (store call only).
    pub fn record_delete_latency(&self, elapsed: Duration) {
        self.delete_call_latency.record(elapsed);
    }

    /// Returns the number of errored calls so far.
    #[must_use]
    pub fn error_count(&self) -> u64 {
        self.call_error.load(Ordering::Relaxed)
    }

    /// Takes a snapshot of all counters and latency stats.
    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            create_call: self.create_call.load(Ordering::Relaxed),
            get_call: self.get_call.load(Ordering::Relaxed),
            get_all_call: self.get_all_call.load(Ordering::Relaxed),
            delete_call: self.delete_call.load(Ordering::Relaxed),
            update_call: self.update_call.load(Ordering::Relaxed),
            call_error: self.call_error.load(Ordering::Relaxed),
            create_call_latency: self.create_call_latency.snapshot(),
            delete_call_latency: self.delete_call_latency.snapshot(),
        }
    }
}

/// Point-in-time snapshot of [`ResourceMetrics`].
///
/// Serialized field names match the metric registry names the API has
/// always exposed (`createCall`, `callError`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    /// Create calls since startup.
    pub create_call: u64,
    /// Get calls since startup.
    pub get_call: u64,
    /// Get-all calls since startup.
    pub get_all_call: u64,
    /// Delete calls since startup.
    pub delete_call: u64,
    /// Update calls since startup (all rejected).
    pub update_call: u64,
    /// Failed calls since startup, across all operations.
    pub call_error: u64,
    /// Latency of successful creates.
    pub create_call_latency: LatencySnapshot,
    /// Latency of successful deletes.
    pub delete_call_latency: LatencySnapshot,
}
