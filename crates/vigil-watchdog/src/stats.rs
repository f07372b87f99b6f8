//! Monitoring counters for diagnostics.
//!
//! Counters are observational only; the liveness protocol never reads them.

use std::sync::atomic::{AtomicU64, Ordering};

/// Internal atomic counters shared with the monitor thread.
#[derive(Debug, Default)]
pub(crate) struct StatsCounters {
    windows_expired: AtomicU64,
    resets_posted: AtomicU64,
    resets_serviced: AtomicU64,
    posts_rejected: AtomicU64,
}

impl StatsCounters {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_window_expired(&self) {
        self.windows_expired.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_reset_posted(&self) {
        self.resets_posted.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_reset_serviced(&self) {
        self.resets_serviced.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_post_rejected(&self) {
        self.posts_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> WatchdogStats {
        WatchdogStats {
            windows_expired: self.windows_expired.load(Ordering::Relaxed),
            resets_posted: self.resets_posted.load(Ordering::Relaxed),
            resets_serviced: self.resets_serviced.load(Ordering::Relaxed),
            posts_rejected: self.posts_rejected.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of watchdog activity counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WatchdogStats {
    /// Number of monitoring windows that expired.
    pub windows_expired: u64,
    /// Number of reset callbacks posted to the owner context.
    pub resets_posted: u64,
    /// Number of reset callbacks the owner context actually serviced.
    pub resets_serviced: u64,
    /// Number of reset posts the owner context rejected.
    pub posts_rejected: u64,
}

impl WatchdogStats {
    /// Fraction of posted resets the owner context serviced (0.0 to 1.0).
    ///
    /// Returns 1.0 when nothing has been posted yet.
    #[allow(clippy::cast_precision_loss, reason = "diagnostic ratio only")]
    #[must_use]
    pub fn service_rate(&self) -> f64 {
        if self.resets_posted == 0 {
            1.0
        } else {
            self.resets_serviced as f64 / self.resets_posted as f64
        }
    }
}
