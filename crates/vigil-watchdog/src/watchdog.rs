//! Core liveness watchdog.
//!
//! This module provides the [`Watchdog`] struct: a background monitor
//! thread that probes the owner execution context once per window and
//! terminates the process after two consecutive windows elapse without a
//! probe being serviced.
//!
//! A single missed window is tolerated (transient scheduling jitter); the
//! second consecutive miss proves the owner context is no longer servicing
//! its queue at all, which is the operational definition of "hung". The
//! worst-case hang-to-termination latency is therefore `2 * timeout`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};
use tracing::{debug, error, warn};

use crate::config::WatchdogConfig;
use crate::error::WatchdogResult;
use crate::escalation::{FatalAction, FatalHook};
use crate::executor::{ResetCallback, ResetExecutor};
use crate::stats::{StatsCounters, WatchdogStats};

/// State shared between the owner thread and the monitor thread.
///
/// `done` is mutated only by the owner (on teardown) and read by the
/// monitor; `unresponsive` is flipped by both, but only through atomic
/// operations and never under the `done` mutex.
struct MonitorShared {
    done: Mutex<bool>,
    done_changed: Condvar,
    unresponsive: AtomicBool,
    counters: StatsCounters,
}

impl MonitorShared {
    fn new() -> Self {
        Self {
            done: Mutex::new(false),
            done_changed: Condvar::new(),
            unresponsive: AtomicBool::new(false),
            counters: StatsCounters::new(),
        }
    }

    /// Block for up to `timeout`, waking early on shutdown.
    ///
    /// Returns `true` once `done` is set. The predicate is re-checked on
    /// every wake against an absolute deadline: `parking_lot` condvars are
    /// subject to spurious wakeups.
    fn wait_for_done(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut done = self.done.lock();
        while !*done {
            if self.done_changed.wait_until(&mut done, deadline).timed_out() {
                return *done;
            }
        }
        true
    }

    /// Signal shutdown and wake the monitor thread.
    fn set_done(&self) {
        let mut done = self.done.lock();
        *done = true;
        self.done_changed.notify_all();
    }

    fn is_done(&self) -> bool {
        *self.done.lock()
    }

    /// Clear the unresponsive flag.
    ///
    /// Only ever invoked from a reset callback executing on the owner
    /// context; running at all is the proof of liveness.
    fn acknowledge(&self) {
        self.unresponsive.store(false, Ordering::Release);
        self.counters.record_reset_serviced();
    }
}

/// Liveness watchdog for an owner execution context.
///
/// Construction spawns the monitor thread; dropping the watchdog signals
/// shutdown and joins the monitor thread before returning, so no callback
/// can be scheduled against the owner context after the drop completes.
/// Callbacks already queued on the owner context hold only a weak reference
/// to the shared state and degrade to no-ops once the watchdog is gone.
pub struct Watchdog {
    shared: Arc<MonitorShared>,
    config: WatchdogConfig,
    monitor: Option<JoinHandle<()>>,
}

impl Watchdog {
    /// Start monitoring the owner context reachable through `executor`.
    ///
    /// Returns immediately; the monitor thread runs until the watchdog is
    /// dropped. Two consecutive expired windows without a serviced reset
    /// terminate the process.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the monitor
    /// thread cannot be spawned.
    pub fn spawn(config: WatchdogConfig, executor: Arc<dyn ResetExecutor>) -> WatchdogResult<Self> {
        Self::spawn_inner(config, executor, FatalAction::Terminate)
    }

    /// Start monitoring with the given window duration and default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `timeout` is zero or the monitor thread cannot
    /// be spawned.
    pub fn with_timeout(
        timeout: Duration,
        executor: Arc<dyn ResetExecutor>,
    ) -> WatchdogResult<Self> {
        Self::spawn(WatchdogConfig::new(timeout)?, executor)
    }

    /// Start monitoring with `hook` in place of process termination.
    ///
    /// For testing escalation paths: when a hang is confirmed the hook runs
    /// and the monitor thread exits instead of aborting the process.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the monitor
    /// thread cannot be spawned.
    pub fn spawn_with_fatal_hook(
        config: WatchdogConfig,
        executor: Arc<dyn ResetExecutor>,
        hook: FatalHook,
    ) -> WatchdogResult<Self> {
        Self::spawn_inner(config, executor, FatalAction::Hook(hook))
    }

    fn spawn_inner(
        config: WatchdogConfig,
        executor: Arc<dyn ResetExecutor>,
        fatal: FatalAction,
    ) -> WatchdogResult<Self> {
        config.validate()?;

        let shared = Arc::new(MonitorShared::new());
        let monitor_shared = Arc::clone(&shared);
        let timeout = config.timeout;

        let monitor = thread::Builder::new()
            .name(config.thread_name.clone())
            .spawn(move || Self::monitor_main(monitor_shared, executor, timeout, fatal))?;

        Ok(Self {
            shared,
            config,
            monitor: Some(monitor),
        })
    }

    /// The monitoring window duration.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Whether a window has expired without its reset being serviced yet.
    #[must_use]
    pub fn is_unresponsive(&self) -> bool {
        self.shared.unresponsive.load(Ordering::Acquire)
    }

    /// Snapshot of the activity counters.
    #[must_use]
    pub fn stats(&self) -> WatchdogStats {
        self.shared.counters.snapshot()
    }

    /// Monitor loop: one iteration per window.
    fn monitor_main(
        shared: Arc<MonitorShared>,
        executor: Arc<dyn ResetExecutor>,
        timeout: Duration,
        fatal: FatalAction,
    ) {
        let timeout_ms = timeout.as_millis() as u64;
        debug!(timeout_ms, "watchdog monitor started");

        loop {
            if shared.wait_for_done(timeout) {
                break;
            }

            shared.counters.record_window_expired();

            if shared.unresponsive.swap(true, Ordering::AcqRel) {
                // Destruction may have begun between the wait and the flag
                // flip; never escalate once shutdown is signalled.
                if shared.is_done() {
                    break;
                }
                error!(
                    timeout_ms,
                    "owner context missed two consecutive liveness windows; terminating process"
                );
                fatal.execute();
                return;
            }

            debug!("liveness window expired; posting reset probe");
            let state = Arc::downgrade(&shared);
            let callback: ResetCallback = Box::new(move || {
                if let Some(state) = Weak::upgrade(&state) {
                    state.acknowledge();
                }
            });

            if executor.post(callback) {
                shared.counters.record_reset_posted();
            } else {
                shared.counters.record_post_rejected();
                warn!("owner context rejected reset probe; escalating on next expiry");
            }
        }

        debug!("watchdog monitor exiting after shutdown signal");
    }
}

impl Drop for Watchdog {
    fn drop(&mut self) {
        self.shared.set_done();

        if let Some(monitor) = self.monitor.take() {
            if monitor.join().is_err() {
                error!("watchdog monitor thread panicked");
            }
        }
    }
}

impl std::fmt::Debug for Watchdog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Watchdog")
            .field("config", &self.config)
            .field("unresponsive", &self.is_unresponsive())
            .finish()
    }
}
