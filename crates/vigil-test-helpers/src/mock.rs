//! Mock owner execution contexts.
//!
//! The watchdog only ever interacts with its owner through
//! [`ResetExecutor::post`]; these mocks stand in for the owner's event loop
//! so tests can control exactly when (and whether) posted work is serviced.

use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use vigil_watchdog::{ResetCallback, ResetExecutor};

/// Owner context driven by an explicit pump.
///
/// Posted callbacks queue up until [`run_pending`](Self::run_pending) is
/// called, which models an event loop servicing its queue. Calling
/// [`close`](Self::close) makes the executor reject further posts, which
/// models an owner context that has been torn down or is unreachable.
pub struct ManualExecutor {
    queue: Mutex<VecDeque<ResetCallback>>,
    closed: AtomicBool,
}

impl ManualExecutor {
    /// Create an open executor with an empty queue.
    pub fn new() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            closed: AtomicBool::new(false),
        }
    }

    /// Create an executor that rejects every post.
    pub fn closed() -> Self {
        let executor = Self::new();
        executor.close();
        executor
    }

    /// Run every callback queued so far, in posting order.
    ///
    /// Returns the number of callbacks serviced. Callbacks run outside the
    /// queue lock, so they may post again without deadlocking.
    pub fn run_pending(&self) -> usize {
        let drained: Vec<ResetCallback> = {
            let mut queue = self.queue.lock();
            queue.drain(..).collect()
        };
        let count = drained.len();
        for callback in drained {
            callback();
        }
        count
    }

    /// Number of callbacks waiting to be serviced.
    pub fn pending(&self) -> usize {
        self.queue.lock().len()
    }

    /// Reject all future posts. Already-queued callbacks stay queued.
    pub fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }

    /// Whether the executor rejects posts.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

impl Default for ManualExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl ResetExecutor for ManualExecutor {
    fn post(&self, callback: ResetCallback) -> bool {
        if self.is_closed() {
            return false;
        }
        self.queue.lock().push_back(callback);
        true
    }
}

impl fmt::Debug for ManualExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualExecutor")
            .field("pending", &self.pending())
            .field("closed", &self.is_closed())
            .finish()
    }
}
