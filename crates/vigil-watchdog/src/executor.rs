//! Boundary with the owner execution context.
//!
//! The watchdog never runs owner code itself; it only schedules reset
//! callbacks through this trait and observes whether they were serviced.
//! A context that keeps servicing its queue keeps the process alive; one
//! that stops — or whose handle has gone stale — is indistinguishable from
//! a hung one and is treated as such.

/// A zero-argument callback queued for execution on the owner context.
pub type ResetCallback = Box<dyn FnOnce() + Send>;

/// Capability to schedule work on the monitored execution context.
///
/// Implementations wrap an event loop, task runner, or similar
/// single-threaded context. `post` must be safe to call from the watchdog's
/// monitor thread and must not block on owner-context work.
pub trait ResetExecutor: Send + Sync {
    /// Queue `callback` for later execution on the owner's own context.
    ///
    /// Returns `false` if the context can no longer accept work (torn down
    /// or otherwise unreachable). The watchdog drops the callback in that
    /// case; the unserviced window then escalates on the next expiry.
    fn post(&self, callback: ResetCallback) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_bounds() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ResetExecutor>();
    }

    #[test]
    fn test_callback_is_send() {
        fn assert_send<T: Send>(_value: T) {}
        let callback: ResetCallback = Box::new(|| {});
        assert_send(callback);
    }
}
