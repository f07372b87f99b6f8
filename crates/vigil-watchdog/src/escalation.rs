//! Escalation path for confirmed hangs.
//!
//! Termination is deliberately minimal: no allocation, no locks, no unwind.
//! The owner is presumed stuck, so nothing here may depend on the owner
//! making progress or releasing anything.

/// Replacement action for process termination, used by tests that need to
/// observe the escalation decision without ending the test process.
pub type FatalHook = Box<dyn FnOnce() + Send>;

/// What the monitor loop does once a hang is confirmed.
pub(crate) enum FatalAction {
    /// Terminate the process immediately.
    Terminate,
    /// Run a test hook instead; the monitor thread exits afterwards.
    Hook(FatalHook),
}

impl FatalAction {
    /// Execute the action. `Terminate` never returns.
    pub(crate) fn execute(self) {
        match self {
            Self::Terminate => terminate_process(),
            Self::Hook(hook) => hook(),
        }
    }
}

/// End the process immediately and irrecoverably.
///
/// Abort raises `SIGABRT` without unwinding or running exit handlers, which
/// crash reporters capture as a diagnosable fault rather than a silent hang
/// or clean exit.
#[cold]
fn terminate_process() -> ! {
    std::process::abort()
}
