//! # vigil-watchdog
//!
//! Liveness watchdog for event-loop-style execution contexts.
//!
//! A [`Watchdog`] owns a dedicated monitor thread that probes the owner
//! context once per configured window by posting a reset callback onto it.
//! Servicing the callback proves the owner is still draining its queue. Two
//! consecutive windows without a serviced reset confirm a hang, and the
//! watchdog terminates the process immediately rather than letting it idle
//! in a frozen state.
//!
//! ## Guarantees
//!
//! - **Bounded detection latency**: a hung owner is terminated within
//!   `2 * timeout` of its last serviced reset.
//! - **No false positives from one-off jitter**: a single missed window is
//!   tolerated.
//! - **Race-free escalation**: the unresponsive flag is flipped with an
//!   atomic test-and-set, so a timeout observation and a reset never
//!   interleave into an inconsistent state.
//! - **Synchronous teardown**: dropping the watchdog joins the monitor
//!   thread before returning; callbacks still queued on the owner context
//!   degrade to no-ops through a weak reference.
//!
//! ## Architecture
//!
//! - [`watchdog`] - The monitor thread, its state machine, and teardown
//! - [`executor`] - Boundary trait for the monitored execution context
//! - [`config`] - Watchdog configuration and builder
//! - [`escalation`] - The process-termination path and its test hook
//! - [`stats`] - Activity counters for diagnostics
//! - [`error`] - Construction error types
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use vigil_test_helpers::ManualExecutor;
//! use vigil_watchdog::prelude::*;
//!
//! let owner = Arc::new(ManualExecutor::new());
//! let config = WatchdogConfig::builder()
//!     .timeout(Duration::from_millis(250))
//!     .build()
//!     .expect("valid config");
//! let watchdog = Watchdog::spawn(config, owner.clone()).expect("monitor thread spawns");
//!
//! // The owner context proves liveness by servicing posted resets.
//! owner.run_pending();
//! assert!(!watchdog.is_unresponsive());
//!
//! // Dropping joins the monitor thread before returning.
//! drop(watchdog);
//! ```

#![deny(
    unsafe_op_in_unsafe_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::panic,
    missing_docs,
    missing_debug_implementations
)]
#![warn(clippy::pedantic)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod error;
pub mod escalation;
pub mod executor;
pub mod stats;
pub mod watchdog;

pub mod prelude;

pub use config::{WatchdogConfig, WatchdogConfigBuilder};
pub use error::{WatchdogError, WatchdogResult};
pub use escalation::FatalHook;
pub use executor::{ResetCallback, ResetExecutor};
pub use stats::WatchdogStats;
pub use watchdog::Watchdog;
