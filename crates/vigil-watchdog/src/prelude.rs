//! Prelude for vigil-watchdog.
//!
//! This module re-exports the most commonly used types for convenient
//! importing.
//!
//! # Example
//!
//! ```rust
//! use vigil_watchdog::prelude::*;
//!
//! let config = WatchdogConfig::default();
//! assert!(config.validate().is_ok());
//! ```

pub use crate::config::{WatchdogConfig, WatchdogConfigBuilder};
pub use crate::error::{WatchdogError, WatchdogResult};
pub use crate::escalation::FatalHook;
pub use crate::executor::{ResetCallback, ResetExecutor};
pub use crate::stats::WatchdogStats;
pub use crate::watchdog::Watchdog;
