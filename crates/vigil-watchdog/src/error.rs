//! Error types for watchdog construction.
//!
//! Hang detection itself never surfaces through these types: a confirmed
//! hang ends the process (see [`crate::escalation`]) rather than returning
//! a value.

use thiserror::Error;

/// Errors that can occur while constructing a watchdog.
#[derive(Debug, Error)]
pub enum WatchdogError {
    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The monitor thread could not be spawned.
    ///
    /// No partially-armed watchdog is left behind: construction fails
    /// before any state is shared.
    #[error("Failed to spawn monitor thread: {0}")]
    MonitorThreadSpawn(#[from] std::io::Error),
}

impl WatchdogError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }
}

/// A specialized `Result` type for watchdog operations.
pub type WatchdogResult<T> = std::result::Result<T, WatchdogError>;
