//! Configuration for the liveness watchdog.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{WatchdogError, WatchdogResult};

/// Default monitoring window.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Default monitor thread name.
const DEFAULT_THREAD_NAME: &str = "vigil-monitor";

/// Watchdog configuration.
///
/// The `timeout` is the maximum silent interval tolerated per window; the
/// worst-case hang-to-termination latency is `2 * timeout` (one tolerated
/// window plus the confirming one).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchdogConfig {
    /// Monitoring window duration. Must be strictly positive.
    pub timeout: Duration,
    /// Name given to the monitor thread.
    pub thread_name: String,
}

impl Default for WatchdogConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            thread_name: DEFAULT_THREAD_NAME.to_string(),
        }
    }
}

impl WatchdogConfig {
    /// Create a configuration with the given monitoring window.
    ///
    /// # Errors
    ///
    /// Returns an error if `timeout` is zero.
    pub fn new(timeout: Duration) -> WatchdogResult<Self> {
        let config = Self {
            timeout,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> WatchdogResult<()> {
        if self.timeout.is_zero() {
            return Err(WatchdogError::invalid_configuration(
                "timeout must be greater than 0",
            ));
        }
        if self.thread_name.is_empty() {
            return Err(WatchdogError::invalid_configuration(
                "thread_name must not be empty",
            ));
        }
        Ok(())
    }

    /// Create a configuration builder.
    #[must_use]
    pub fn builder() -> WatchdogConfigBuilder {
        WatchdogConfigBuilder::default()
    }
}

/// Builder for `WatchdogConfig`.
#[derive(Debug, Default)]
pub struct WatchdogConfigBuilder {
    config: WatchdogConfig,
}

impl WatchdogConfigBuilder {
    /// Set the monitoring window duration.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the monitor thread name.
    #[must_use]
    pub fn thread_name(mut self, name: impl Into<String>) -> Self {
        self.config.thread_name = name.into();
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> WatchdogResult<WatchdogConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
