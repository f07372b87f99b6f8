//! Prelude for vigil-test-helpers.
//!
//! This module re-exports the most commonly used types for convenient
//! importing.

pub use crate::mock::ManualExecutor;
