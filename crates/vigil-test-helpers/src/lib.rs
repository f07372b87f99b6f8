//! Shared test utilities for Vigil.
//!
//! This crate provides mock owner execution contexts for exercising the
//! watchdog without a real event loop.
//!
//! # Modules
//!
//! - [`mock`] - Mock `ResetExecutor` implementations
//! - [`prelude`] - Convenience re-exports
//!
//! # Usage
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! vigil-test-helpers = { path = "crates/vigil-test-helpers" }
//! ```
//!
//! Then import the prelude:
//!
//! ```rust,ignore
//! use vigil_test_helpers::prelude::*;
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod mock;
pub mod prelude;

pub use mock::ManualExecutor;
