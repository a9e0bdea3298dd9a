//! Structured logging facility for deepeq
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - The mismatch trace macro (`log_mismatch!`), one event per detected mismatch
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use deepeq_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```
//!
//! # Logging Macros
//!
//! - `log_op_start!(op, ...)` - Log operation start
//! - `log_op_end!(op, duration_ms = ...)` - Log operation end
//! - `log_op_error!(op, err, duration_ms = ...)` - Log operation error
//! - `log_mismatch!(type_name, path, reason, value_a, value_b)` - Log one mismatch

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{capture_scoped, init_test_capture, CapturedEvent, TestCapture};
