//! Structured logging facility for trackseq
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init(profile)`
//! - Profile selection from the environment (`TRACKSEQ_LOG_PROFILE`)
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use trackseq_core::logging_facility::{init, Profile};
//!
//! init(Profile::from_env());
//! ```
//!
//! Mutations on a sequence only emit `debug` events. Lifecycle start/end
//! events belong to the persistence planner, which is the boundary where a
//! field's recorded operations leave the sequence.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile, PROFILE_ENV_VAR};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
