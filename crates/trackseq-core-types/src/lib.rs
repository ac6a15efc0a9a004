//! Core types shared across trackseq facilities
//!
//! This crate provides the vocabulary used by both the tracked sequence
//! and the logging facility:
//!
//! - **Field paths**: `FieldPath`, the location of a field in its document
//! - **Schema constants**: Canonical field keys and event names

pub mod path;
pub mod schema;

pub use path::FieldPath;
