//! trackseq core - mutation-tracking sequences for document fields
//!
//! This crate provides the container used for array fields of persisted
//! documents, including:
//! - `TrackedSequence`, which casts input, keeps a local view and records
//!   each mutation as a replayable `Operation`
//! - The append-only `OperationLog` and the operation wire shape
//! - The `Caster` and `Document` contracts the sequence depends on, with an
//!   in-memory `MemoryDocument`
//! - Replay-or-replace planning for the persistence layer
//!
//! Nothing here performs I/O: the crate produces instructions and local
//! state, and never sends them.

pub mod caster;
pub mod document;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod persist;
pub mod sequence;

// Re-export commonly used types
pub use caster::{Caster, JsonCaster};
pub use document::{CasterSource, Document, MemoryDocument};
pub use errors::{ExError, ExErrorKind, Result, SequenceError, ValidationError};
pub use model::{Opcode, Operation, OperationLog};
pub use persist::{plan_field_update, FieldUpdate};
pub use sequence::TrackedSequence;
pub use trackseq_core_types::FieldPath;
