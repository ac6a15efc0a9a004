//! Replay-or-replace planning for one tracked field
//!
//! When a document is saved, each modified array field is written either by
//! replaying its recorded operations or by replacing the whole field with
//! its current contents. The rule is the one the remote save path applies:
//! a non-empty operation log wins.
//!
//! Planning never touches the log. Once the store confirms the write, the
//! caller hands the plan back through [`FieldUpdate::commit`], which drops
//! exactly the replayed operations. A failed write leaves the sequence as it
//! was, so the next plan replays the same operations again.
//!
//! ## Logging Ownership
//!
//! This module owns lifecycle logging for persistence planning:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! The sequence itself uses only `tracing::debug!()`.

use serde::Serialize;
use serde_json::{json, Value};
use trackseq_core_types::FieldPath;

use crate::errors::Result;
use crate::model::Operation;
use crate::sequence::TrackedSequence;
use crate::{log_op_end, log_op_error, log_op_start};

/// How a modified field is written back to the store
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate<T> {
    /// Replay the recorded operations, in order
    Atomic {
        path: FieldPath,
        operations: Vec<Operation<T>>,
    },
    /// Overwrite the field with a snapshot
    Replace { path: FieldPath, values: Vec<T> },
}

impl<T> FieldUpdate<T> {
    pub fn path(&self) -> &FieldPath {
        match self {
            FieldUpdate::Atomic { path, .. } | FieldUpdate::Replace { path, .. } => path,
        }
    }

    pub fn is_atomic(&self) -> bool {
        matches!(self, FieldUpdate::Atomic { .. })
    }

    /// Strategy name used in log events
    pub fn strategy(&self) -> &'static str {
        match self {
            FieldUpdate::Atomic { .. } => "atomic",
            FieldUpdate::Replace { .. } => "replace",
        }
    }
}

impl<T: Serialize> FieldUpdate<T> {
    /// Render the plan as partial-update documents
    ///
    /// `Atomic` yields one update per operation; `Replace` yields a single
    /// `$set` of the whole field.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if an element cannot be encoded.
    pub fn to_updates(&self) -> Result<Vec<Value>> {
        log_op_start!("render_updates", path = %self.path(), strategy = self.strategy());
        let start = std::time::Instant::now();

        let rendered = self.render().map_err(|e| {
            log_op_error!(
                "render_updates",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                path = %self.path()
            );
            e
        })?;

        log_op_end!(
            "render_updates",
            duration_ms = start.elapsed().as_millis() as u64,
            path = %self.path(),
            op_count = rendered.len()
        );

        Ok(rendered)
    }

    fn render(&self) -> Result<Vec<Value>> {
        match self {
            FieldUpdate::Atomic { path, operations } => operations
                .iter()
                .map(|op| op.to_update(path.as_str()))
                .collect(),
            FieldUpdate::Replace { path, values } => {
                let values = serde_json::to_value(values)?;
                let path = path.as_str();
                Ok(vec![json!({ "$set": { path: values } })])
            }
        }
    }
}

impl<T: Clone> FieldUpdate<T> {
    /// Confirm a successful write, clearing what this plan replayed
    ///
    /// For `Atomic` the oldest `operations.len()` entries leave the log;
    /// anything recorded after planning stays pending. `Replace` recorded
    /// nothing, so the log is left alone. Returns the number of operations
    /// removed.
    pub fn commit(&self, seq: &mut TrackedSequence<T>) -> usize {
        log_op_start!("commit_field_update", path = %self.path(), strategy = self.strategy());
        let start = std::time::Instant::now();

        let cleared = match self {
            FieldUpdate::Atomic { operations, .. } => {
                seq.drain_replayed(operations.len()).len()
            }
            FieldUpdate::Replace { .. } => 0,
        };

        log_op_end!(
            "commit_field_update",
            duration_ms = start.elapsed().as_millis() as u64,
            path = %self.path(),
            op_count = cleared,
            log_len = seq.operations().len()
        );

        cleared
    }
}

/// Decide how to persist `seq`
///
/// With recorded operations the plan is `Atomic` over a copy of the log;
/// otherwise the current contents become a `Replace`. The sequence is not
/// changed: call [`FieldUpdate::commit`] after the store accepted the write.
/// Elements added with `non_atomic_push` in a cycle that also recorded
/// operations are not part of an `Atomic` plan.
pub fn plan_field_update<T: Clone>(seq: &TrackedSequence<T>) -> FieldUpdate<T> {
    log_op_start!("plan_field_update", path = %seq.path(), len = seq.len());
    let start = std::time::Instant::now();

    let update = if seq.do_atomics() {
        FieldUpdate::Atomic {
            path: seq.path().clone(),
            operations: seq.operations().to_vec(),
        }
    } else {
        FieldUpdate::Replace {
            path: seq.path().clone(),
            values: seq.snapshot(),
        }
    };

    let op_count = match &update {
        FieldUpdate::Atomic { operations, .. } => operations.len(),
        FieldUpdate::Replace { .. } => 0,
    };
    log_op_end!(
        "plan_field_update",
        duration_ms = start.elapsed().as_millis() as u64,
        path = %update.path(),
        strategy = update.strategy(),
        op_count = op_count
    );

    update
}
