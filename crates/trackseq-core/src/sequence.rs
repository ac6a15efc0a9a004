//! Mutation-tracking sequence for one array field of a document
//!
//! A `TrackedSequence` keeps a local, already-cast copy of the field and
//! records every mutation as an `Operation` so the persistence layer can
//! replay it against the remote store instead of rewriting the whole field.
//!
//! Every casting mutation follows the same order: cast all arguments
//! (all-or-nothing), update local storage, append to the operation log,
//! notify the owning document.
//!
//! ## Value-based removal
//!
//! `remove`, `pull` and `pull_all` only record the removal. Matching
//! elements stay in local storage until the field is reloaded from the
//! store; the local length never changes on removal by value.
//!
//! ## Concurrency
//!
//! The sequence is not synchronized. Reading `do_atomics`/draining the log
//! and mutating must not interleave for the same instance; the owning
//! document is responsible for any locking.

use std::ops::Deref;
use std::sync::{Arc, Weak};

use serde_json::Value;
use trackseq_core_types::FieldPath;

use crate::caster::Caster;
use crate::document::{CasterSource, Document};
use crate::errors::{Result, SequenceError};
use crate::model::{Operation, OperationLog};

/// Ordered container that records its own mutation history
pub struct TrackedSequence<T> {
    items: Vec<T>,
    path: FieldPath,
    /// Non-owning; the sequence never keeps its document alive
    owner: Option<Weak<dyn Document>>,
    caster: Option<Arc<dyn Caster<T>>>,
    log: OperationLog<T>,
}

impl<T: Clone> TrackedSequence<T> {
    /// Create a sequence bound to `path`, optionally owned by a document
    ///
    /// `initial` is stored as-is and must already be cast (e.g. values
    /// loaded from the store). With an owner, the caster for `path` is
    /// resolved once, here. Without an owner the document type cannot be
    /// inferred from `None`; use [`TrackedSequence::detached`] instead.
    ///
    /// # Errors
    ///
    /// Returns `UnresolvedCaster` if an owner is given but its schema has no
    /// caster for `path`.
    pub fn new<D>(initial: Vec<T>, path: impl Into<FieldPath>, owner: Option<&Arc<D>>) -> Result<Self>
    where
        D: Document + CasterSource<T> + 'static,
    {
        let path = path.into();
        let (owner, caster) = match owner {
            Some(doc) => {
                let caster = doc
                    .resolve_caster(path.as_str())
                    .ok_or_else(|| SequenceError::UnresolvedCaster { path: path.clone() })?;
                let weak = Arc::downgrade(doc);
                let weak: Weak<dyn Document> = weak;
                (Some(weak), Some(caster))
            }
            None => (None, None),
        };

        tracing::debug!(
            component = module_path!(),
            op = "construct",
            path = %path,
            len = initial.len(),
            owned = owner.is_some(),
        );

        Ok(Self {
            items: initial,
            path,
            owner,
            caster,
            log: OperationLog::new(),
        })
    }

    /// Create an owner-less value holder
    ///
    /// Used to rebuild a sequence from a `snapshot` or from stored values.
    /// Casting mutations on it fail with `CasterUnavailable`; `pop` and
    /// `shift` still work and are still recorded.
    pub fn detached(values: Vec<T>, path: impl Into<FieldPath>) -> Self {
        Self {
            items: values,
            path: path.into(),
            owner: None,
            caster: None,
            log: OperationLog::new(),
        }
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Whether the sequence was constructed with an owning document
    pub fn has_owner(&self) -> bool {
        self.owner.is_some()
    }

    pub fn has_caster(&self) -> bool {
        self.caster.is_some()
    }

    /// Recorded operations not yet drained, in order
    pub fn operations(&self) -> &[Operation<T>] {
        self.log.as_slice()
    }

    /// True iff there are recorded operations to replay
    pub fn do_atomics(&self) -> bool {
        !self.log.is_empty()
    }

    /// Take the recorded operations, leaving the log empty
    ///
    /// Called by the persistence layer once the operations have been
    /// replayed; `do_atomics` is false afterwards.
    pub fn drain(&mut self) -> Vec<Operation<T>> {
        let ops = self.log.drain();
        tracing::debug!(
            component = module_path!(),
            op = "drain",
            path = %self.path,
            op_count = ops.len(),
        );
        ops
    }

    /// Drop the oldest `count` operations after the store confirmed them
    ///
    /// Operations recorded after the replayed batch stay in the log for the
    /// next cycle.
    pub fn drain_replayed(&mut self, count: usize) -> Vec<Operation<T>> {
        let ops = self.log.drain_front(count);
        tracing::debug!(
            component = module_path!(),
            op = "drain_replayed",
            path = %self.path,
            op_count = ops.len(),
            log_len = self.log.len(),
        );
        ops
    }

    /// Plain copy of the stored elements for encoding or a full replace
    pub fn snapshot(&self) -> Vec<T> {
        self.items.clone()
    }

    /// Cast one raw value through the resolved caster
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the caster rejects the value, or
    /// `CasterUnavailable` if the sequence has no caster.
    pub fn cast(&self, raw: &Value) -> Result<T> {
        let caster = self.caster()?;
        let owner = self.upgrade_owner();
        caster
            .cast(raw, owner.as_deref())
            .map_err(|source| SequenceError::Validation {
                path: self.path.clone(),
                position: 0,
                source,
            })
    }

    /// Flag this field as modified on the owning document
    ///
    /// Safe to call any number of times. Does nothing without an owner.
    pub fn mark_modified(&self) {
        if self.owner.is_none() {
            return;
        }
        match self.upgrade_owner() {
            Some(doc) => doc.mark_modified(self.path.as_str()),
            None => tracing::debug!(
                component = module_path!(),
                op = "mark_modified",
                path = %self.path,
                "owner dropped; modification not reported"
            ),
        }
    }

    /// Append `op` to the log and mark the field modified
    ///
    /// Every operation-recording mutation goes through here.
    pub fn register_operation(&mut self, op: Operation<T>) {
        tracing::debug!(
            component = module_path!(),
            op = "register_operation",
            path = %self.path,
            opcode = op.opcode().as_str(),
            log_len = self.log.len() + 1,
        );
        self.log.append(op);
        self.mark_modified();
    }

    /// Cast and append values, recording one `Push` or `PushAll`
    ///
    /// Exactly one value records `Push(e)`; any other count records
    /// `PushAll` with the cast values in call order. Returns the new length.
    ///
    /// # Errors
    ///
    /// Returns the first cast failure; nothing is appended or recorded.
    pub fn push(&mut self, values: &[Value]) -> Result<usize> {
        let mut cast = self.cast_all(values)?;
        self.items.extend(cast.iter().cloned());
        let op = if cast.len() == 1 {
            Operation::Push(cast.remove(0))
        } else {
            Operation::PushAll(cast)
        };
        self.register_operation(op);
        self.trace_len("push");
        Ok(self.items.len())
    }

    /// Cast and append values without recording an operation
    ///
    /// Only marks the field modified. Meant for bulk local population that
    /// will be saved by replacing the whole field. Mixing it with recorded
    /// mutations in the same persistence cycle leaves the choice between
    /// replay and replace to the persistence layer.
    ///
    /// # Errors
    ///
    /// Returns the first cast failure; nothing is appended.
    pub fn non_atomic_push(&mut self, values: &[Value]) -> Result<usize> {
        let cast = self.cast_all(values)?;
        self.items.extend(cast);
        self.mark_modified();
        self.trace_len("non_atomic_push");
        Ok(self.items.len())
    }

    /// Cast and append a list, always recording a single `PushAll`
    ///
    /// The recorded payload is read back from storage, so it is exactly
    /// what was stored.
    ///
    /// # Errors
    ///
    /// Returns the first cast failure; nothing is appended or recorded.
    pub fn push_all(&mut self, values: &[Value]) -> Result<usize> {
        let cast = self.cast_all(values)?;
        let start = self.items.len();
        self.items.extend(cast);
        let appended = self.items[start..].to_vec();
        self.register_operation(Operation::PushAll(appended));
        self.trace_len("push_all");
        Ok(self.items.len())
    }

    /// Remove and return the last element, recording `Pop`
    ///
    /// # Errors
    ///
    /// Returns `EmptySequence` if there is nothing to pop.
    pub fn pop(&mut self) -> Result<T> {
        let value = self.items.pop().ok_or_else(|| SequenceError::EmptySequence {
            path: self.path.clone(),
            op: "pop",
        })?;
        self.register_operation(Operation::Pop);
        self.trace_len("pop");
        Ok(value)
    }

    /// Remove and return the first element, recording `Shift`
    ///
    /// # Errors
    ///
    /// Returns `EmptySequence` if there is nothing to shift.
    pub fn shift(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(SequenceError::EmptySequence {
                path: self.path.clone(),
                op: "shift",
            });
        }
        let value = self.items.remove(0);
        self.register_operation(Operation::Shift);
        self.trace_len("shift");
        Ok(value)
    }

    /// Record removal by value of every argument
    ///
    /// One cast value records `Pull`, several record `PullAll`, none records
    /// nothing. Local storage is left untouched. Returns the cast values.
    ///
    /// # Errors
    ///
    /// Returns the first cast failure; nothing is recorded.
    pub fn remove(&mut self, values: &[Value]) -> Result<Vec<T>> {
        let cast = self.cast_all(values)?;
        if cast.len() == 1 {
            self.register_operation(Operation::Pull(cast[0].clone()));
        } else {
            self.record_pull_all(cast.clone());
        }
        self.trace_len("remove");
        Ok(cast)
    }

    /// Record removal by value of one element
    ///
    /// # Errors
    ///
    /// Returns `Validation` or `CasterUnavailable` if the value cannot be
    /// cast; nothing is recorded.
    pub fn pull(&mut self, value: &Value) -> Result<T> {
        let cast = self.cast(value)?;
        self.register_operation(Operation::Pull(cast.clone()));
        self.trace_len("pull");
        Ok(cast)
    }

    /// Record removal by value of several elements
    ///
    /// An empty list is a no-op: nothing is recorded and the document is
    /// not notified.
    ///
    /// # Errors
    ///
    /// Returns the first cast failure; nothing is recorded.
    pub fn pull_all(&mut self, values: &[Value]) -> Result<Vec<T>> {
        let cast = self.cast_all(values)?;
        self.record_pull_all(cast.clone());
        self.trace_len("pull_all");
        Ok(cast)
    }

    fn record_pull_all(&mut self, values: Vec<T>) {
        if values.is_empty() {
            return;
        }
        self.register_operation(Operation::PullAll(values));
    }

    fn caster(&self) -> Result<&Arc<dyn Caster<T>>> {
        self.caster
            .as_ref()
            .ok_or_else(|| SequenceError::CasterUnavailable {
                path: self.path.clone(),
            })
    }

    fn upgrade_owner(&self) -> Option<Arc<dyn Document>> {
        self.owner.as_ref().and_then(Weak::upgrade)
    }

    /// Cast every value in order; the first rejection aborts the batch
    fn cast_all(&self, values: &[Value]) -> Result<Vec<T>> {
        let caster = self.caster()?;
        let owner = self.upgrade_owner();
        values
            .iter()
            .enumerate()
            .map(|(position, raw)| {
                caster
                    .cast(raw, owner.as_deref())
                    .map_err(|source| SequenceError::Validation {
                        path: self.path.clone(),
                        position,
                        source,
                    })
            })
            .collect()
    }

    fn trace_len(&self, op: &'static str) {
        tracing::debug!(
            component = module_path!(),
            op = op,
            path = %self.path,
            len = self.items.len(),
            log_len = self.log.len(),
        );
    }
}

impl<T> Deref for TrackedSequence<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a TrackedSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for TrackedSequence<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackedSequence")
            .field("path", &self.path)
            .field("items", &self.items)
            .field("log", &self.log)
            .field("has_owner", &self.owner.is_some())
            .field("has_caster", &self.caster.is_some())
            .finish()
    }
}
