//! Owning document contracts and an in-memory reference document
//!
//! A tracked sequence talks to its document through two narrow traits:
//! `Document` receives dirty-path notifications, and `CasterSource`
//! resolves the element caster for a path from the document's schema.

use std::any::Any;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::caster::Caster;

/// Modification sink of an owning document
///
/// Repeated calls for the same path are expected; deduplication is the
/// document's job.
pub trait Document: Send + Sync {
    /// Flag `path` as needing persistence
    fn mark_modified(&self, path: &str);
}

/// Schema lookup for the caster of the field at a path
pub trait CasterSource<T> {
    /// Resolve the caster for `path`, or `None` if the schema has no field
    /// of element type `T` there
    fn resolve_caster(&self, path: &str) -> Option<Arc<dyn Caster<T>>>;
}

#[derive(Debug, Default)]
struct ModifiedState {
    paths: BTreeSet<String>,
    notifications: u64,
}

/// In-memory document with a per-path caster registry
///
/// Fields of different element types can be registered side by side.
///
/// ```
/// use std::sync::Arc;
/// use trackseq_core::{caster, MemoryDocument, TrackedSequence};
///
/// let doc = Arc::new(MemoryDocument::new().with_caster("tags", caster::json::<i64>()));
/// let mut tags = TrackedSequence::new(vec![1_i64, 2], "tags", Some(&doc)).unwrap();
/// tags.push(&[serde_json::json!(3)]).unwrap();
/// assert!(doc.is_modified("tags"));
/// ```
#[derive(Default)]
pub struct MemoryDocument {
    casters: HashMap<String, Box<dyn Any + Send + Sync>>,
    state: Mutex<ModifiedState>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the caster for the field at `path`
    pub fn with_caster<T: 'static>(
        mut self,
        path: impl Into<String>,
        caster: Arc<dyn Caster<T>>,
    ) -> Self {
        self.casters.insert(path.into(), Box::new(caster));
        self
    }

    pub fn is_modified(&self, path: &str) -> bool {
        self.state.lock().paths.contains(path)
    }

    /// Modified paths in sorted order
    pub fn modified_paths(&self) -> Vec<String> {
        self.state.lock().paths.iter().cloned().collect()
    }

    /// Raw count of `mark_modified` calls, duplicates included
    pub fn notification_count(&self) -> u64 {
        self.state.lock().notifications
    }

    /// Forget all modified paths after a successful save
    pub fn clear_modified(&self) {
        self.state.lock().paths.clear();
    }
}

impl Document for MemoryDocument {
    fn mark_modified(&self, path: &str) {
        let mut state = self.state.lock();
        state.notifications += 1;
        if !state.paths.contains(path) {
            state.paths.insert(path.to_string());
        }
    }
}

impl<T: 'static> CasterSource<T> for MemoryDocument {
    fn resolve_caster(&self, path: &str) -> Option<Arc<dyn Caster<T>>> {
        self.casters
            .get(path)?
            .downcast_ref::<Arc<dyn Caster<T>>>()
            .cloned()
    }
}

impl std::fmt::Debug for MemoryDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut registered: Vec<&String> = self.casters.keys().collect();
        registered.sort();
        f.debug_struct("MemoryDocument")
            .field("casters", &registered)
            .field("state", &*self.state.lock())
            .finish()
    }
}
