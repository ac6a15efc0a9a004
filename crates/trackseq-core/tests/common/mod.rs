use std::sync::Arc;

use trackseq_core::caster::{self, from_fn};
use trackseq_core::{MemoryDocument, TrackedSequence, ValidationError};

/// Document with an `i64` field at `path`
#[allow(dead_code)]
pub fn number_doc(path: &str) -> Arc<MemoryDocument> {
    Arc::new(MemoryDocument::new().with_caster(path, caster::json::<i64>()))
}

/// Document with a string field at `path` whose caster trims and lowercases
///
/// Cast values differ from the raw input, which makes it visible whether
/// stored state and recorded payloads come from cast or raw values.
#[allow(dead_code)]
pub fn tag_doc(path: &str) -> Arc<MemoryDocument> {
    let normalize = from_fn(|raw, _owner| {
        raw.as_str()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ValidationError::new(raw.clone(), "expected a non-empty string"))
    });
    Arc::new(MemoryDocument::new().with_caster(path, normalize))
}

/// Owned `i64` sequence at `path` together with its document
#[allow(dead_code)]
pub fn numbers(
    initial: Vec<i64>,
    path: &str,
) -> (Arc<MemoryDocument>, TrackedSequence<i64>) {
    let doc = number_doc(path);
    let seq = TrackedSequence::new(initial, path, Some(&doc)).unwrap();
    (doc, seq)
}
