//! Save Cycle Demonstration
//!
//! Walks one array field through a persistence cycle.
#![allow(clippy::unwrap_used, clippy::expect_used)]
//!
//! Key concepts illustrated:
//! 1. Casting raw input through the document's schema
//! 2. Recorded operations vs. local state
//! 3. Removal by value deferred to the store
//! 4. Replay-or-replace planning

use std::sync::Arc;

use serde_json::json;
use trackseq_core::logging_facility::{init, Profile};
use trackseq_core::{caster, plan_field_update, MemoryDocument, TrackedSequence};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init(Profile::from_env());

    println!("=== trackseq Save Cycle Demo ===\n");

    let doc = Arc::new(MemoryDocument::new().with_caster("tags", caster::json::<String>()));
    let mut tags = TrackedSequence::new(
        vec!["rust".to_string(), "odm".to_string()],
        "tags",
        Some(&doc),
    )?;

    tags.push(&[json!("mongo")])?;
    tags.push(&[json!("arrays"), json!("atomics")])?;
    let popped = tags.pop()?;
    println!("popped {:?}", popped);

    let removed = tags.remove(&[json!("odm")])?;
    println!("recorded removal of {:?}; still stored locally: {:?}", removed, &*tags);

    if let Err(err) = tags.push(&[json!(42)]) {
        println!("rejected: {}", err);
    }

    println!("modified paths: {:?}", doc.modified_paths());

    let update = plan_field_update(&tags);
    println!("\nstrategy: {}", update.strategy());
    for u in update.to_updates()? {
        println!("  {}", u);
    }
    // pretend the store accepted the write
    update.commit(&mut tags);

    let next = plan_field_update(&tags);
    println!("\nnext cycle strategy: {}", next.strategy());
    for u in next.to_updates()? {
        println!("  {}", u);
    }

    Ok(())
}
