//! Push Tests
//!
//! ## Scenarios Covered
//!
//! 1. Single-value push records `Push`, multi-value push records one `PushAll`
//! 2. Separate push calls are never merged
//! 3. `push_all` records one `PushAll` read back from storage
//! 4. `non_atomic_push` never records
//! 5. Cast failures leave storage, log and document untouched

mod common;

use serde_json::json;
use trackseq_core::{Operation, SequenceError};

#[test]
fn test_push_single_value_records_push() {
    let (doc, mut seq) = common::numbers(vec![1, 2, 3], "scores");

    let len = seq.push(&[json!(4)]).unwrap();

    assert_eq!(len, 4);
    assert_eq!(&*seq, &[1, 2, 3, 4]);
    assert_eq!(seq.operations(), &[Operation::Push(4)]);
    assert!(doc.is_modified("scores"));
}

#[test]
fn test_push_multiple_values_records_single_push_all_in_call_order() {
    let (_doc, mut seq) = common::numbers(vec![], "scores");

    seq.push(&[json!(7), json!(5), json!(6)]).unwrap();

    assert_eq!(&*seq, &[7, 5, 6]);
    assert_eq!(seq.operations(), &[Operation::PushAll(vec![7, 5, 6])]);
}

#[test]
fn test_separate_pushes_are_not_merged() {
    let (_doc, mut seq) = common::numbers(vec![], "scores");

    seq.push(&[json!(1)]).unwrap();
    seq.push(&[json!(2)]).unwrap();

    assert_eq!(
        seq.operations(),
        &[Operation::Push(1), Operation::Push(2)]
    );
}

#[test]
fn test_push_stores_cast_values_not_raw_input() {
    let doc = common::tag_doc("tags");
    let mut seq = trackseq_core::TrackedSequence::new(Vec::<String>::new(), "tags", Some(&doc))
        .unwrap();

    seq.push(&[json!("  Rust ")]).unwrap();

    assert_eq!(&*seq, &["rust".to_string()]);
    assert_eq!(seq.operations(), &[Operation::Push("rust".to_string())]);
}

#[test]
fn test_push_all_records_one_push_all_from_storage() {
    let doc = common::tag_doc("tags");
    let mut seq =
        trackseq_core::TrackedSequence::new(vec!["db".to_string()], "tags", Some(&doc)).unwrap();

    let len = seq.push_all(&[json!(" Orm "), json!("MONGO")]).unwrap();

    assert_eq!(len, 3);
    assert_eq!(
        seq.operations(),
        &[Operation::PushAll(vec!["orm".to_string(), "mongo".to_string()])]
    );
}

#[test]
fn test_push_all_with_single_value_still_records_push_all() {
    let (_doc, mut seq) = common::numbers(vec![], "scores");

    seq.push_all(&[json!(9)]).unwrap();

    assert_eq!(seq.operations(), &[Operation::PushAll(vec![9])]);
}

#[test]
fn test_non_atomic_push_never_records() {
    let (doc, mut seq) = common::numbers(vec![1], "scores");

    seq.non_atomic_push(&[json!(2)]).unwrap();
    seq.non_atomic_push(&[json!(3), json!(4)]).unwrap();

    assert_eq!(&*seq, &[1, 2, 3, 4]);
    assert!(seq.operations().is_empty());
    assert!(!seq.do_atomics());
    // still dirties the field on the document
    assert!(doc.is_modified("scores"));
    assert_eq!(doc.notification_count(), 2);
}

#[test]
fn test_push_failure_is_all_or_nothing() {
    let (doc, mut seq) = common::numbers(vec![1], "scores");

    let result = seq.push(&[json!(2), json!("three"), json!(4)]);

    assert!(matches!(
        result,
        Err(SequenceError::Validation { position: 1, .. })
    ));
    assert_eq!(&*seq, &[1]);
    assert!(seq.operations().is_empty());
    assert!(!doc.is_modified("scores"));
    assert_eq!(doc.notification_count(), 0);
}

#[test]
fn test_push_all_and_non_atomic_push_failures_leave_state_unchanged() {
    let (doc, mut seq) = common::numbers(vec![1], "scores");

    assert!(seq.push_all(&[json!(2), json!(null)]).is_err());
    assert!(seq.non_atomic_push(&[json!([1])]).is_err());

    assert_eq!(&*seq, &[1]);
    assert!(!seq.do_atomics());
    assert_eq!(doc.notification_count(), 0);
}
