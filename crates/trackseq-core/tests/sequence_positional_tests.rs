//! Pop / Shift Tests
//!
//! ## Scenarios Covered
//!
//! 1. `pop` removes the tail and records `Pop`
//! 2. `shift` removes the head and records `Shift`
//! 3. Both fail with `EmptySequence` on an empty sequence without recording
//! 4. Positional removal works on owner-less value holders

mod common;

use trackseq_core::{ExError, ExErrorKind, Operation, SequenceError, TrackedSequence};

#[test]
fn test_pop_returns_last_and_records_pop() {
    let (doc, mut seq) = common::numbers(vec![1, 2, 3], "scores");

    assert_eq!(seq.pop().unwrap(), 3);

    assert_eq!(&*seq, &[1, 2]);
    assert_eq!(seq.operations(), &[Operation::Pop]);
    assert!(doc.is_modified("scores"));
}

#[test]
fn test_shift_returns_first_and_records_shift() {
    let (_doc, mut seq) = common::numbers(vec![1, 2, 3], "scores");

    assert_eq!(seq.shift().unwrap(), 1);

    assert_eq!(&*seq, &[2, 3]);
    assert_eq!(seq.operations(), &[Operation::Shift]);
}

#[test]
fn test_each_pop_and_shift_is_recorded_separately() {
    let (_doc, mut seq) = common::numbers(vec![1, 2, 3, 4], "scores");

    seq.pop().unwrap();
    seq.pop().unwrap();
    seq.shift().unwrap();

    assert_eq!(&*seq, &[2]);
    assert_eq!(
        seq.operations(),
        &[Operation::Pop, Operation::Pop, Operation::Shift]
    );
}

#[test]
fn test_pop_on_empty_fails_without_recording() {
    let (doc, mut seq) = common::numbers(vec![], "scores");

    let err = seq.pop().unwrap_err();

    assert!(matches!(err, SequenceError::EmptySequence { op: "pop", .. }));
    assert!(!seq.do_atomics());
    assert!(!doc.is_modified("scores"));

    let ex: ExError = err.into();
    assert_eq!(ex.kind(), ExErrorKind::EmptySequence);
    assert_eq!(ex.path(), Some("scores"));
}

#[test]
fn test_shift_on_empty_fails_without_recording() {
    let (_doc, mut seq) = common::numbers(vec![], "scores");

    let err = seq.shift().unwrap_err();

    assert!(matches!(err, SequenceError::EmptySequence { op: "shift", .. }));
    assert!(seq.operations().is_empty());
}

#[test]
fn test_pop_until_empty_then_fail() {
    let (_doc, mut seq) = common::numbers(vec![5], "scores");

    assert_eq!(seq.pop().unwrap(), 5);
    assert!(seq.pop().is_err());
    assert_eq!(seq.operations(), &[Operation::Pop]);
}

#[test]
fn test_detached_sequence_records_positional_removal() {
    let mut seq = TrackedSequence::detached(vec!["a", "b"], "letters");

    assert_eq!(seq.shift().unwrap(), "a");
    assert_eq!(seq.operations(), &[Operation::Shift]);
    assert!(seq.do_atomics());
}
