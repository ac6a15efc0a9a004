//! Scenario 01: a tags field through one persistence cycle
//!
//! GIVEN a document whose `tags` field holds [1, 2, 3]
//! WHEN the field is pushed to, popped and removed from
//! THEN local storage and the recorded operations follow step by step,
//! AND saving replays exactly those operations.

mod common;

use serde_json::json;
use trackseq_core::{plan_field_update, FieldUpdate, Operation};

#[test]
fn test_scenario_01_tags_end_to_end() {
    let (doc, mut tags) = common::numbers(vec![1, 2, 3], "tags");

    tags.push(&[json!(4)]).unwrap();
    assert_eq!(&*tags, &[1, 2, 3, 4]);
    assert_eq!(tags.operations(), &[Operation::Push(4)]);

    tags.push(&[json!(5), json!(6)]).unwrap();
    assert_eq!(&*tags, &[1, 2, 3, 4, 5, 6]);
    assert_eq!(
        tags.operations(),
        &[Operation::Push(4), Operation::PushAll(vec![5, 6])]
    );

    assert_eq!(tags.pop().unwrap(), 6);
    assert_eq!(&*tags, &[1, 2, 3, 4, 5]);
    assert_eq!(tags.operations().last(), Some(&Operation::Pop));

    tags.remove(&[json!(2)]).unwrap();
    assert_eq!(&*tags, &[1, 2, 3, 4, 5]);
    assert_eq!(
        tags.operations(),
        &[
            Operation::Push(4),
            Operation::PushAll(vec![5, 6]),
            Operation::Pop,
            Operation::Pull(2),
        ]
    );
    assert_eq!(doc.modified_paths(), vec!["tags".to_string()]);

    // save
    let update = plan_field_update(&tags);
    assert!(update.is_atomic());
    assert_eq!(
        update.to_updates().unwrap(),
        vec![
            json!({ "$push": { "tags": 4 } }),
            json!({ "$pushAll": { "tags": [5, 6] } }),
            json!({ "$pop": { "tags": 1 } }),
            json!({ "$pull": { "tags": 2 } }),
        ]
    );
    assert_eq!(update.commit(&mut tags), 4);
    assert!(!tags.do_atomics());
    doc.clear_modified();

    // next cycle: nothing recorded, saving would replace the field
    match plan_field_update(&tags) {
        FieldUpdate::Replace { values, .. } => assert_eq!(values, vec![1, 2, 3, 4, 5]),
        other => panic!("expected replace, got {:?}", other),
    }
}
