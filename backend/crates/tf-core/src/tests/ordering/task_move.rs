use crate::{CoreError, TaskMove};

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_negative_index_when_building_move_then_validation_error_names_field() {
    let result = TaskMove::new(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), -1);

    match result {
        Err(CoreError::Validation { field, .. }) => {
            assert_eq!(field.as_deref(), Some("destination_index"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn given_zero_index_when_building_move_then_ok() {
    let result = TaskMove::new(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), 0);

    assert_that!(result, ok(anything()));
}

#[test]
fn test_is_reorder() {
    let column = Uuid::new_v4();
    let reorder = TaskMove::new(Uuid::new_v4(), column, column, 3).unwrap();
    let across = TaskMove::new(Uuid::new_v4(), column, Uuid::new_v4(), 3).unwrap();

    assert!(reorder.is_reorder());
    assert!(!across.is_reorder());
}
