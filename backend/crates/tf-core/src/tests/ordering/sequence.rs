use crate::{CoreError, move_across, reorder_within};

use googletest::prelude::*;
use uuid::Uuid;

fn ids(n: usize) -> Vec<Uuid> {
    (0..n).map(|_| Uuid::new_v4()).collect()
}

#[test]
fn given_three_tasks_when_first_moved_to_index_two_then_it_becomes_last() {
    // Given: X = [T1, T2, T3]
    let t = ids(3);
    let column_x = Uuid::new_v4();
    let mut x = t.clone();

    // When
    reorder_within(&mut x, t[0], column_x, 2).unwrap();

    // Then: X = [T2, T3, T1]
    assert_eq!(x, vec![t[1], t[2], t[0]]);
}

#[test]
fn given_task_when_reordered_to_front_then_others_keep_relative_order() {
    let t = ids(4);
    let mut seq = t.clone();

    reorder_within(&mut seq, t[3], Uuid::new_v4(), 0).unwrap();

    assert_eq!(seq, vec![t[3], t[0], t[1], t[2]]);
}

#[test]
fn given_index_past_end_when_reordering_then_task_is_appended() {
    let t = ids(3);
    let mut seq = t.clone();

    reorder_within(&mut seq, t[0], Uuid::new_v4(), 99).unwrap();

    assert_eq!(seq, vec![t[1], t[2], t[0]]);
}

#[test]
fn given_task_not_in_column_when_reordering_then_not_found_and_unchanged() {
    // Given
    let t = ids(2);
    let column_id = Uuid::new_v4();
    let stranger = Uuid::new_v4();
    let mut seq = t.clone();

    // When
    let result = reorder_within(&mut seq, stranger, column_id, 0);

    // Then
    assert!(matches!(
        result,
        Err(CoreError::TaskNotInColumn { task_id, column_id: c, .. })
            if task_id == stranger && c == column_id
    ));
    assert_eq!(seq, t);
}

#[test]
fn given_two_columns_when_moving_first_task_to_front_of_other_then_both_updated() {
    // Given: X = [T1, T2], Y = [T3]
    let t = ids(3);
    let mut x = vec![t[0], t[1]];
    let mut y = vec![t[2]];

    // When
    move_across(&mut x, &mut y, t[0], Uuid::new_v4(), 0).unwrap();

    // Then: X = [T2], Y = [T1, T3]
    assert_eq!(x, vec![t[1]]);
    assert_eq!(y, vec![t[0], t[2]]);
}

#[test]
fn given_index_past_end_when_moving_across_then_appended() {
    let t = ids(3);
    let mut x = vec![t[0]];
    let mut y = vec![t[1], t[2]];

    move_across(&mut x, &mut y, t[0], Uuid::new_v4(), 10).unwrap();

    assert_that!(x.len(), eq(0));
    assert_eq!(y, vec![t[1], t[2], t[0]]);
}

#[test]
fn given_empty_destination_when_moving_across_then_task_is_only_entry() {
    let t = ids(1);
    let mut x = t.clone();
    let mut y = Vec::new();

    move_across(&mut x, &mut y, t[0], Uuid::new_v4(), 0).unwrap();

    assert_that!(x.is_empty(), eq(true));
    assert_eq!(y, t);
}

#[test]
fn given_task_in_wrong_source_when_moving_across_then_neither_column_mutated() {
    // Given: the task lives in Y, but the request claims X
    let t = ids(3);
    let source_id = Uuid::new_v4();
    let mut x = vec![t[0]];
    let mut y = vec![t[1], t[2]];

    // When
    let result = move_across(&mut x, &mut y, t[2], source_id, 0);

    // Then
    assert!(matches!(
        result,
        Err(CoreError::TaskNotInColumn { column_id, .. }) if column_id == source_id
    ));
    assert_eq!(x, vec![t[0]]);
    assert_eq!(y, vec![t[1], t[2]]);
}

#[test]
fn given_stale_copy_in_destination_when_moving_across_then_task_appears_once() {
    let t = ids(3);
    let mut x = vec![t[0], t[1]];
    let mut y = vec![t[0], t[2]];

    move_across(&mut x, &mut y, t[0], Uuid::new_v4(), 1).unwrap();

    assert_eq!(x, vec![t[1]]);
    assert_eq!(y, vec![t[2], t[0]]);
}
