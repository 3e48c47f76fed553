use crate::{Column, TaskStatus};

use std::str::FromStr;

use googletest::prelude::*;
use uuid::Uuid;

fn columns(titles: &[&str]) -> Vec<Column> {
    let board_id = Uuid::new_v4();
    titles
        .iter()
        .enumerate()
        .map(|(i, t)| Column::new(board_id, t.to_string(), i as i32))
        .collect()
}

#[test]
fn given_default_titles_when_deriving_status_then_each_maps_to_its_stage() {
    assert_that!(TaskStatus::from_column_title("To Do"), eq(TaskStatus::Todo));
    assert_that!(
        TaskStatus::from_column_title("In Progress"),
        eq(TaskStatus::InProgress)
    );
    assert_that!(
        TaskStatus::from_column_title("Done"),
        eq(TaskStatus::Completed)
    );
}

#[test]
fn given_mixed_case_titles_when_deriving_status_then_matching_ignores_case() {
    assert_that!(
        TaskStatus::from_column_title("COMPLETED ITEMS"),
        eq(TaskStatus::Completed)
    );
    assert_that!(
        TaskStatus::from_column_title("Currently Doing"),
        eq(TaskStatus::InProgress)
    );
}

#[test]
fn given_unrecognised_title_when_deriving_status_then_todo() {
    assert_that!(
        TaskStatus::from_column_title("Review"),
        eq(TaskStatus::Todo)
    );
}

#[test]
fn given_completed_status_when_resolving_then_first_done_column_wins() {
    // Given
    let cols = columns(&["Backlog", "Done", "Complete (archived)"]);

    // When
    let resolved = TaskStatus::Completed.resolve_column(&cols);

    // Then
    assert_that!(resolved.map(|c| c.id), some(eq(cols[1].id)));
}

#[test]
fn given_no_progress_column_when_resolving_in_progress_then_none() {
    let cols = columns(&["To Do", "Done"]);

    assert_that!(TaskStatus::InProgress.resolve_column(&cols), none());
}

#[test]
fn given_no_todo_like_column_when_resolving_todo_then_falls_back_to_first() {
    let cols = columns(&["Ideas", "Doing", "Done"]);

    let resolved = TaskStatus::Todo.resolve_column(&cols);

    assert_that!(resolved.map(|c| c.id), some(eq(cols[0].id)));
}

#[test]
fn given_backlog_column_when_resolving_todo_then_backlog_is_chosen() {
    let cols = columns(&["Ideas", "Backlog", "Done"]);

    let resolved = TaskStatus::Todo.resolve_column(&cols);

    assert_that!(resolved.map(|c| c.id), some(eq(cols[1].id)));
}

#[test]
fn given_empty_board_when_resolving_todo_then_none() {
    assert_that!(TaskStatus::Todo.resolve_column(&[]), none());
}

#[test]
fn test_task_status_wire_format() {
    assert_eq!(
        serde_json::to_string(&TaskStatus::InProgress).unwrap(),
        "\"in-progress\""
    );
    assert_eq!(
        TaskStatus::from_str("in-progress").unwrap(),
        TaskStatus::InProgress
    );
    assert!(TaskStatus::from_str("in_progress").is_err());
}
