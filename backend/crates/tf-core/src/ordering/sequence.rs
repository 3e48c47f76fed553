use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

/// Move `task_id` to `destination_index` inside a single column.
///
/// The task is located by identity, removed, and re-inserted into the
/// shortened sequence. An index past the end appends. Every other task
/// keeps its relative order.
#[track_caller]
pub fn reorder_within(
    sequence: &mut Vec<Uuid>,
    task_id: Uuid,
    column_id: Uuid,
    destination_index: usize,
) -> CoreErrorResult<()> {
    let current = sequence
        .iter()
        .position(|id| *id == task_id)
        .ok_or_else(|| CoreError::TaskNotInColumn {
            task_id,
            column_id,
            location: ErrorLocation::from(Location::caller()),
        })?;

    sequence.remove(current);
    let index = destination_index.min(sequence.len());
    sequence.insert(index, task_id);

    Ok(())
}

/// Move `task_id` from `source` into `destination` at `destination_index`.
///
/// Both sequences are left untouched when the task is not in `source`.
/// Removal drops every occurrence and a stale copy already sitting in
/// `destination` is dropped before inserting, so the task ends up exactly
/// once in `destination`.
#[track_caller]
pub fn move_across(
    source: &mut Vec<Uuid>,
    destination: &mut Vec<Uuid>,
    task_id: Uuid,
    source_column_id: Uuid,
    destination_index: usize,
) -> CoreErrorResult<()> {
    if !source.contains(&task_id) {
        return Err(CoreError::TaskNotInColumn {
            task_id,
            column_id: source_column_id,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    source.retain(|id| *id != task_id);
    destination.retain(|id| *id != task_id);

    let index = destination_index.min(destination.len());
    destination.insert(index, task_id);

    Ok(())
}
