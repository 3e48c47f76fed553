//! Placement of tasks within the columns of a project board.
//!
//! Every mutation runs in one `BEGIN IMMEDIATE` transaction: the column
//! sequences, the task's column reference and the column versions are written
//! together or not at all. Concurrent writers queue on the database lock; one
//! that cannot take it within the busy timeout fails with
//! `DbError::Conflict` and nothing it planned is written.

use crate::{
    BoardRepository, ColumnRepository, DbError, Result as DbErrorResult, TaskRepository,
};
use crate::services::begin_write;

use tf_core::{CoreError, PlacedTask, Task, TaskMove, TaskStatus, move_across, reorder_within};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use sqlx::{SqliteConnection, SqlitePool};
use uuid::Uuid;

/// Outcome of a status change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub task: PlacedTask,
    /// `false` when the task already sat in the resolved column.
    pub moved: bool,
}

pub struct BoardOrderingService {
    pool: SqlitePool,
}

impl BoardOrderingService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Move a task within one column or across two columns of the same board.
    pub async fn move_task(&self, task_move: TaskMove) -> DbErrorResult<PlacedTask> {
        let mut tx = begin_write(&self.pool).await?;

        apply_move(&mut *tx, &task_move).await?;
        let placed = TaskRepository::find_placed(&mut *tx, task_move.task_id)
            .await?
            .ok_or_else(|| DbError::not_found("Task", task_move.task_id))?;

        tx.commit().await?;

        log::info!(
            "Moved task {} from column {} to column {} at index {}",
            task_move.task_id,
            task_move.source_column_id,
            task_move.destination_column_id,
            placed.task.position
        );

        Ok(placed)
    }

    /// Put a task in the first column whose title matches `status`,
    /// appended at the end. A task already in that column is left alone.
    pub async fn set_status(&self, task_id: Uuid, status: TaskStatus) -> DbErrorResult<StatusChange> {
        let mut tx = begin_write(&self.pool).await?;

        let placed = TaskRepository::find_placed(&mut *tx, task_id)
            .await?
            .ok_or_else(|| DbError::not_found("Task", task_id))?;

        let board = BoardRepository::find_by_project(&mut *tx, placed.task.project_id)
            .await?
            .ok_or_else(|| DbError::not_found("Board", placed.task.project_id))?;
        let columns = ColumnRepository::find_by_board(&mut *tx, board.id).await?;

        let target = status
            .resolve_column(&columns)
            .ok_or_else(|| DbError::NoMatchingColumn {
                status,
                location: ErrorLocation::from(Location::caller()),
            })?;

        if target.id == placed.task.column_id {
            return Ok(StatusChange {
                task: placed,
                moved: false,
            });
        }

        let task_move = TaskMove {
            task_id,
            source_column_id: placed.task.column_id,
            destination_column_id: target.id,
            destination_index: usize::MAX,
        };
        apply_move(&mut *tx, &task_move).await?;

        let placed = TaskRepository::find_placed(&mut *tx, task_id)
            .await?
            .ok_or_else(|| DbError::not_found("Task", task_id))?;

        tx.commit().await?;

        Ok(StatusChange {
            task: placed,
            moved: true,
        })
    }

    /// Append a new task to the end of its column.
    pub async fn create_task(&self, mut task: Task) -> DbErrorResult<PlacedTask> {
        let mut tx = begin_write(&self.pool).await?;

        let column = ColumnRepository::find_by_id(&mut *tx, task.column_id)
            .await?
            .ok_or_else(|| DbError::not_found("Column", task.column_id))?;
        let owner = ColumnRepository::find_project_id(&mut *tx, column.id).await?;
        if owner != Some(task.project_id) {
            return Err(CoreError::Validation {
                message: format!(
                    "column {} does not belong to project {}",
                    column.id, task.project_id
                ),
                field: Some("column_id".to_string()),
                location: ErrorLocation::from(Location::caller()),
            }
            .into());
        }

        task.position = TaskRepository::next_position(&mut *tx, column.id).await?;
        TaskRepository::create(&mut *tx, &task).await?;
        ColumnRepository::bump_version(&mut *tx, column.id, column.version, Utc::now()).await?;

        tx.commit().await?;

        Ok(PlacedTask {
            task,
            column_title: column.title,
        })
    }

    /// Remove a task from its column. Returns `false` when it did not exist.
    pub async fn delete_task(&self, task_id: Uuid) -> DbErrorResult<bool> {
        let mut tx = begin_write(&self.pool).await?;

        let Some(task) = TaskRepository::find_by_id(&mut *tx, task_id).await? else {
            return Ok(false);
        };
        let column = ColumnRepository::find_by_id(&mut *tx, task.column_id)
            .await?
            .ok_or_else(|| DbError::not_found("Column", task.column_id))?;

        TaskRepository::delete(&mut *tx, task_id).await?;
        ColumnRepository::bump_version(&mut *tx, column.id, column.version, Utc::now()).await?;

        tx.commit().await?;

        Ok(true)
    }
}

async fn apply_move(conn: &mut SqliteConnection, task_move: &TaskMove) -> DbErrorResult<()> {
    let task_id = task_move.task_id;

    if TaskRepository::find_by_id(&mut *conn, task_id).await?.is_none() {
        return Err(DbError::not_found("Task", task_id));
    }
    let source = ColumnRepository::find_by_id(&mut *conn, task_move.source_column_id)
        .await?
        .ok_or_else(|| DbError::not_found("Column", task_move.source_column_id))?;

    let now = Utc::now();

    if task_move.is_reorder() {
        let mut sequence = TaskRepository::column_sequence(&mut *conn, source.id).await?;
        reorder_within(
            &mut sequence,
            task_id,
            source.id,
            task_move.destination_index,
        )?;

        TaskRepository::write_column_order(&mut *conn, source.id, &sequence).await?;
        ColumnRepository::bump_version(&mut *conn, source.id, source.version, now).await?;
    } else {
        let destination = ColumnRepository::find_by_id(&mut *conn, task_move.destination_column_id)
            .await?
            .ok_or_else(|| DbError::not_found("Column", task_move.destination_column_id))?;

        if destination.board_id != source.board_id {
            return Err(CoreError::Validation {
                message: "source and destination columns belong to different boards"
                    .to_string(),
                field: Some("destination_column_id".to_string()),
                location: ErrorLocation::from(Location::caller()),
            }
            .into());
        }

        let mut source_seq = TaskRepository::column_sequence(&mut *conn, source.id).await?;
        let mut destination_seq =
            TaskRepository::column_sequence(&mut *conn, destination.id).await?;
        move_across(
            &mut source_seq,
            &mut destination_seq,
            task_id,
            source.id,
            task_move.destination_index,
        )?;

        TaskRepository::write_column_order(&mut *conn, source.id, &source_seq).await?;
        TaskRepository::write_column_order(&mut *conn, destination.id, &destination_seq).await?;
        ColumnRepository::bump_version(&mut *conn, source.id, source.version, now).await?;
        ColumnRepository::bump_version(&mut *conn, destination.id, destination.version, now)
            .await?;
    }

    TaskRepository::touch(&mut *conn, task_id, now).await?;

    Ok(())
}
