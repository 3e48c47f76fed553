use crate::repositories::row;
use crate::{DbError, Result as DbErrorResult};

use tf_core::Column;

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct ColumnRepository;

impl ColumnRepository {
    pub async fn create<'e, E>(executor: E, column: &Column) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO tf_columns (id, board_id, title, position, version, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
        )
        .bind(column.id.to_string())
        .bind(column.board_id.to_string())
        .bind(&column.title)
        .bind(column.position)
        .bind(column.version)
        .bind(column.created_at.timestamp())
        .bind(column.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Column>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT id, board_id, title, position, version, created_at, updated_at
                FROM tf_columns
                WHERE id = ?
                "#,
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(column_from_row).transpose()
    }

    /// Columns of a board, left to right.
    pub async fn find_by_board<'e, E>(executor: E, board_id: Uuid) -> DbErrorResult<Vec<Column>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT id, board_id, title, position, version, created_at, updated_at
                FROM tf_columns
                WHERE board_id = ?
                ORDER BY position ASC, created_at ASC
                "#,
        )
        .bind(board_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.iter().map(column_from_row).collect()
    }

    /// Project owning the column, through its board.
    pub async fn find_project_id<'e, E>(executor: E, column_id: Uuid) -> DbErrorResult<Option<Uuid>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT b.project_id AS project_id
                FROM tf_columns c
                JOIN tf_boards b ON b.id = c.board_id
                WHERE c.id = ?
                "#,
        )
        .bind(column_id.to_string())
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(|r| row::uuid(r, "project_id")).transpose()
    }

    /// Bump the column's version if it still equals `expected_version`.
    ///
    /// Fails with `Conflict` otherwise. The services read the column and
    /// bump it under one write lock, so there this only guards against the
    /// caller passing a version it did not read in the same transaction.
    pub async fn bump_version<'e, E>(
        executor: E,
        id: Uuid,
        expected_version: i32,
        now: DateTime<Utc>,
    ) -> DbErrorResult<i32>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                UPDATE tf_columns
                SET version = version + 1, updated_at = ?
                WHERE id = ? AND version = ?
                RETURNING version
                "#,
        )
        .bind(now.timestamp())
        .bind(id.to_string())
        .bind(expected_version)
        .fetch_optional(executor)
        .await?;

        match row {
            Some(r) => Ok(r.try_get("version")?),
            None => Err(DbError::Conflict {
                message: format!(
                    "column {} was modified concurrently (expected version {})",
                    id, expected_version
                ),
                current_version: None,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

fn column_from_row(r: &SqliteRow) -> DbErrorResult<Column> {
    Ok(Column {
        id: row::uuid(r, "id")?,
        board_id: row::uuid(r, "board_id")?,
        title: r.try_get("title")?,
        position: r.try_get("position")?,
        version: r.try_get("version")?,
        created_at: row::timestamp(r, "created_at")?,
        updated_at: row::timestamp(r, "updated_at")?,
    })
}
