use crate::repositories::row;
use crate::Result as DbErrorResult;

use tf_core::{PlacedTask, Task};

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection};
use uuid::Uuid;

pub struct TaskRepository;

impl TaskRepository {
    pub async fn create<'e, E>(executor: E, task: &Task) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO tf_tasks (
                    id, project_id, column_id, title, description, priority,
                    assignee_id, position, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
        )
        .bind(task.id.to_string())
        .bind(task.project_id.to_string())
        .bind(task.column_id.to_string())
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.priority.as_str())
        .bind(task.assignee_id.map(|id| id.to_string()))
        .bind(task.position)
        .bind(task.created_at.timestamp())
        .bind(task.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT id, project_id, column_id, title, description, priority,
                       assignee_id, position, created_at, updated_at
                FROM tf_tasks
                WHERE id = ?
                "#,
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(task_from_row).transpose()
    }

    /// The task with the title of the column holding it.
    pub async fn find_placed<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<PlacedTask>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT t.id AS id, t.project_id AS project_id, t.column_id AS column_id,
                       t.title AS title, t.description AS description, t.priority AS priority,
                       t.assignee_id AS assignee_id, t.position AS position,
                       t.created_at AS created_at, t.updated_at AS updated_at,
                       c.title AS column_title
                FROM tf_tasks t
                JOIN tf_columns c ON c.id = t.column_id
                WHERE t.id = ?
                "#,
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(placed_from_row).transpose()
    }

    /// Every task of a project, column by column in board order.
    pub async fn find_placed_by_project<'e, E>(
        executor: E,
        project_id: Uuid,
    ) -> DbErrorResult<Vec<PlacedTask>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT t.id AS id, t.project_id AS project_id, t.column_id AS column_id,
                       t.title AS title, t.description AS description, t.priority AS priority,
                       t.assignee_id AS assignee_id, t.position AS position,
                       t.created_at AS created_at, t.updated_at AS updated_at,
                       c.title AS column_title
                FROM tf_tasks t
                JOIN tf_columns c ON c.id = t.column_id
                WHERE t.project_id = ?
                ORDER BY c.position ASC, t.position ASC
                "#,
        )
        .bind(project_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.iter().map(placed_from_row).collect()
    }

    /// Every task across the projects the user owns or belongs to.
    pub async fn find_placed_by_member<'e, E>(
        executor: E,
        user_id: Uuid,
    ) -> DbErrorResult<Vec<PlacedTask>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let user_id_str = user_id.to_string();

        let rows = sqlx::query(
            r#"
                SELECT t.id AS id, t.project_id AS project_id, t.column_id AS column_id,
                       t.title AS title, t.description AS description, t.priority AS priority,
                       t.assignee_id AS assignee_id, t.position AS position,
                       t.created_at AS created_at, t.updated_at AS updated_at,
                       c.title AS column_title
                FROM tf_tasks t
                JOIN tf_columns c ON c.id = t.column_id
                JOIN tf_projects p ON p.id = t.project_id
                WHERE p.owner_id = ?
                   OR EXISTS (
                       SELECT 1 FROM tf_project_members m
                       WHERE m.project_id = p.id AND m.user_id = ?
                   )
                ORDER BY t.created_at DESC, t.id ASC
                "#,
        )
        .bind(&user_id_str)
        .bind(&user_id_str)
        .fetch_all(executor)
        .await?;

        rows.iter().map(placed_from_row).collect()
    }

    /// All tasks on a board, in column then sequence order.
    pub async fn find_by_board<'e, E>(executor: E, board_id: Uuid) -> DbErrorResult<Vec<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT t.id AS id, t.project_id AS project_id, t.column_id AS column_id,
                       t.title AS title, t.description AS description, t.priority AS priority,
                       t.assignee_id AS assignee_id, t.position AS position,
                       t.created_at AS created_at, t.updated_at AS updated_at
                FROM tf_tasks t
                JOIN tf_columns c ON c.id = t.column_id
                WHERE c.board_id = ?
                ORDER BY c.position ASC, t.position ASC, t.created_at ASC
                "#,
        )
        .bind(board_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.iter().map(task_from_row).collect()
    }

    /// Task ids of a column, top to bottom.
    pub async fn column_sequence<'e, E>(executor: E, column_id: Uuid) -> DbErrorResult<Vec<Uuid>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT id FROM tf_tasks
                WHERE column_id = ?
                ORDER BY position ASC, created_at ASC
                "#,
        )
        .bind(column_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.iter().map(|r| row::uuid(r, "id")).collect()
    }

    /// Position a new task would get when appended to the column.
    pub async fn next_position<'e, E>(executor: E, column_id: Uuid) -> DbErrorResult<i32>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let next: i32 = sqlx::query_scalar(
            "SELECT COALESCE(MAX(position) + 1, 0) FROM tf_tasks WHERE column_id = ?",
        )
        .bind(column_id.to_string())
        .fetch_one(executor)
        .await?;

        Ok(next)
    }

    /// Persist a column sequence: every listed task is placed in
    /// `column_id` at its index.
    pub async fn write_column_order(
        conn: &mut SqliteConnection,
        column_id: Uuid,
        sequence: &[Uuid],
    ) -> DbErrorResult<()> {
        let column_id_str = column_id.to_string();

        for (position, task_id) in sequence.iter().enumerate() {
            sqlx::query("UPDATE tf_tasks SET column_id = ?, position = ? WHERE id = ?")
                .bind(&column_id_str)
                .bind(position as i64)
                .bind(task_id.to_string())
                .execute(&mut *conn)
                .await?;
        }

        Ok(())
    }

    pub async fn touch<'e, E>(executor: E, id: Uuid, now: DateTime<Utc>) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query("UPDATE tf_tasks SET updated_at = ? WHERE id = ?")
            .bind(now.timestamp())
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(())
    }

    /// Update the editable fields. Placement is owned by the ordering service.
    pub async fn update<'e, E>(executor: E, task: &Task) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE tf_tasks
                SET title = ?, description = ?, priority = ?, assignee_id = ?, updated_at = ?
                WHERE id = ?
                "#,
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.priority.as_str())
        .bind(task.assignee_id.map(|id| id.to_string()))
        .bind(task.updated_at.timestamp())
        .bind(task.id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM tf_tasks WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn task_from_row(r: &SqliteRow) -> DbErrorResult<Task> {
    Ok(Task {
        id: row::uuid(r, "id")?,
        project_id: row::uuid(r, "project_id")?,
        column_id: row::uuid(r, "column_id")?,
        title: r.try_get("title")?,
        description: r.try_get("description")?,
        priority: row::parsed(r, "priority")?,
        assignee_id: row::optional_uuid(r, "assignee_id")?,
        position: r.try_get("position")?,
        created_at: row::timestamp(r, "created_at")?,
        updated_at: row::timestamp(r, "updated_at")?,
    })
}

fn placed_from_row(r: &SqliteRow) -> DbErrorResult<PlacedTask> {
    Ok(PlacedTask {
        task: task_from_row(r)?,
        column_title: r.try_get("column_title")?,
    })
}
