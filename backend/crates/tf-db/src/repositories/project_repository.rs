use crate::repositories::row;
use crate::Result as DbErrorResult;

use tf_core::Project;

use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct ProjectRepository;

impl ProjectRepository {
    pub async fn create<'e, E>(executor: E, project: &Project) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO tf_projects (
                    id, name, description, status, due_date, owner_id, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                "#,
        )
        .bind(project.id.to_string())
        .bind(&project.name)
        .bind(&project.description)
        .bind(project.status.as_str())
        .bind(project.due_date.map(|d| d.timestamp()))
        .bind(project.owner_id.to_string())
        .bind(project.created_at.timestamp())
        .bind(project.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Project>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT id, name, description, status, due_date, owner_id, created_at, updated_at
                FROM tf_projects
                WHERE id = ?
                "#,
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(project_from_row).transpose()
    }

    /// Projects the user owns or is a member of, newest first.
    pub async fn find_by_member<'e, E>(executor: E, user_id: Uuid) -> DbErrorResult<Vec<Project>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let user_id_str = user_id.to_string();

        let rows = sqlx::query(
            r#"
                SELECT id, name, description, status, due_date, owner_id, created_at, updated_at
                FROM tf_projects p
                WHERE p.owner_id = ?
                   OR EXISTS (
                       SELECT 1 FROM tf_project_members m
                       WHERE m.project_id = p.id AND m.user_id = ?
                   )
                ORDER BY p.created_at DESC, p.name ASC
                "#,
        )
        .bind(&user_id_str)
        .bind(&user_id_str)
        .fetch_all(executor)
        .await?;

        rows.iter().map(project_from_row).collect()
    }

    pub async fn update<'e, E>(executor: E, project: &Project) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE tf_projects
                SET name = ?, description = ?, status = ?, due_date = ?, updated_at = ?
                WHERE id = ?
                "#,
        )
        .bind(&project.name)
        .bind(&project.description)
        .bind(project.status.as_str())
        .bind(project.due_date.map(|d| d.timestamp()))
        .bind(project.updated_at.timestamp())
        .bind(project.id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a project. Members, board, columns and tasks go with it.
    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM tf_projects WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn project_from_row(r: &SqliteRow) -> DbErrorResult<Project> {
    use sqlx::Row;

    Ok(Project {
        id: row::uuid(r, "id")?,
        name: r.try_get("name")?,
        description: r.try_get("description")?,
        status: row::parsed(r, "status")?,
        due_date: row::optional_timestamp(r, "due_date")?,
        owner_id: row::uuid(r, "owner_id")?,
        created_at: row::timestamp(r, "created_at")?,
        updated_at: row::timestamp(r, "updated_at")?,
    })
}
