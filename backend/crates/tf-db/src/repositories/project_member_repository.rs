use crate::Result as DbErrorResult;
use crate::repositories::row;

use tf_core::ProjectMember;

use uuid::Uuid;

pub struct ProjectMemberRepository;

impl ProjectMemberRepository {
    /// Register a member. Returns `false` when the user already was one.
    pub async fn add<'e, E>(executor: E, member: &ProjectMember) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                INSERT OR IGNORE INTO tf_project_members (project_id, user_id, created_at)
                VALUES (?, ?, ?)
                "#,
        )
        .bind(member.project_id.to_string())
        .bind(member.user_id.to_string())
        .bind(member.created_at.timestamp())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Owner or registered member.
    pub async fn is_member<'e, E>(executor: E, project_id: Uuid, user_id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let project_id_str = project_id.to_string();
        let user_id_str = user_id.to_string();

        let found: Option<i64> = sqlx::query_scalar(
            r#"
                SELECT 1 FROM tf_projects p
                WHERE p.id = ?
                  AND (p.owner_id = ? OR EXISTS (
                      SELECT 1 FROM tf_project_members m
                      WHERE m.project_id = p.id AND m.user_id = ?
                  ))
                "#,
        )
        .bind(&project_id_str)
        .bind(&user_id_str)
        .bind(&user_id_str)
        .fetch_optional(executor)
        .await?;

        Ok(found.is_some())
    }

    pub async fn find_by_project<'e, E>(
        executor: E,
        project_id: Uuid,
    ) -> DbErrorResult<Vec<ProjectMember>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT project_id, user_id, created_at
                FROM tf_project_members
                WHERE project_id = ?
                ORDER BY created_at ASC, user_id ASC
                "#,
        )
        .bind(project_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.iter()
            .map(|r| -> DbErrorResult<ProjectMember> {
                Ok(ProjectMember {
                    project_id: row::uuid(r, "project_id")?,
                    user_id: row::uuid(r, "user_id")?,
                    created_at: row::timestamp(r, "created_at")?,
                })
            })
            .collect()
    }
}
