//! Project access checks shared by the handlers.

use crate::{ApiError, ApiResult};

use tf_core::Project;
use tf_db::{ProjectMemberRepository, ProjectRepository};

use sqlx::SqlitePool;
use uuid::Uuid;

async fn find_project(pool: &SqlitePool, project_id: Uuid) -> ApiResult<Project> {
    ProjectRepository::find_by_id(pool, project_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Project {} not found", project_id)))
}

/// The project, if `user_id` owns it or is on its team.
pub async fn require_member(
    pool: &SqlitePool,
    project_id: Uuid,
    user_id: Uuid,
) -> ApiResult<Project> {
    let project = find_project(pool, project_id).await?;

    if !project.is_owned_by(user_id)
        && !ProjectMemberRepository::is_member(pool, project_id, user_id).await?
    {
        return Err(ApiError::forbidden(format!(
            "User {} is not a member of project {}",
            user_id, project_id
        )));
    }

    Ok(project)
}

/// The project, if `user_id` owns it.
pub async fn require_owner(
    pool: &SqlitePool,
    project_id: Uuid,
    user_id: Uuid,
) -> ApiResult<Project> {
    let project = find_project(pool, project_id).await?;

    if !project.is_owned_by(user_id) {
        return Err(ApiError::forbidden(format!(
            "Only the owner can modify project {}",
            project_id
        )));
    }

    Ok(project)
}
