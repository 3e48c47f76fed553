//! Project REST API handlers
//!
//! Listing is scoped to the caller's projects. Reads require membership;
//! updates, deletion and team changes require ownership.

use crate::{
    AddMemberRequest, ApiError, ApiResult, AppState, BoardDto, BoardResponse,
    CreateProjectRequest, DeleteResponse, JsonBody, MemberResponse, ProjectDetailResponse,
    ProjectDto, ProjectListResponse, ProjectResponse, TaskDto, UpdateProjectRequest, UserId,
    parse_uuid, require_member, require_owner,
};

use tf_core::{Project, ProjectMember, ProjectStats, ProjectStatus, validation};
use tf_db::{
    BoardRepository, ProjectMemberRepository, ProjectRepository, ProjectService, TaskRepository,
};

use std::collections::HashMap;
use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/projects
///
/// List the caller's projects with task counters
pub async fn list_projects(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> ApiResult<Json<ProjectListResponse>> {
    let projects = ProjectRepository::find_by_member(&state.pool, user_id).await?;
    let tasks = TaskRepository::find_placed_by_member(&state.pool, user_id).await?;

    let mut by_project: HashMap<Uuid, Vec<_>> = HashMap::new();
    for placed in &tasks {
        by_project
            .entry(placed.task.project_id)
            .or_default()
            .push(placed);
    }

    let projects = projects
        .into_iter()
        .map(|p| {
            let stats = by_project
                .get(&p.id)
                .map(|tasks| ProjectStats::from_tasks(tasks.iter().copied()))
                .unwrap_or_default();
            ProjectDto::from_project(p, stats)
        })
        .collect();

    Ok(Json(ProjectListResponse { projects }))
}

/// POST /api/v1/projects
///
/// Create a project owned by the caller, with a board and default columns
pub async fn create_project(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    JsonBody(req): JsonBody<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<ProjectResponse>)> {
    let name = validation::project_name(&req.name)?;
    let description = req
        .description
        .as_deref()
        .map(validation::description)
        .transpose()?;
    let status = req
        .status
        .as_deref()
        .map(ProjectStatus::from_str)
        .transpose()?
        .unwrap_or_default();
    let due_date = req.due_date.map(due_date_from_timestamp).transpose()?;

    let mut project = Project::new(name, user_id);
    project.description = description;
    project.status = status;
    project.due_date = due_date;

    ProjectService::new(state.pool.clone())
        .create(&project)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ProjectResponse {
            project: ProjectDto::from_project(project, ProjectStats::default()),
        }),
    ))
}

/// GET /api/v1/projects/:id
///
/// A project with its team and every task
pub async fn get_project(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectDetailResponse>> {
    let project_id = parse_uuid(&id, "id")?;
    let project = require_member(&state.pool, project_id, user_id).await?;

    let members = ProjectMemberRepository::find_by_project(&state.pool, project_id).await?;
    let tasks = TaskRepository::find_placed_by_project(&state.pool, project_id).await?;

    let stats = ProjectStats::from_tasks(&tasks);
    let team = members.into_iter().map(|m| m.user_id.to_string()).collect();

    Ok(Json(ProjectDetailResponse {
        project: ProjectDto::from_project(project, stats),
        team,
        tasks: tasks.into_iter().map(TaskDto::from).collect(),
    }))
}

/// GET /api/v1/projects/:id/board
///
/// The project's board: columns in order, tasks in order within each
pub async fn get_board(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<String>,
) -> ApiResult<Json<BoardResponse>> {
    let project_id = parse_uuid(&id, "id")?;
    require_member(&state.pool, project_id, user_id).await?;

    let mut conn = state.pool.acquire().await?;
    let view = BoardRepository::find_view_by_project(&mut *conn, project_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Board for project {} not found", id)))?;

    Ok(Json(BoardResponse {
        board: BoardDto::from(view),
    }))
}

/// PUT /api/v1/projects/:id
///
/// Partial update, owner only
pub async fn update_project(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateProjectRequest>,
) -> ApiResult<Json<ProjectResponse>> {
    let project_id = parse_uuid(&id, "id")?;
    let mut project = require_owner(&state.pool, project_id, user_id).await?;

    if let Some(ref name) = req.name {
        project.name = validation::project_name(name)?;
    }
    if let Some(ref description) = req.description {
        project.description = Some(validation::description(description)?);
    }
    if let Some(ref status) = req.status {
        project.status = ProjectStatus::from_str(status)?;
    }
    if req.clear_due_date {
        project.due_date = None;
    } else if let Some(timestamp) = req.due_date {
        project.due_date = Some(due_date_from_timestamp(timestamp)?);
    }
    project.updated_at = Utc::now();

    if !ProjectRepository::update(&state.pool, &project).await? {
        return Err(ApiError::not_found(format!("Project {} not found", id)));
    }

    let tasks = TaskRepository::find_placed_by_project(&state.pool, project_id).await?;
    let stats = ProjectStats::from_tasks(&tasks);

    Ok(Json(ProjectResponse {
        project: ProjectDto::from_project(project, stats),
    }))
}

/// DELETE /api/v1/projects/:id
///
/// Delete a project with its team, board, columns and tasks, owner only
pub async fn delete_project(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let project_id = parse_uuid(&id, "id")?;
    require_owner(&state.pool, project_id, user_id).await?;

    if !ProjectService::new(state.pool.clone())
        .delete(project_id)
        .await?
    {
        return Err(ApiError::not_found(format!("Project {} not found", id)));
    }

    Ok(Json(DeleteResponse {
        deleted_id: project_id.to_string(),
    }))
}

/// POST /api/v1/projects/:id/members
///
/// Add a user to the team, owner only. Adding an existing member succeeds.
pub async fn add_member(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<AddMemberRequest>,
) -> ApiResult<Json<MemberResponse>> {
    let project_id = parse_uuid(&id, "id")?;
    let member_id = parse_uuid(&req.user_id, "user_id")?;
    require_owner(&state.pool, project_id, user_id).await?;

    let added =
        ProjectMemberRepository::add(&state.pool, &ProjectMember::new(project_id, member_id))
            .await?;

    if added {
        log::info!("Added user {} to project {}", member_id, project_id);
    }

    Ok(Json(MemberResponse {
        project_id: project_id.to_string(),
        user_id: member_id.to_string(),
        added,
    }))
}

// =============================================================================
// Helpers
// =============================================================================

fn due_date_from_timestamp(timestamp: i64) -> ApiResult<DateTime<Utc>> {
    DateTime::from_timestamp(timestamp, 0)
        .ok_or_else(|| ApiError::validation("due_date is out of range", Some("due_date")))
}
