//! Task REST API handlers
//!
//! Every task operation requires membership in the task's project. Creation
//! and deletion go through the ordering service so column sequences and
//! versions stay consistent.

use crate::{
    ApiError, ApiResult, AppState, CreateTaskRequest, DeleteResponse, JsonBody,
    SetStatusRequest, TaskDto, TaskListResponse, TaskResponse, UpdateTaskRequest, UserId,
    find_placed_task, parse_uuid, require_member,
};

use tf_core::{Task, TaskPriority, TaskStatus, validation};
use tf_db::{BoardOrderingService, TaskRepository};

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/tasks
///
/// Every task across the caller's projects
pub async fn list_tasks(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> ApiResult<Json<TaskListResponse>> {
    let tasks = TaskRepository::find_placed_by_member(&state.pool, user_id).await?;

    Ok(Json(TaskListResponse {
        tasks: tasks.into_iter().map(TaskDto::from).collect(),
    }))
}

/// GET /api/v1/tasks/:id
pub async fn get_task(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<String>,
) -> ApiResult<Json<TaskResponse>> {
    let task_id = parse_uuid(&id, "id")?;
    let placed = find_placed_task(&state.pool, task_id).await?;
    require_member(&state.pool, placed.task.project_id, user_id).await?;

    Ok(Json(TaskResponse {
        message: None,
        task: placed.into(),
    }))
}

/// POST /api/v1/tasks
///
/// Create a task at the end of the given column
pub async fn create_task(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    JsonBody(req): JsonBody<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<TaskResponse>)> {
    let project_id = parse_uuid(&req.project_id, "project_id")?;
    let column_id = parse_uuid(&req.column_id, "column_id")?;

    let title = validation::task_title(&req.title)?;
    let description = req
        .description
        .as_deref()
        .map(validation::description)
        .transpose()?;
    let priority = req
        .priority
        .as_deref()
        .map(TaskPriority::from_str)
        .transpose()?
        .unwrap_or_default();

    require_member(&state.pool, project_id, user_id).await?;

    let mut task = Task::new(project_id, column_id, title);
    task.description = description;
    task.priority = priority;

    let placed = BoardOrderingService::new(state.pool.clone())
        .create_task(task)
        .await?;

    log::info!(
        "User {} created task {} in column {}",
        user_id,
        placed.task.id,
        column_id
    );

    Ok((
        StatusCode::CREATED,
        Json(TaskResponse {
            message: Some("Task created".to_string()),
            task: placed.into(),
        }),
    ))
}

/// PUT /api/v1/tasks/:id
///
/// Partial update of title, description, priority and assignee
pub async fn update_task(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    let task_id = parse_uuid(&id, "id")?;
    let placed = find_placed_task(&state.pool, task_id).await?;
    require_member(&state.pool, placed.task.project_id, user_id).await?;

    let mut task = placed.task;
    if let Some(ref title) = req.title {
        task.title = validation::task_title(title)?;
    }
    if let Some(ref description) = req.description {
        task.description = Some(validation::description(description)?);
    }
    if let Some(ref priority) = req.priority {
        task.priority = TaskPriority::from_str(priority)?;
    }
    if let Some(ref assignee) = req.assignee_id {
        task.assignee_id = if assignee.trim().is_empty() {
            None
        } else {
            Some(parse_uuid(assignee, "assignee_id")?)
        };
    }
    task.updated_at = Utc::now();

    if !TaskRepository::update(&state.pool, &task).await? {
        return Err(ApiError::not_found(format!("Task {} not found", id)));
    }

    Ok(Json(TaskResponse {
        message: Some("Task updated".to_string()),
        task: TaskDto::from_task(task, &placed.column_title),
    }))
}

/// PUT /api/v1/tasks/:id/status
///
/// Move the task to the first column matching the status. A task already
/// in that column is left where it is.
pub async fn set_task_status(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<SetStatusRequest>,
) -> ApiResult<Json<TaskResponse>> {
    let task_id = parse_uuid(&id, "id")?;
    let status = TaskStatus::from_str(&req.status)?;

    let placed = find_placed_task(&state.pool, task_id).await?;
    require_member(&state.pool, placed.task.project_id, user_id).await?;

    let change = BoardOrderingService::new(state.pool.clone())
        .set_status(task_id, status)
        .await?;

    let message = if change.moved {
        log::info!("User {} set task {} to {}", user_id, task_id, status);
        format!("Task status updated to {}", status)
    } else {
        format!("Task already has status {}", status)
    };

    Ok(Json(TaskResponse {
        message: Some(message),
        task: change.task.into(),
    }))
}

/// DELETE /api/v1/tasks/:id
pub async fn delete_task(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let task_id = parse_uuid(&id, "id")?;
    let placed = find_placed_task(&state.pool, task_id).await?;
    require_member(&state.pool, placed.task.project_id, user_id).await?;

    if !BoardOrderingService::new(state.pool.clone())
        .delete_task(task_id)
        .await?
    {
        return Err(ApiError::not_found(format!("Task {} not found", id)));
    }

    log::info!("User {} deleted task {}", user_id, task_id);

    Ok(Json(DeleteResponse {
        deleted_id: task_id.to_string(),
    }))
}
