//! Board ordering REST API handler

use crate::{
    ApiResult, AppState, JsonBody, MoveTaskRequest, TaskResponse, UserId, find_placed_task,
    parse_uuid, require_member,
};

use tf_core::TaskMove;
use tf_db::BoardOrderingService;

use axum::{Json, extract::State};

/// PUT /api/v1/columns/move-task
///
/// Place a task at `destination_index` of a column on the same board,
/// reordering within one column or moving across two.
pub async fn move_task(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    JsonBody(req): JsonBody<MoveTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    let task_move = TaskMove::new(
        parse_uuid(&req.task_id, "task_id")?,
        parse_uuid(&req.source_column_id, "source_column_id")?,
        parse_uuid(&req.destination_column_id, "destination_column_id")?,
        req.destination_index,
    )?;

    let placed = find_placed_task(&state.pool, task_move.task_id).await?;
    require_member(&state.pool, placed.task.project_id, user_id).await?;

    let moved = BoardOrderingService::new(state.pool.clone())
        .move_task(task_move)
        .await?;

    Ok(Json(TaskResponse {
        message: Some("Task moved successfully".to_string()),
        task: moved.into(),
    }))
}
