use crate::health;
use crate::{
    AppState, add_member, create_project, create_task, delete_project, delete_task, get_board,
    get_project, get_task, list_projects, list_tasks, move_task, set_task_status, update_project,
    update_task,
};

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Projects
        .route("/api/v1/projects", get(list_projects).post(create_project))
        .route(
            "/api/v1/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route("/api/v1/projects/{id}/board", get(get_board))
        .route("/api/v1/projects/{id}/members", post(add_member))
        // Tasks
        .route("/api/v1/tasks", get(list_tasks).post(create_task))
        .route(
            "/api/v1/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route("/api/v1/tasks/{id}/status", put(set_task_status))
        // Board ordering
        .route("/api/v1/columns/move-task", put(move_task))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
