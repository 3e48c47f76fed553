#![allow(dead_code)]

//! Test infrastructure for tf-server API tests

use tf_auth::JwtValidator;
use tf_server::{AppState, build_router};

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;
use uuid::Uuid;

pub const OWNER: Uuid = Uuid::from_u128(0xA11CE);
pub const MEMBER: Uuid = Uuid::from_u128(0xB0B);
pub const OUTSIDER: Uuid = Uuid::from_u128(0xEE7E);

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    // In-memory needs a single connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/tf-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing, auth disabled
pub async fn create_test_app_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
        jwt_validator: None,
        default_user_id: OWNER,
    }
}

/// Create AppState for testing with HS256 auth
pub async fn create_test_app_state_with_auth(secret: &[u8]) -> AppState {
    AppState {
        pool: create_test_pool().await,
        jwt_validator: Some(Arc::new(JwtValidator::with_hs256(secret))),
        default_user_id: OWNER,
    }
}

/// Send a request as `user` and return status plus parsed JSON body
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    user: Uuid,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("X-User-Id", user.to_string());

    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    into_json(state, request).await
}

pub async fn into_json(state: &AppState, request: Request<Body>) -> (StatusCode, Value) {
    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };

    (status, json)
}

/// A project created through the API, with its default columns
pub struct TestBoard {
    pub project_id: String,
    /// Column ids in board order: To Do, In Progress, Done
    pub columns: Vec<String>,
}

impl TestBoard {
    pub fn todo(&self) -> &str {
        &self.columns[0]
    }

    pub fn in_progress(&self) -> &str {
        &self.columns[1]
    }

    pub fn done(&self) -> &str {
        &self.columns[2]
    }
}

/// Create a project owned by `owner` and read back its board
pub async fn create_test_board(state: &AppState, owner: Uuid, name: &str) -> TestBoard {
    let (status, json) = send(
        state,
        "POST",
        "/api/v1/projects",
        owner,
        Some(json!({ "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create project: {json}");

    let project_id = json["project"]["id"].as_str().unwrap().to_string();
    let columns = board_columns(state, owner, &project_id)
        .await
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_string())
        .collect();

    TestBoard {
        project_id,
        columns,
    }
}

/// Create a task at the end of `column_id`, returning its id
pub async fn create_test_task(
    state: &AppState,
    user: Uuid,
    project_id: &str,
    column_id: &str,
    title: &str,
) -> String {
    let (status, json) = send(
        state,
        "POST",
        "/api/v1/tasks",
        user,
        Some(json!({
            "project_id": project_id,
            "column_id": column_id,
            "title": title,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create task: {json}");

    json["task"]["id"].as_str().unwrap().to_string()
}

/// Columns of the project's board, in order, each with its tasks
pub async fn board_columns(state: &AppState, user: Uuid, project_id: &str) -> Vec<Value> {
    let (status, json) = send(
        state,
        "GET",
        &format!("/api/v1/projects/{}/board", project_id),
        user,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "get board: {json}");

    json["board"]["columns"].as_array().unwrap().clone()
}

/// Task ids of one column in order
pub async fn column_task_ids(
    state: &AppState,
    user: Uuid,
    project_id: &str,
    column_id: &str,
) -> Vec<String> {
    board_columns(state, user, project_id)
        .await
        .into_iter()
        .find(|c| c["id"] == column_id)
        .map(|c| {
            c["tasks"]
                .as_array()
                .unwrap()
                .iter()
                .map(|t| t["id"].as_str().unwrap().to_string())
                .collect()
        })
        .unwrap_or_default()
}

pub fn move_body(task_id: &str, source: &str, destination: &str, index: i64) -> Value {
    json!({
        "task_id": task_id,
        "source_column_id": source,
        "destination_column_id": destination,
        "destination_index": index,
    })
}
