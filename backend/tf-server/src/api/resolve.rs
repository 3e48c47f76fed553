//! Identifier parsing and lookup helpers

use crate::{ApiError, ApiResult};

use tf_core::PlacedTask;
use tf_db::TaskRepository;

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Parse a UUID from a path segment or body field, naming the field on failure.
#[track_caller]
pub fn parse_uuid(value: &str, field: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(value.trim()).map_err(|e| ApiError::Validation {
        message: format!("Invalid UUID for {}: {}", field, e),
        field: Some(field.to_string()),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// A task together with the title of the column it sits in.
pub async fn find_placed_task(pool: &SqlitePool, task_id: Uuid) -> ApiResult<PlacedTask> {
    TaskRepository::find_placed(pool, task_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Task {} not found", task_id)))
}
