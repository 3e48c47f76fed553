//! REST API error types
//!
//! Every failure leaves the server as `{"error": {"code", "message", "field"?}}`
//! with the matching HTTP status.

use tf_auth::AuthError;
use tf_core::CoreError;
use tf_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Status change with no column to land in (404)
    #[error("No matching column: {message} {location}")]
    NoMatchingColumn {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Missing or rejected credentials (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Authenticated but not allowed (403)
    #[error("Access denied: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Concurrent modification (409)
    #[error("Conflict: {message} (current version: {current_version:?}) {location}")]
    Conflict {
        message: String,
        current_version: Option<i32>,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } | Self::NoMatchingColumn { .. } => StatusCode::NOT_FOUND,
            Self::Validation { .. } | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::NoMatchingColumn { .. } => "NO_MATCHING_COLUMN",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::Forbidden { .. } => "ACCESS_DENIED",
            Self::Conflict { .. } => "CONFLICT",
            Self::Internal { .. } => "INTERNAL_ERROR",
            Self::BadRequest { .. } => "BAD_REQUEST",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.status_code() {
            s if s.is_server_error() => log::error!("{}", self),
            _ => log::warn!("{}", self),
        }

        let status = self.status_code();
        let code = self.error_code().to_string();

        let body = match self {
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                code,
                message,
                field,
            },
            ApiError::Conflict {
                message,
                current_version: Some(version),
                ..
            } => ApiErrorBody {
                code,
                message: format!("{} (current version: {})", message, version),
                field: None,
            },
            ApiError::NotFound { message, .. }
            | ApiError::NoMatchingColumn { message, .. }
            | ApiError::Unauthorized { message, .. }
            | ApiError::Forbidden { message, .. }
            | ApiError::Conflict { message, .. }
            | ApiError::Internal { message, .. }
            | ApiError::BadRequest { message, .. } => ApiErrorBody {
                code,
                message,
                field: None,
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert sqlx errors to API errors
impl From<sqlx::Error> for ApiError {
    #[track_caller]
    fn from(e: sqlx::Error) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert body extraction failures to API errors
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match rejection {
            JsonRejection::MissingJsonContentType(e) => ApiError::BadRequest {
                message: e.body_text(),
                location,
            },
            e => ApiError::Validation {
                message: e.body_text(),
                field: None,
                location,
            },
        }
    }
}

/// Convert domain errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            CoreError::InvalidTaskStatus { value, .. } => ApiError::Validation {
                message: format!(
                    "Invalid status '{}': expected todo, in-progress or completed",
                    value
                ),
                field: Some("status".to_string()),
                location,
            },
            CoreError::InvalidTaskPriority { value, .. } => ApiError::Validation {
                message: format!(
                    "Invalid priority '{}': expected low, medium or high",
                    value
                ),
                field: Some("priority".to_string()),
                location,
            },
            CoreError::InvalidProjectStatus { value, .. } => ApiError::Validation {
                message: format!(
                    "Invalid project status '{}': expected active, completed or on-hold",
                    value
                ),
                field: Some("status".to_string()),
                location,
            },
            CoreError::TaskNotInColumn {
                task_id, column_id, ..
            } => ApiError::NotFound {
                message: format!("Task {} not found in column {}", task_id, column_id),
                location,
            },
            CoreError::Uuid { source, .. } => ApiError::Validation {
                message: format!("Invalid UUID format: {}", source),
                field: None,
                location,
            },
        }
    }
}

/// Convert authentication failures to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        log::debug!("Authentication failed ({}): {}", e.error_code(), e);
        ApiError::Unauthorized {
            message: e.public_message(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            DbError::NotFound { entity, id, .. } => ApiError::NotFound {
                message: format!("{} {} not found", entity, id),
                location,
            },
            DbError::NoMatchingColumn { status, .. } => ApiError::NoMatchingColumn {
                message: format!("No column on the board matches status '{}'", status),
                location,
            },
            DbError::Conflict {
                message,
                current_version,
                ..
            } => ApiError::Conflict {
                message,
                current_version,
                location,
            },
            DbError::Core { source, .. } => ApiError::from(source),
            DbError::Sqlx { source, .. } => {
                log::error!("Database error: {}", source);
                match source {
                    sqlx::Error::RowNotFound => ApiError::NotFound {
                        message: "Resource not found".to_string(),
                        location,
                    },
                    _ => ApiError::Internal {
                        message: "Database operation failed".to_string(),
                        location,
                    },
                }
            }
            DbError::Migration { message, .. } => ApiError::Internal {
                message: format!("Database migration error: {}", message),
                location,
            },
            DbError::Initialization { message, .. } => ApiError::Internal {
                message: format!("Database initialization error: {}", message),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
