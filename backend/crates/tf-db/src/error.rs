use tf_core::{CoreError, ErrorLocation, TaskStatus};

use std::panic::Location;

use thiserror::Error;

/// SQLite result codes for a locked database or a stale WAL snapshot.
const SQLITE_BUSY_CODES: &[&str] = &["5", "6", "517"];

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("{entity} not found: {id} {location}")]
    NotFound {
        entity: &'static str,
        id: String,
        location: ErrorLocation,
    },

    /// A column changed underneath a read-modify-write.
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        current_version: Option<i32>,
        location: ErrorLocation,
    },

    #[error("No column on the board matches status '{status}' {location}")]
    NoMatchingColumn {
        status: TaskStatus,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Core {
        source: CoreError,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let busy = source
            .as_database_error()
            .and_then(|e| e.code())
            .is_some_and(|code| SQLITE_BUSY_CODES.iter().any(|c| *c == code));

        if busy {
            return Self::Conflict {
                message: format!("database is busy: {}", source),
                current_version: None,
                location: ErrorLocation::from(Location::caller()),
            };
        }

        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    #[track_caller]
    fn from(e: sqlx::migrate::MigrateError) -> Self {
        Self::Migration {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for DbError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
