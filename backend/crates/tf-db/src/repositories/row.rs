//! Column decoding shared by the repositories.
//!
//! UUIDs are stored as TEXT and timestamps as INTEGER Unix seconds.

use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

#[track_caller]
pub fn uuid(row: &SqliteRow, column: &str) -> DbErrorResult<Uuid> {
    let value: String = row.try_get(column)?;
    parse_uuid(column, &value)
}

#[track_caller]
pub fn optional_uuid(row: &SqliteRow, column: &str) -> DbErrorResult<Option<Uuid>> {
    let value: Option<String> = row.try_get(column)?;
    value.map(|v| parse_uuid(column, &v)).transpose()
}

#[track_caller]
pub fn timestamp(row: &SqliteRow, column: &str) -> DbErrorResult<DateTime<Utc>> {
    let value: i64 = row.try_get(column)?;
    parse_timestamp(column, value)
}

#[track_caller]
pub fn optional_timestamp(row: &SqliteRow, column: &str) -> DbErrorResult<Option<DateTime<Utc>>> {
    let value: Option<i64> = row.try_get(column)?;
    value.map(|v| parse_timestamp(column, v)).transpose()
}

/// Decode an enum stored by its `as_str()` form.
#[track_caller]
pub fn parsed<T>(row: &SqliteRow, column: &str) -> DbErrorResult<T>
where
    T: FromStr<Err = tf_core::CoreError>,
{
    let value: String = row.try_get(column)?;
    Ok(T::from_str(&value)?)
}

#[track_caller]
fn parse_uuid(column: &str, value: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::Initialization {
        message: format!("Invalid UUID in {}: {}", column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
fn parse_timestamp(column: &str, value: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(value, 0).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}
