//! Input rules shared by the REST layer and the CLI.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

pub const MIN_PROJECT_NAME_LEN: usize = 3;
pub const MAX_NAME_LEN: usize = 200;
pub const MAX_DESCRIPTION_LEN: usize = 10_000;

/// Trimmed project name, at least three characters long.
#[track_caller]
pub fn project_name(name: &str) -> CoreErrorResult<String> {
    bounded("name", name, MIN_PROJECT_NAME_LEN, MAX_NAME_LEN)
}

/// Trimmed task title, non-empty.
#[track_caller]
pub fn task_title(title: &str) -> CoreErrorResult<String> {
    bounded("title", title, 1, MAX_NAME_LEN)
}

#[track_caller]
pub fn description(description: &str) -> CoreErrorResult<String> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(CoreError::Validation {
            message: format!(
                "description must be at most {} characters",
                MAX_DESCRIPTION_LEN
            ),
            field: Some("description".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(description.to_string())
}

#[track_caller]
fn bounded(field: &str, value: &str, min: usize, max: usize) -> CoreErrorResult<String> {
    let trimmed = value.trim();
    let len = trimmed.chars().count();

    if len < min {
        return Err(CoreError::Validation {
            message: if min == 1 {
                format!("{} is required", field)
            } else {
                format!("{} must be at least {} characters", field, min)
            },
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    if len > max {
        return Err(CoreError::Validation {
            message: format!("{} must be at most {} characters", field, max),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(trimmed.to_string())
}
