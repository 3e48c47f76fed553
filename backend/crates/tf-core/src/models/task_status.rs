//! Task status, derived from the title of the column holding the task.
//!
//! Status is never stored. Reading it always goes through
//! [`TaskStatus::from_column_title`], and setting it goes through
//! [`TaskStatus::resolve_column`] followed by a move.

use crate::{Column, CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Completed,
}

const COMPLETED_MARKERS: &[&str] = &["done", "complete"];
const IN_PROGRESS_MARKERS: &[&str] = &["progress", "doing"];
const TODO_MARKERS: &[&str] = &["to do", "todo", "backlog"];

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    pub fn is_completed(&self) -> bool {
        *self == Self::Completed
    }

    /// Classify a column title. Matching is case-insensitive substring
    /// matching; anything unrecognised counts as `Todo`.
    pub fn from_column_title(title: &str) -> Self {
        let title = title.to_lowercase();
        if contains_any(&title, COMPLETED_MARKERS) {
            Self::Completed
        } else if contains_any(&title, IN_PROGRESS_MARKERS) {
            Self::InProgress
        } else {
            Self::Todo
        }
    }

    /// Whether a column with this title is a target for this status.
    pub fn matches_column_title(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        match self {
            Self::Completed => contains_any(&title, COMPLETED_MARKERS),
            Self::InProgress => contains_any(&title, IN_PROGRESS_MARKERS),
            Self::Todo => contains_any(&title, TODO_MARKERS),
        }
    }

    /// Pick the column a task with this status belongs in.
    ///
    /// `columns` must be in board order. The first matching column wins;
    /// `Todo` falls back to the first column of the board.
    pub fn resolve_column<'a>(&self, columns: &'a [Column]) -> Option<&'a Column> {
        columns
            .iter()
            .find(|c| self.matches_column_title(&c.title))
            .or_else(|| match self {
                Self::Todo => columns.first(),
                _ => None,
            })
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

impl FromStr for TaskStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(CoreError::InvalidTaskStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
