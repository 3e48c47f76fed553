//! Column entity - one workflow stage on a board.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Columns created for every new project, in board order.
pub const DEFAULT_COLUMN_TITLES: [&str; 3] = ["To Do", "In Progress", "Done"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: Uuid,
    pub board_id: Uuid,
    pub title: String,
    /// Horizontal order within the board
    pub position: i32,
    /// Optimistic locking version, bumped on every change to the task sequence
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Column {
    pub fn new(board_id: Uuid, title: String, position: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            board_id,
            title,
            position,
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    /// The "To Do" / "In Progress" / "Done" triple for a fresh board.
    pub fn default_set(board_id: Uuid) -> Vec<Self> {
        DEFAULT_COLUMN_TITLES
            .iter()
            .enumerate()
            .map(|(i, title)| Self::new(board_id, title.to_string(), i as i32))
            .collect()
    }
}
