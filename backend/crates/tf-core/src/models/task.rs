//! Task entity.
//!
//! A task belongs to exactly one column at a time. `column_id` is both the
//! task's column reference and its membership in that column's sequence;
//! `position` is its index in the sequence.

use crate::TaskPriority;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub project_id: Uuid,
    pub column_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub assignee_id: Option<Uuid>,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(project_id: Uuid, column_id: Uuid, title: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            project_id,
            column_id,
            title,
            description: None,
            priority: TaskPriority::default(),
            assignee_id: None,
            position: 0,
            created_at: now,
            updated_at: now,
        }
    }
}
