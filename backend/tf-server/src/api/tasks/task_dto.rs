use tf_core::{PlacedTask, Task, TaskStatus};

use serde::Serialize;

/// Task DTO for JSON serialization
///
/// `status` and `completed` are derived from the column the task sits in.
#[derive(Debug, Serialize)]
pub struct TaskDto {
    pub id: String,
    pub project_id: String,
    pub column_id: String,
    pub column_title: String,
    pub title: String,
    pub description: Option<String>,
    pub priority: String,
    pub assignee_id: Option<String>,
    pub position: i32,
    pub status: String,
    pub completed: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl TaskDto {
    pub fn from_task(t: Task, column_title: &str) -> Self {
        let status = TaskStatus::from_column_title(column_title);

        Self {
            id: t.id.to_string(),
            project_id: t.project_id.to_string(),
            column_id: t.column_id.to_string(),
            column_title: column_title.to_string(),
            title: t.title,
            description: t.description,
            priority: t.priority.as_str().to_string(),
            assignee_id: t.assignee_id.map(|id| id.to_string()),
            position: t.position,
            status: status.as_str().to_string(),
            completed: status.is_completed(),
            created_at: t.created_at.timestamp(),
            updated_at: t.updated_at.timestamp(),
        }
    }
}

impl From<PlacedTask> for TaskDto {
    fn from(placed: PlacedTask) -> Self {
        Self::from_task(placed.task, &placed.column_title)
    }
}
