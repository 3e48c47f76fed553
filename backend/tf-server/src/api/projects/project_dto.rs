use tf_core::{Project, ProjectStats};

use serde::Serialize;

/// Project DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct ProjectDto {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub due_date: Option<i64>,
    pub owner_id: String,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub created_at: i64,
    pub updated_at: i64,
}

impl ProjectDto {
    pub fn from_project(p: Project, stats: ProjectStats) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name,
            description: p.description,
            status: p.status.as_str().to_string(),
            due_date: p.due_date.map(|d| d.timestamp()),
            owner_id: p.owner_id.to_string(),
            total_tasks: stats.total_tasks,
            completed_tasks: stats.completed_tasks,
            created_at: p.created_at.timestamp(),
            updated_at: p.updated_at.timestamp(),
        }
    }
}
