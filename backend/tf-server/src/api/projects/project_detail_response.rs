use crate::{ProjectDto, TaskDto};
use serde::Serialize;

/// A project with its team and every task
#[derive(Debug, Serialize)]
pub struct ProjectDetailResponse {
    pub project: ProjectDto,
    /// Member user IDs, owner included
    pub team: Vec<String>,
    pub tasks: Vec<TaskDto>,
}
