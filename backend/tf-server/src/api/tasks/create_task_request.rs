use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub project_id: String,

    /// Column the task is appended to; must be on the project's board
    pub column_id: String,

    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// "low", "medium" or "high"; defaults to medium
    #[serde(default)]
    pub priority: Option<String>,
}
