use serde::Deserialize;

/// Partial update; absent fields are left unchanged
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub priority: Option<String>,

    /// User ID; an empty string unassigns
    #[serde(default)]
    pub assignee_id: Option<String>,
}
