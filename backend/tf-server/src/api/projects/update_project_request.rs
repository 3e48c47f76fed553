use serde::Deserialize;

/// Partial update; absent fields are left unchanged
#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// "active", "completed" or "on-hold"
    #[serde(default)]
    pub status: Option<String>,

    /// Unix timestamp (seconds)
    #[serde(default)]
    pub due_date: Option<i64>,

    /// Remove the due date; takes precedence over `due_date`
    #[serde(default)]
    pub clear_due_date: bool,
}
