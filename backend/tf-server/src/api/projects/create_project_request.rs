use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    /// Project name, at least 3 characters (required)
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// "active", "completed" or "on-hold"; defaults to active
    #[serde(default)]
    pub status: Option<String>,

    /// Unix timestamp (seconds)
    #[serde(default)]
    pub due_date: Option<i64>,
}
