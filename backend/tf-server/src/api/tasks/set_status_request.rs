use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    /// "todo", "in-progress" or "completed"
    pub status: String,
}
