use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct MoveTaskRequest {
    pub task_id: String,
    pub source_column_id: String,
    pub destination_column_id: String,
    /// Zero-based slot in the destination column; past the end appends
    pub destination_index: i64,
}
