use crate::{Task, TaskStatus};

use serde::{Deserialize, Serialize};

/// A task together with the title of the column it currently sits in,
/// which is all that is needed to derive its status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedTask {
    pub task: Task,
    pub column_title: String,
}

impl PlacedTask {
    pub fn status(&self) -> TaskStatus {
        TaskStatus::from_column_title(&self.column_title)
    }
}
