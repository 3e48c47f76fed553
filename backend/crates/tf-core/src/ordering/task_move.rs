use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A request to place a task at `destination_index` of a column.
///
/// The index is counted in the destination sequence after the task has
/// been removed from its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskMove {
    pub task_id: Uuid,
    pub source_column_id: Uuid,
    pub destination_column_id: Uuid,
    pub destination_index: usize,
}

impl TaskMove {
    /// Build a move from an untrusted index. Negative indices are rejected.
    #[track_caller]
    pub fn new(
        task_id: Uuid,
        source_column_id: Uuid,
        destination_column_id: Uuid,
        destination_index: i64,
    ) -> CoreErrorResult<Self> {
        let destination_index =
            usize::try_from(destination_index).map_err(|_| CoreError::Validation {
                message: format!(
                    "destination_index must be a non-negative integer, got {}",
                    destination_index
                ),
                field: Some("destination_index".to_string()),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            task_id,
            source_column_id,
            destination_column_id,
            destination_index,
        })
    }

    /// Same column on both ends.
    pub fn is_reorder(&self) -> bool {
        self.source_column_id == self.destination_column_id
    }
}
