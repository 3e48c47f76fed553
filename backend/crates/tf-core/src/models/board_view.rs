use crate::{Board, Column, Task, TaskStatus};

use serde::{Deserialize, Serialize};

/// A board with its columns in board order, each holding its tasks in
/// sequence order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub board: Board,
    pub columns: Vec<BoardColumn>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardColumn {
    pub column: Column,
    pub tasks: Vec<Task>,
}

impl BoardColumn {
    pub fn status(&self) -> TaskStatus {
        TaskStatus::from_column_title(&self.column.title)
    }
}
