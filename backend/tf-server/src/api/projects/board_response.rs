use crate::TaskDto;

use tf_core::{BoardColumn, BoardView};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BoardResponse {
    pub board: BoardDto,
}

#[derive(Debug, Serialize)]
pub struct BoardDto {
    pub id: String,
    pub project_id: String,
    pub columns: Vec<ColumnDto>,
}

/// A column and its tasks in board order
#[derive(Debug, Serialize)]
pub struct ColumnDto {
    pub id: String,
    pub title: String,
    pub position: i32,
    pub version: i32,
    /// Status every task in this column has
    pub status: String,
    pub tasks: Vec<TaskDto>,
}

impl From<BoardView> for BoardDto {
    fn from(view: BoardView) -> Self {
        Self {
            id: view.board.id.to_string(),
            project_id: view.board.project_id.to_string(),
            columns: view.columns.into_iter().map(ColumnDto::from).collect(),
        }
    }
}

impl From<BoardColumn> for ColumnDto {
    fn from(board_column: BoardColumn) -> Self {
        let status = board_column.status();
        let BoardColumn { column, tasks } = board_column;

        Self {
            id: column.id.to_string(),
            position: column.position,
            version: column.version,
            status: status.as_str().to_string(),
            tasks: tasks
                .into_iter()
                .map(|task| TaskDto::from_task(task, &column.title))
                .collect(),
            title: column.title,
        }
    }
}
