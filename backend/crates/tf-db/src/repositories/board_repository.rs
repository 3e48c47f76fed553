use crate::Result as DbErrorResult;
use crate::repositories::column_repository::ColumnRepository;
use crate::repositories::row;
use crate::repositories::task_repository::TaskRepository;

use tf_core::{Board, BoardColumn, BoardView};

use sqlx::SqliteConnection;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct BoardRepository;

impl BoardRepository {
    pub async fn create<'e, E>(executor: E, board: &Board) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query("INSERT INTO tf_boards (id, project_id, created_at) VALUES (?, ?, ?)")
            .bind(board.id.to_string())
            .bind(board.project_id.to_string())
            .bind(board.created_at.timestamp())
            .execute(executor)
            .await?;

        Ok(())
    }

    pub async fn find_by_project<'e, E>(executor: E, project_id: Uuid) -> DbErrorResult<Option<Board>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query("SELECT id, project_id, created_at FROM tf_boards WHERE project_id = ?")
            .bind(project_id.to_string())
            .fetch_optional(executor)
            .await?;

        row.as_ref().map(board_from_row).transpose()
    }

    /// The project's board with every column in board order and every
    /// task in sequence order.
    pub async fn find_view_by_project(
        conn: &mut SqliteConnection,
        project_id: Uuid,
    ) -> DbErrorResult<Option<BoardView>> {
        let Some(board) = Self::find_by_project(&mut *conn, project_id).await? else {
            return Ok(None);
        };

        let columns = ColumnRepository::find_by_board(&mut *conn, board.id).await?;
        let tasks = TaskRepository::find_by_board(&mut *conn, board.id).await?;

        let columns = columns
            .into_iter()
            .map(|column| {
                let tasks = tasks
                    .iter()
                    .filter(|t| t.column_id == column.id)
                    .cloned()
                    .collect();
                BoardColumn { column, tasks }
            })
            .collect();

        Ok(Some(BoardView { board, columns }))
    }
}

fn board_from_row(r: &SqliteRow) -> DbErrorResult<Board> {
    Ok(Board {
        id: row::uuid(r, "id")?,
        project_id: row::uuid(r, "project_id")?,
        created_at: row::timestamp(r, "created_at")?,
    })
}
