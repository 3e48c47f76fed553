use crate::{
    BoardRepository, ColumnRepository, ProjectMemberRepository, ProjectRepository,
    Result as DbErrorResult,
};
use crate::services::begin_write;

use tf_core::{Board, Column, Project, ProjectMember};

use sqlx::SqlitePool;
use uuid::Uuid;

pub struct ProjectService {
    pool: SqlitePool,
}

impl ProjectService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a project with its owner registered as a member and a board
    /// holding the default columns.
    pub async fn create(&self, project: &Project) -> DbErrorResult<(Board, Vec<Column>)> {
        let mut tx = begin_write(&self.pool).await?;

        ProjectRepository::create(&mut *tx, project).await?;
        ProjectMemberRepository::add(&mut *tx, &ProjectMember::new(project.id, project.owner_id))
            .await?;

        let board = Board::new(project.id);
        BoardRepository::create(&mut *tx, &board).await?;

        let columns = Column::default_set(board.id);
        for column in &columns {
            ColumnRepository::create(&mut *tx, column).await?;
        }

        tx.commit().await?;

        log::info!(
            "Created project {} with board {} and {} columns",
            project.id,
            board.id,
            columns.len()
        );

        Ok((board, columns))
    }

    pub async fn delete(&self, project_id: Uuid) -> DbErrorResult<bool> {
        let deleted = ProjectRepository::delete(&self.pool, project_id).await?;
        if deleted {
            log::info!("Deleted project {} and its board", project_id);
        }
        Ok(deleted)
    }
}
