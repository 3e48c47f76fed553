use tf_core::{Board, Column, Project, Task};
use tf_db::{BoardOrderingService, ProjectService, TaskRepository};

use sqlx::SqlitePool;
use uuid::Uuid;

/// A project as created through the service: board plus default columns.
pub struct SeededProject {
    pub project: Project,
    pub board: Board,
    pub columns: Vec<Column>,
}

impl SeededProject {
    pub fn todo(&self) -> &Column {
        &self.columns[0]
    }

    pub fn in_progress(&self) -> &Column {
        &self.columns[1]
    }

    pub fn done(&self) -> &Column {
        &self.columns[2]
    }
}

pub fn create_test_project(owner_id: Uuid) -> Project {
    let mut project = Project::new("Test Project".to_string(), owner_id);
    project.description = Some("Test project description".to_string());
    project
}

pub async fn seed_project(pool: &SqlitePool, owner_id: Uuid) -> SeededProject {
    let project = create_test_project(owner_id);
    let (board, columns) = ProjectService::new(pool.clone())
        .create(&project)
        .await
        .expect("Failed to seed project");

    SeededProject {
        project,
        board,
        columns,
    }
}

pub async fn seed_task(pool: &SqlitePool, project_id: Uuid, column_id: Uuid, title: &str) -> Task {
    BoardOrderingService::new(pool.clone())
        .create_task(Task::new(project_id, column_id, title.to_string()))
        .await
        .expect("Failed to seed task")
        .task
}

/// Task ids of a column as stored.
pub async fn sequence(pool: &SqlitePool, column_id: Uuid) -> Vec<Uuid> {
    TaskRepository::column_sequence(pool, column_id)
        .await
        .expect("Failed to read column sequence")
}
