pub mod error;
pub mod repositories;
pub mod services;

pub use error::{DbError, Result};
pub use repositories::board_repository::BoardRepository;
pub use repositories::column_repository::ColumnRepository;
pub use repositories::project_member_repository::ProjectMemberRepository;
pub use repositories::project_repository::ProjectRepository;
pub use repositories::task_repository::TaskRepository;
pub use services::board_ordering_service::{BoardOrderingService, StatusChange};
pub use services::project_service::ProjectService;
