pub mod error;
pub mod models;
pub mod ordering;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::board::Board;
pub use models::board_view::{BoardColumn, BoardView};
pub use models::column::{Column, DEFAULT_COLUMN_TITLES};
pub use models::placed_task::PlacedTask;
pub use models::project::Project;
pub use models::project_member::ProjectMember;
pub use models::project_stats::ProjectStats;
pub use models::project_status::ProjectStatus;
pub use models::task::Task;
pub use models::task_priority::TaskPriority;
pub use models::task_status::TaskStatus;
pub use ordering::sequence::{move_across, reorder_within};
pub use ordering::task_move::TaskMove;
