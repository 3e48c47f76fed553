pub mod board;
pub mod board_view;
pub mod column;
pub mod placed_task;
pub mod project;
pub mod project_member;
pub mod project_stats;
pub mod project_status;
pub mod task;
pub mod task_priority;
pub mod task_status;
