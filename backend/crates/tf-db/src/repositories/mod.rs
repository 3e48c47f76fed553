pub mod board_repository;
pub mod column_repository;
pub mod project_member_repository;
pub mod project_repository;
pub mod row;
pub mod task_repository;
