pub mod columns;
pub mod move_task_request;
