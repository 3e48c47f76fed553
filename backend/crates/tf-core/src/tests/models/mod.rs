mod column;
mod project_stats;
mod project_status;
mod task_priority;
mod task_status;
