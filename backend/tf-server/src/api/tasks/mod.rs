pub mod create_task_request;
pub mod set_status_request;
pub mod task_dto;
pub mod task_list_response;
pub mod task_response;
pub mod tasks;
pub mod update_task_request;
