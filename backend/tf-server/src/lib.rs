pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    authorization::{require_member, require_owner},
    columns::{columns::move_task, move_task_request::MoveTaskRequest},
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::{json_body::JsonBody, user_id::UserId},
    projects::{
        add_member_request::AddMemberRequest,
        board_response::{BoardDto, BoardResponse, ColumnDto},
        create_project_request::CreateProjectRequest,
        member_response::MemberResponse,
        project_detail_response::ProjectDetailResponse,
        project_dto::ProjectDto,
        project_list_response::ProjectListResponse,
        project_response::ProjectResponse,
        projects::{
            add_member, create_project, delete_project, get_board, get_project, list_projects,
            update_project,
        },
        update_project_request::UpdateProjectRequest,
    },
    resolve::{find_placed_task, parse_uuid},
    tasks::{
        create_task_request::CreateTaskRequest,
        set_status_request::SetStatusRequest,
        task_dto::TaskDto,
        task_list_response::TaskListResponse,
        task_response::TaskResponse,
        tasks::{create_task, delete_task, get_task, list_tasks, set_task_status, update_task},
        update_task_request::UpdateTaskRequest,
    },
};

pub use crate::error::{Result as ServerErrorResult, ServerError};
pub use crate::routes::build_router;
pub use crate::state::AppState;
