pub mod add_member_request;
pub mod board_response;
pub mod create_project_request;
pub mod member_response;
pub mod project_detail_response;
pub mod project_dto;
pub mod project_list_response;
pub mod project_response;
pub mod projects;
pub mod update_project_request;
