use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub project_id: String,
    pub user_id: String,
    /// `false` when the user was already on the team
    pub added: bool,
}
