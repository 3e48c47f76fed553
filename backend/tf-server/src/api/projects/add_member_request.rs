use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AddMemberRequest {
    pub user_id: String,
}
