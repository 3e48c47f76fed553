pub mod json_body;
pub mod user_id;
