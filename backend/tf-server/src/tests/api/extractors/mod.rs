mod json_body;
mod user_id;
